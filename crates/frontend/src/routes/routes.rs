use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u601_apply_mapping::ApplyMapping;
use contracts::usecases::u602_excel_cleanup::ExcelCleanup;
use leptos::prelude::*;

use crate::config::RoutesConfig;
use crate::layout::global_context::use_console;
use crate::layout::Shell;
use crate::pages::gallery::GalleryView;
use crate::usecases::u601_apply_mapping::ApplyMappingView;
use crate::usecases::u602_excel_cleanup::ExcelCleanupView;

/// Страница консоли, выбранная по pathname (страницы рендерит сервер,
/// клиентский роутер не нужен)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsolePage {
    Gallery,
    Mapping,
    ExcelCleanup,
    Unknown,
}

impl ConsolePage {
    pub fn from_path(pathname: &str, routes: &RoutesConfig) -> Self {
        let path = match pathname.trim_end_matches('/') {
            "" => "/",
            p => p,
        };
        let matches = |route: &str| route.trim_end_matches('/') == path;

        if matches(&routes.gallery) {
            Self::Gallery
        } else if matches(&routes.mapping) {
            Self::Mapping
        } else if matches(&routes.excel_cleanup) {
            Self::ExcelCleanup
        } else {
            Self::Unknown
        }
    }

    pub fn title(self) -> String {
        match self {
            Self::Gallery => "Gallery".to_string(),
            Self::Mapping => ApplyMapping::display_name().to_string(),
            Self::ExcelCleanup => ExcelCleanup::display_name().to_string(),
            Self::Unknown => "Admin console".to_string(),
        }
    }
}

fn current_pathname() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default()
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let routes = use_console().config().routes;
    let pathname = current_pathname();
    let page = ConsolePage::from_path(&pathname, &routes);
    log::debug!("Pathname {} resolved to {:?}", pathname, page);

    view! {
        <Shell title=page.title()>
            {match page {
                ConsolePage::Gallery => view! { <GalleryView /> }.into_any(),
                ConsolePage::Mapping => view! { <ApplyMappingView /> }.into_any(),
                ConsolePage::ExcelCleanup => view! { <ExcelCleanupView /> }.into_any(),
                ConsolePage::Unknown => view! {
                    <p class="console-layout__empty">"Nothing to manage on this page."</p>
                }.into_any(),
            }}
        </Shell>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConsoleConfig;

    #[test]
    fn test_from_path() {
        let routes = ConsoleConfig::default().routes;
        assert_eq!(ConsolePage::from_path("/admin/gallery", &routes), ConsolePage::Gallery);
        assert_eq!(ConsolePage::from_path("/admin/gallery/", &routes), ConsolePage::Gallery);
        assert_eq!(
            ConsolePage::from_path("/admin/lumaprints-mapping", &routes),
            ConsolePage::Mapping
        );
        assert_eq!(
            ConsolePage::from_path("/admin/excel-cleanup", &routes),
            ConsolePage::ExcelCleanup
        );
        assert_eq!(ConsolePage::from_path("/", &routes), ConsolePage::Unknown);
        assert_eq!(ConsolePage::from_path("/admin/gallery/2", &routes), ConsolePage::Unknown);
    }

    #[test]
    fn test_titles_come_from_usecase_metadata() {
        assert_eq!(ConsolePage::Mapping.title(), "Apply image mapping");
        assert_eq!(ConsolePage::ExcelCleanup.title(), "Spreadsheet cleanup");
    }
}
