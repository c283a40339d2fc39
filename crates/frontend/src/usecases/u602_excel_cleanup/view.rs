use contracts::shared::filename::validate_spreadsheet_name;
use contracts::usecases::u602_excel_cleanup::CleanupStats;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{MessageBar, MessageBarIntent};
use wasm_bindgen::JsCast;

use crate::layout::global_context::use_console;
use crate::shared::components::ui::Button;
use crate::shared::flash::FlashLevel;
use crate::shared::format::format_file_size;
use crate::shared::icons::icon;

#[component]
pub fn ExcelCleanupView() -> impl IntoView {
    let console = use_console();

    // web_sys::File не Send, поэтому локальное хранилище
    let selected_file = StoredValue::new_local(None::<web_sys::File>);
    let (file_label, set_file_label) = signal(None::<String>);
    let (is_processing, set_is_processing) = signal(false);
    let (stats, set_stats) = signal(None::<CleanupStats>);
    let (error, set_error) = signal(None::<String>);

    let handle_file_select = move |ev: web_sys::Event| {
        let file = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));

        set_stats.set(None);
        set_error.set(None);

        match file {
            Some(file) => match validate_spreadsheet_name(&file.name()) {
                Ok(()) => {
                    set_file_label.set(Some(format!(
                        "{} ({})",
                        file.name(),
                        format_file_size(file.size() as u64)
                    )));
                    selected_file.set_value(Some(file));
                }
                Err(e) => {
                    set_file_label.set(None);
                    selected_file.set_value(None);
                    set_error.set(Some(format!("Please choose an .xlsx file: {}", e)));
                }
            },
            None => {
                set_file_label.set(None);
                selected_file.set_value(None);
            }
        }
    };

    let process = move |_| {
        if is_processing.get_untracked() {
            return;
        }
        let Some(file) = selected_file.get_value() else {
            set_error.set(Some("Please choose a spreadsheet first".to_string()));
            return;
        };

        set_is_processing.set(true);
        set_error.set(None);
        set_stats.set(None);

        spawn_local(async move {
            match super::api::process_spreadsheet(file).await {
                Ok(response) => match response.into_result() {
                    Ok(result) => {
                        log::info!(
                            "Spreadsheet cleaned: {} -> {} rows ({} deleted)",
                            result.total_rows_before,
                            result.total_rows_after,
                            result.deleted_count
                        );
                        console.flash(FlashLevel::Success, "Spreadsheet processed");
                        set_stats.set(Some(result));
                    }
                    Err(message) => set_error.set(Some(message)),
                },
                Err(e) => {
                    log::error!("Spreadsheet upload failed: {}", e);
                    set_error.set(Some("Could not reach the server. Please try again.".to_string()));
                }
            }
            set_is_processing.set(false);
        });
    };

    view! {
        <div id="u602_excel_cleanup--usecase" class="excel-cleanup">
            <h2>"Spreadsheet cleanup"</h2>
            <p class="excel-cleanup__hint">
                "Upload the catalog export (.xlsx). Rows whose image is missing from the library are removed."
            </p>

            <label class="file-drop">
                <input
                    type="file"
                    accept=".xlsx"
                    disabled=move || is_processing.get()
                    on:change=handle_file_select
                />
                <span class="file-drop__label">
                    {move || file_label.get().unwrap_or_else(|| "Choose file…".to_string())}
                </span>
            </label>

            <div class="excel-cleanup__actions">
                <Button
                    busy=is_processing
                    disabled=Signal::derive(move || file_label.get().is_none())
                    on_click=Callback::new(process)
                >
                    "Process spreadsheet"
                </Button>
            </div>

            {move || error.get().map(|msg| view! {
                <MessageBar intent=MessageBarIntent::Error>
                    <span>{msg}</span>
                </MessageBar>
            })}

            {move || stats.get().map(|s| view! {
                <div class="excel-cleanup__result">
                    <div><strong>"Rows before: "</strong>{s.total_rows_before}</div>
                    <div><strong>"Rows deleted: "</strong>{s.deleted_count}</div>
                    <div><strong>"Rows after: "</strong>{s.total_rows_after}</div>
                    <a class="button button--primary" href=super::api::download_url() download="">
                        {icon("download")}
                        " Download cleaned file"
                    </a>
                </div>
            })}
        </div>
    }
}
