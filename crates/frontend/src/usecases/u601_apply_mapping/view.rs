use contracts::usecases::u601_apply_mapping::{ApplyMappingOutcome, UnmappedProduct};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{MessageBar, MessageBarIntent};

use super::wizard::{MappingCommand, MappingEvent, MappingWizard, WorkflowStep};
use crate::layout::global_context::{use_console, ConsoleContext};
use crate::shared::components::ui::{Button, Input};
use crate::shared::flash::FlashLevel;
use crate::shared::icons::icon;
use crate::shared::page_data;

/// Id элемента страницы со списком несопоставленных строк
pub const UNMAPPED_PRODUCTS_ELEMENT_ID: &str = "unmapped-products";

/// Единая точка обработки событий мастера
fn dispatch(wizard: RwSignal<MappingWizard>, console: ConsoleContext, event: MappingEvent) {
    let command = wizard.try_update(|w| w.dispatch(event)).flatten();

    if let Some(MappingCommand::Submit { session_id, request }) = command {
        spawn_local(async move {
            let outcome = super::api::apply_mapping(&request).await;
            if let ApplyMappingOutcome::Mapped { mapped_count } = &outcome {
                console.flash(FlashLevel::Success, format!("Mapped {} products", mapped_count));
            }
            log::debug!("Session {} finished: {:?}", session_id, outcome);
            dispatch(wizard, console, MappingEvent::SubmissionFinished(outcome));
        });
    }
}

/// Текущий шаг мастера. Только смена шага пересоздаёт поддерево,
/// ввод в строки его не трогает.
fn step_memo(wizard: RwSignal<MappingWizard>) -> Memo<WorkflowStep> {
    Memo::new(move |_| wizard.with(|w| w.step()))
}

#[component]
pub fn ApplyMappingView() -> impl IntoView {
    match page_data::read_required::<Vec<UnmappedProduct>>(UNMAPPED_PRODUCTS_ELEMENT_ID) {
        Ok(products) => view! { <MappingWizardView products=products /> }.into_any(),
        Err(e) => {
            log::error!("Unmapped products report unavailable: {}", e);
            view! {
                <div id="u601_apply_mapping--usecase" class="mapping-wizard">
                    <MessageBar intent=MessageBarIntent::Error>
                        <span>"Could not load the unmapped products report. Please reload the page."</span>
                    </MessageBar>
                </div>
            }
            .into_any()
        }
    }
}

#[component]
fn MappingWizardView(products: Vec<UnmappedProduct>) -> impl IntoView {
    let console = use_console();
    let wizard = RwSignal::new(MappingWizard::new(products));
    let send = move |event: MappingEvent| dispatch(wizard, console, event);

    let step = step_memo(wizard);

    view! {
        <div id="u601_apply_mapping--usecase" class="mapping-wizard">
            {move || match step.get() {
                WorkflowStep::Reconcile => view! { <ReconcileStep wizard=wizard send=Callback::new(send) /> }.into_any(),
                WorkflowStep::Mapping => view! { <MappingStep wizard=wizard send=Callback::new(send) /> }.into_any(),
                WorkflowStep::Confirmed { mapped_count } => view! {
                    <div class="mapping-wizard__step mapping-wizard__step--confirmed">
                        <h2>"Step 3: Mapping applied"</h2>
                        <p>
                            "Products mapped: "
                            <strong class="mapping-wizard__count">{mapped_count.to_string()}</strong>
                        </p>
                        <Button on_click=Callback::new(move |_| {
                            if let Some(w) = web_sys::window() {
                                let _ = w.location().reload();
                            }
                        })>
                            {icon("refresh")}
                            " Reload report"
                        </Button>
                    </div>
                }.into_any(),
            }}
        </div>
    }
}

#[component]
fn ReconcileStep(wizard: RwSignal<MappingWizard>, send: Callback<MappingEvent>) -> impl IntoView {
    let rows = move || {
        wizard.with(|w| {
            w.unmapped()
                .iter()
                .map(|p| p.row.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        })
    };
    let count = move || wizard.with(|w| w.unmapped().len());

    view! {
        <div class="mapping-wizard__step">
            <h2>"Step 1: Products without images"</h2>
            <Show
                when=move || { count() > 0 }
                fallback=|| view! { <p>"All catalog rows already have an image."</p> }
            >
                <p>{move || format!("{} catalog rows have no image filename.", count())}</p>
                <p class="mapping-wizard__rows">"Rows: " {rows}</p>
            </Show>
            <Button on_click=Callback::new(move |_| send.run(MappingEvent::StartMapping))>
                "Start mapping"
            </Button>
        </div>
    }
}

#[component]
fn MappingStep(wizard: RwSignal<MappingWizard>, send: Callback<MappingEvent>) -> impl IntoView {
    let in_flight = Signal::derive(move || wizard.with(|w| w.in_flight()));
    let row_count = move || wizard.with(|w| w.rows().len());
    let product_count = move || wizard.with(|w| w.session().map(|s| s.products().len()).unwrap_or(0));

    view! {
        <div class="mapping-wizard__step">
            <h2>"Step 2: Assign image filenames"</h2>
            <p>
                {move || format!(
                    "Every filename below is applied to all {} unmapped rows.",
                    product_count()
                )}
            </p>

            <div class="mapping-wizard__row-list">
                <For
                    each=move || 0..row_count()
                    key=|index| *index
                    children=move |index| {
                        let value = Signal::derive(move || {
                            wizard.with(|w| w.rows().get(index).cloned().unwrap_or_default())
                        });
                        let invalid = Signal::derive(move || {
                            wizard.with(|w| w.invalid_row() == Some(index + 1))
                        });
                        view! {
                            <div class="mapping-wizard__row">
                                <Input
                                    label=format!("Filename #{}", index + 1)
                                    placeholder="print-0001.jpg"
                                    value=value
                                    invalid=invalid
                                    disabled=in_flight
                                    on_input=Callback::new(move |filename: String| {
                                        send.run(MappingEvent::RowChanged { index, filename })
                                    })
                                />
                                <Button
                                    variant="secondary"
                                    disabled=in_flight
                                    on_click=Callback::new(move |_| send.run(MappingEvent::RowRemoved { index }))
                                >
                                    {icon("x")}
                                </Button>
                            </div>
                        }
                    }
                />
            </div>

            {move || wizard.with(|w| w.notice().cloned()).map(|notice| {
                let intent = if notice.is_error() { MessageBarIntent::Error } else { MessageBarIntent::Warning };
                view! {
                    <MessageBar intent=intent>
                        <span class="mapping-wizard__notice">{notice.text()}</span>
                    </MessageBar>
                }
            })}

            <div class="mapping-wizard__actions">
                <Button
                    variant="secondary"
                    disabled=in_flight
                    on_click=Callback::new(move |_| send.run(MappingEvent::RowAdded))
                >
                    {icon("plus")}
                    " Add filename"
                </Button>
                <Button busy=in_flight on_click=Callback::new(move |_| send.run(MappingEvent::SubmitClicked))>
                    "Apply mapping"
                </Button>
                <Button
                    variant="secondary"
                    disabled=in_flight
                    on_click=Callback::new(move |_| send.run(MappingEvent::Cancel))
                >
                    "Cancel"
                </Button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_typing_does_not_rebuild_step() {
        let owner = Owner::new();
        owner.set();

        let wizard = RwSignal::new(MappingWizard::new(vec![UnmappedProduct { row: 10 }]));
        wizard.update(|w| {
            w.dispatch(MappingEvent::StartMapping);
        });
        let step = step_memo(wizard);

        let renders = Arc::new(AtomicUsize::new(0));
        let _guard = ImmediateEffect::new({
            let renders = Arc::clone(&renders);
            move || {
                step.get();
                renders.fetch_add(1, Ordering::SeqCst);
            }
        });
        assert_eq!(renders.load(Ordering::SeqCst), 1);

        for filename in ["s", "su", "sun", "sun.", "sun.jpg"] {
            wizard.update(|w| {
                w.dispatch(MappingEvent::RowChanged {
                    index: 0,
                    filename: filename.to_string(),
                });
            });
        }
        wizard.update(|w| {
            w.dispatch(MappingEvent::RowAdded);
        });
        assert_eq!(renders.load(Ordering::SeqCst), 1);
        assert_eq!(wizard.with(|w| w.rows()[0].clone()), "sun.jpg");

        wizard.update(|w| {
            w.dispatch(MappingEvent::Cancel);
        });
        assert_eq!(renders.load(Ordering::SeqCst), 2);
        assert_eq!(step.get(), WorkflowStep::Reconcile);
    }
}
