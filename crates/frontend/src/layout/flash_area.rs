use leptos::prelude::*;
use thaw::{MessageBar, MessageBarIntent};

use super::global_context::use_console;
use crate::shared::flash::FlashLevel;
use crate::shared::icons::icon;

fn intent_for(level: FlashLevel) -> MessageBarIntent {
    match level {
        FlashLevel::Info => MessageBarIntent::Info,
        FlashLevel::Success => MessageBarIntent::Success,
        FlashLevel::Error => MessageBarIntent::Error,
    }
}

/// Flash-сообщения консоли с ручным закрытием
#[component]
pub fn FlashArea() -> impl IntoView {
    let console = use_console();

    view! {
        <div class="flash-area">
            <For
                each=move || console.flashes.with(|store| store.items().to_vec())
                key=|flash| flash.id
                children=move |flash| {
                    let id = flash.id;
                    view! {
                        <MessageBar intent=intent_for(flash.level)>
                            <div class="flash-area__row">
                                <span>{flash.text}</span>
                                <button
                                    class="flash-area__close"
                                    title="Dismiss"
                                    on:click=move |_| console.dismiss_flash(id)
                                >
                                    {icon("x")}
                                </button>
                            </div>
                        </MessageBar>
                    }
                }
            />
        </div>
    }
}
