use leptos::prelude::*;

use crate::config::ConsoleConfig;
use crate::shared::flash::{FlashLevel, FlashStore};

/// Общий контекст консоли: конфигурация и flash-сообщения
#[derive(Clone, Copy)]
pub struct ConsoleContext {
    config: StoredValue<ConsoleConfig>,
    pub flashes: RwSignal<FlashStore>,
}

impl ConsoleContext {
    pub fn new(config: ConsoleConfig) -> Self {
        Self {
            config: StoredValue::new(config),
            flashes: RwSignal::new(FlashStore::new()),
        }
    }

    pub fn config(&self) -> ConsoleConfig {
        self.config.get_value()
    }

    /// Показать сообщение; скрывается само через `flash.dismiss_ms`
    pub fn flash(&self, level: FlashLevel, text: impl Into<String>) {
        let mut id = 0;
        self.flashes.update(|store| id = store.push(level, text));

        let dismiss_ms = self.config.with_value(|c| c.flash.dismiss_ms);
        if dismiss_ms > 0 {
            let this = *self;
            gloo_timers::callback::Timeout::new(dismiss_ms, move || this.dismiss_flash(id))
                .forget();
        }
    }

    pub fn dismiss_flash(&self, id: u64) {
        self.flashes.update(|store| {
            store.dismiss(id);
        });
    }
}

pub fn use_console() -> ConsoleContext {
    use_context::<ConsoleContext>().expect("ConsoleContext not provided")
}
