/// Уровень flash-сообщения
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashLevel {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flash {
    pub id: u64,
    pub level: FlashLevel,
    pub text: String,
}

/// Очередь flash-сообщений консоли; id растут монотонно
#[derive(Debug, Clone, Default)]
pub struct FlashStore {
    next_id: u64,
    items: Vec<Flash>,
}

impl FlashStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Добавить сообщение, вернуть его id
    pub fn push(&mut self, level: FlashLevel, text: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Flash {
            id,
            level,
            text: text.into(),
        });
        id
    }

    /// Убрать сообщение; повторный вызов ничего не делает
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|f| f.id != id);
        self.items.len() != before
    }

    pub fn items(&self) -> &[Flash] {
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_dismiss() {
        let mut store = FlashStore::new();
        let first = store.push(FlashLevel::Success, "Saved");
        let second = store.push(FlashLevel::Error, "Failed");
        assert!(second > first);
        assert_eq!(store.items().len(), 2);

        assert!(store.dismiss(first));
        assert!(!store.dismiss(first));
        assert_eq!(store.items()[0].text, "Failed");
    }

    #[test]
    fn test_ids_not_reused_after_dismiss() {
        let mut store = FlashStore::new();
        let id = store.push(FlashLevel::Info, "a");
        store.dismiss(id);
        assert_ne!(store.push(FlashLevel::Info, "b"), id);
    }
}
