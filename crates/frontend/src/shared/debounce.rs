//! Debounce для пользовательского ввода.
//!
//! Каждый новый вызов `trigger` отменяет запланированное выполнение и
//! планирует новое через заданную паузу, поэтому выполняется только последний
//! вызов из серии. Отмена происходит удалением handle таймера.

use std::cell::RefCell;
use std::rc::Rc;

/// Источник отложенных вызовов. Drop handle отменяет вызов.
pub trait Scheduler {
    type Handle;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Handle;
}

/// Браузерные таймеры: `gloo_timers::callback::Timeout` снимается при drop
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    type Handle = gloo_timers::callback::Timeout;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Handle {
        gloo_timers::callback::Timeout::new(delay_ms, task)
    }
}

pub struct DebounceGate<S: Scheduler, T> {
    scheduler: S,
    delay_ms: u32,
    pending: RefCell<Option<S::Handle>>,
    action: Rc<dyn Fn(T)>,
}

impl<S: Scheduler, T: 'static> DebounceGate<S, T> {
    pub fn new(scheduler: S, delay_ms: u32, action: impl Fn(T) + 'static) -> Self {
        Self {
            scheduler,
            delay_ms,
            pending: RefCell::new(None),
            action: Rc::new(action),
        }
    }

    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    /// Запланировать выполнение со значением `value`, отменив предыдущее
    pub fn trigger(&self, value: T) {
        let action = Rc::clone(&self.action);
        let handle = self
            .scheduler
            .schedule(self.delay_ms, Box::new(move || action(value)));
        // Присваивание роняет старый handle и тем самым отменяет его
        *self.pending.borrow_mut() = Some(handle);
    }

    /// Выполнить немедленно (дискретный выбор), сняв отложенный вызов
    pub fn run_now(&self, value: T) {
        self.cancel();
        (self.action)(value);
    }

    pub fn cancel(&self) {
        self.pending.borrow_mut().take();
    }

    pub fn is_pending(&self) -> bool {
        self.pending.borrow().is_some()
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::Scheduler;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    type Slot = Rc<RefCell<Option<Box<dyn FnOnce()>>>>;

    /// Ручной планировщик: задачи копятся до `fire_all`
    #[derive(Clone, Default)]
    pub(crate) struct ManualScheduler {
        slots: Rc<RefCell<Vec<Slot>>>,
        pub(crate) last_delay: Rc<Cell<u32>>,
    }

    pub(crate) struct ManualHandle(Slot);

    impl Drop for ManualHandle {
        fn drop(&mut self) {
            self.0.borrow_mut().take();
        }
    }

    impl Scheduler for ManualScheduler {
        type Handle = ManualHandle;

        fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> ManualHandle {
            self.last_delay.set(delay_ms);
            let slot: Slot = Rc::new(RefCell::new(Some(task)));
            self.slots.borrow_mut().push(Rc::clone(&slot));
            ManualHandle(slot)
        }
    }

    impl ManualScheduler {
        pub(crate) fn fire_all(&self) {
            let slots: Vec<Slot> = self.slots.borrow_mut().drain(..).collect();
            for slot in slots {
                let task = slot.borrow_mut().take();
                if let Some(task) = task {
                    task();
                }
            }
        }
    }
}
