use std::sync::{Arc, Mutex, PoisonError};

use super::Notice;

/// Receives notices. Implementations must not fail; delivery is best effort.
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: &Notice);
}

impl<T: Notifier + ?Sized> Notifier for Arc<T> {
    fn notify(&self, notice: &Notice) {
        (**self).notify(notice)
    }
}

/// Drops every notice.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&self, _notice: &Notice) {}
}

/// Forwards notices to `tracing`: errors at `warn`, everything else at `info`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notice: &Notice) {
        if notice.is_error() {
            tracing::warn!(kind = notice.name(), ?notice, "directory notice");
        } else {
            tracing::info!(kind = notice.name(), ?notice, "directory notice");
        }
    }
}

/// Collects notices into a shared buffer.
#[derive(Debug, Clone, Default)]
pub struct BufferNotifier {
    buffer: Arc<Mutex<Vec<Notice>>>,
}

impl BufferNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_buffer(buffer: Arc<Mutex<Vec<Notice>>>) -> Self {
        Self { buffer }
    }

    /// Snapshot of everything received so far.
    pub fn notices(&self) -> Vec<Notice> {
        let buffer = self.buffer.lock().unwrap_or_else(PoisonError::into_inner);
        buffer.clone()
    }

    /// Remove and return everything received so far.
    pub fn drain(&self) -> Vec<Notice> {
        let mut buffer = self.buffer.lock().unwrap_or_else(PoisonError::into_inner);
        let drained: Vec<Notice> = buffer.drain(..).collect();
        drained
    }
}

impl Notifier for BufferNotifier {
    fn notify(&self, notice: &Notice) {
        match self.buffer.lock() {
            Ok(mut buffer) => buffer.push(notice.clone()),
            Err(_) => tracing::warn!(notice = notice.name(), "notice buffer poisoned"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_notifier_collects() {
        let buffer = Arc::new(Mutex::new(Vec::new()));
        let notifier = BufferNotifier::with_buffer(buffer.clone());

        notifier.notify(&Notice::FiltersCleared);
        notifier.notify(&Notice::CatalogLoaded { count: 2 });

        let notices = buffer.lock().unwrap();
        assert_eq!(notices.len(), 2);
        assert_eq!(notices[0], Notice::FiltersCleared);
    }

    #[test]
    fn drain_empties_buffer() {
        let notifier = BufferNotifier::new();
        notifier.notify(&Notice::FiltersCleared);

        assert_eq!(notifier.drain(), vec![Notice::FiltersCleared]);
        assert!(notifier.notices().is_empty());
    }

    #[test]
    fn shared_through_arc() {
        let notifier = Arc::new(BufferNotifier::new());
        let as_dyn: Arc<dyn Notifier> = notifier.clone();
        as_dyn.notify(&Notice::FiltersCleared);
        assert_eq!(notifier.notices().len(), 1);
    }
}
