use std::sync::{Mutex, PoisonError};

use event_emitter_rs::EventEmitter;

use super::{Notice, Notifier};

/// A notifier that re-emits notices through an [`EventEmitter`] for
/// in-process subscribers.
///
/// Each notice is emitted under its [`Notice::name`] with the notice's JSON
/// encoding as payload. Listeners run on emitter threads, so delivery is
/// asynchronous.
///
/// ```ignore
/// let notifier = EmitterNotifier::new();
/// notifier.on_notice("bookmarkAdded", |notice| {
///     println!("saved: {:?}", notice);
/// });
/// ```
pub struct EmitterNotifier {
    emitter: Mutex<EventEmitter>,
}

impl Default for EmitterNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl EmitterNotifier {
    pub fn new() -> Self {
        Self::with_emitter(EventEmitter::new())
    }

    pub fn with_emitter(emitter: EventEmitter) -> Self {
        Self {
            emitter: Mutex::new(emitter),
        }
    }

    /// Register a listener for the raw JSON payload of an event name.
    pub fn on<F>(&self, event: &str, listener: F) -> String
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        let mut emitter = self.emitter.lock().unwrap_or_else(PoisonError::into_inner);
        emitter.on(event, listener)
    }

    /// Register a listener that receives the decoded notice.
    pub fn on_notice<F>(&self, event: &str, listener: F) -> String
    where
        F: Fn(Notice) + Send + Sync + 'static,
    {
        self.on(event, move |payload: String| {
            match serde_json::from_str::<Notice>(&payload) {
                Ok(notice) => listener(notice),
                Err(e) => tracing::warn!(error = %e, "undecodable notice payload"),
            }
        })
    }

    /// Remove a listener by the id `on` returned.
    pub fn remove_listener(&self, id: &str) -> bool {
        let mut emitter = self.emitter.lock().unwrap_or_else(PoisonError::into_inner);
        emitter.remove_listener(id).is_some()
    }
}

impl Notifier for EmitterNotifier {
    fn notify(&self, notice: &Notice) {
        let payload = match serde_json::to_string(notice) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::warn!(error = %e, notice = notice.name(), "failed to encode notice");
                return;
            }
        };

        let mut emitter = self.emitter.lock().unwrap_or_else(PoisonError::into_inner);
        emitter.emit(notice.name(), payload);
    }
}
