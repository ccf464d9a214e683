use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::{Notice, Notifier};

/// Tracks online/offline state and raises a notice on each transition.
///
/// Whatever watches the network (a platform hook, a health check) calls
/// [`report`](Self::report). Repeating the current state is silent.
pub struct ConnectivityMonitor {
    online: AtomicBool,
    notifier: Arc<dyn Notifier>,
}

impl ConnectivityMonitor {
    /// Start in the online state.
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self {
            online: AtomicBool::new(true),
            notifier,
        }
    }

    pub fn is_online(&self) -> bool {
        self.online.load(Ordering::SeqCst)
    }

    /// Report the current state. Returns true when it changed.
    pub fn report(&self, online: bool) -> bool {
        let previous = self.online.swap(online, Ordering::SeqCst);
        if previous == online {
            return false;
        }

        tracing::info!(online, "connectivity changed");
        self.notifier.notify(&Notice::ConnectivityChanged { online });
        true
    }
}
