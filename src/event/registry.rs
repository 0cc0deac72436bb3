//! Per-parser listener registry and synchronous dispatch.

use std::collections::HashMap;
use std::panic::{catch_unwind, AssertUnwindSafe};

use super::catalog::{DecodedEvent, EventKind};

/// Error returned by a fallible listener.
pub type ListenerError = Box<dyn std::error::Error + Send + Sync>;

type Listener = Box<dyn FnMut(&DecodedEvent) -> Result<(), ListenerError> + Send>;

/// Handle to a registered listener, used for removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Outcome of dispatching one event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchReport {
    /// Listeners that completed normally.
    pub delivered: usize,
    /// Listeners that returned an error or panicked.
    pub failed: usize,
}

impl DispatchReport {
    /// Total number of listeners invoked.
    #[must_use]
    pub fn invoked(&self) -> usize {
        self.delivered + self.failed
    }
}

/// Maps event kinds to ordered listener lists.
///
/// Listeners run synchronously on the dispatching thread, in registration
/// order. A failing listener is logged and does not stop the others.
#[derive(Default)]
pub struct ListenerRegistry {
    listeners: HashMap<EventKind, Vec<(ListenerId, Listener)>>,
    next_id: u64,
}

impl std::fmt::Debug for ListenerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let counts: HashMap<_, _> = self
            .listeners
            .iter()
            .map(|(kind, list)| (kind, list.len()))
            .collect();
        f.debug_struct("ListenerRegistry")
            .field("listeners", &counts)
            .finish_non_exhaustive()
    }
}

impl ListenerRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener for every event of `kind`.
    ///
    /// Registering the same closure twice calls it twice.
    pub fn on<F>(&mut self, kind: EventKind, mut listener: F) -> ListenerId
    where
        F: FnMut(&DecodedEvent) + Send + 'static,
    {
        self.try_on(kind, move |event| {
            listener(event);
            Ok(())
        })
    }

    /// Register a listener that may fail.
    ///
    /// Errors are logged by the dispatcher and counted in the report.
    pub fn try_on<F>(&mut self, kind: EventKind, listener: F) -> ListenerId
    where
        F: FnMut(&DecodedEvent) -> Result<(), ListenerError> + Send + 'static,
    {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners
            .entry(kind)
            .or_default()
            .push((id, Box::new(listener)));
        id
    }

    /// Unregister a listener. Returns `false` if it was not registered.
    pub fn remove(&mut self, id: ListenerId) -> bool {
        for list in self.listeners.values_mut() {
            if let Some(pos) = list.iter().position(|(existing, _)| *existing == id) {
                drop(list.remove(pos));
                return true;
            }
        }
        false
    }

    /// Number of listeners registered for `kind`.
    #[must_use]
    pub fn listener_count(&self, kind: EventKind) -> usize {
        self.listeners.get(&kind).map_or(0, Vec::len)
    }

    /// Whether anything listens for `kind`.
    #[must_use]
    pub fn has_listeners(&self, kind: EventKind) -> bool {
        self.listener_count(kind) > 0
    }

    /// Invoke every listener registered for the event's kind.
    ///
    /// An event kind with no listeners is a no-op.
    pub fn dispatch(&mut self, event: &DecodedEvent) -> DispatchReport {
        let kind = event.kind();
        let mut report = DispatchReport::default();

        let Some(listeners) = self.listeners.get_mut(&kind) else {
            return report;
        };

        for (ListenerId(id), listener) in listeners.iter_mut() {
            match catch_unwind(AssertUnwindSafe(|| listener(event))) {
                Ok(Ok(())) => report.delivered += 1,
                Ok(Err(e)) => {
                    report.failed += 1;
                    tracing::error!(kind = ?kind, listener = *id, error = %e, "Listener failed");
                }
                Err(panic) => {
                    report.failed += 1;
                    tracing::error!(
                        kind = ?kind,
                        listener = *id,
                        panic = panic_message(panic.as_ref()),
                        "Listener panicked"
                    );
                }
            }
        }

        tracing::trace!(
            kind = ?kind,
            delivered = report.delivered,
            failed = report.failed,
            "Dispatched event"
        );
        report
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&str>() {
        *s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else {
        "non-string panic payload"
    }
}
