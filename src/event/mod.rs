//! Event catalog, typed payloads and listener dispatch.

mod catalog;
mod one_or_many;
pub mod payload;
mod registry;

pub use catalog::{DecodedEvent, EventKind};
pub use one_or_many::OneOrMany;
pub use registry::{DispatchReport, ListenerError, ListenerId, ListenerRegistry};
