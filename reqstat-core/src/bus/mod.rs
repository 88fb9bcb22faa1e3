mod event_bus;

pub use event_bus::*;

/// Topics the collector publishes on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    /// One parsed access-log request.
    Request,
}
