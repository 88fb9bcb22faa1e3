//! Streaming request statistics.
//!
//! The data processing architecture is:
//!
//! Record
//! EventBus (Topic::Request)
//! bindings: minutes, ALL, STATIC, DYNAMIC, methods, WindowingPolicy
//! AccumulatorRegistry
//! CollectedStats
//!
//! Every binding updates its accumulator as the record passes through; nothing is recomputed
//! after the stream ends.

mod accumulator;
mod collector;
mod error;
mod key;
mod minute;
mod registry;
mod window;

#[cfg(test)]
mod tests;

pub use accumulator::*;
pub use collector::*;
pub use error::*;
pub use key::*;
pub use minute::*;
pub use registry::*;
pub use window::*;
