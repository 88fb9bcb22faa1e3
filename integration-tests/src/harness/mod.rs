pub mod fixtures;
pub mod tracing;

pub use self::fixtures::{fixture_path, run_fixture};
pub use self::tracing::{CapturedEvent, EventLog, events_named, init_test_tracing};
