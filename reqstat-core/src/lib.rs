pub mod bus;
pub mod cli;
pub mod conf;
pub mod ingest;
pub mod logging;
pub mod report;
pub mod stats;
