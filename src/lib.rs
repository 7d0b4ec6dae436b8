pub mod cli;
pub mod dm;
pub mod proxies;
pub mod seat;
pub mod tracing_subscriber;
