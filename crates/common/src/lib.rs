mod datetime;
mod log_error;
mod task;
mod test_logger;
pub mod types;

pub use datetime::*;
pub use log_error::*;
pub use task::*;
pub use test_logger::*;
