pub mod logger;
pub use logger::{LoggingConfig, LoggingError, init_with_config};
