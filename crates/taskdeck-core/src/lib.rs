pub mod config;
pub mod error;
pub mod logging;
pub mod result;

pub use config::AppConfig;
pub use error::TaskdeckError;
pub use result::TaskdeckResult;
