pub mod config;
pub mod error;
pub mod timing;

pub use config::Config;
pub use error::{Error, Result};
pub use timing::{TimingBounds, random_wait_time, random_wait_time_with};
