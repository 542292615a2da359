mod config;
mod error;
mod format_int;
mod topology;

pub use config::GridConfig;
pub use error::GridError;
pub use format_int::NiceInt;
pub use topology::BorderPolicy;
