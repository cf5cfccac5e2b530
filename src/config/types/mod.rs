//! Configuration utility types.

mod error;
mod field;
mod handle;

pub use error::{ConfigDiagnostic, ConfigDiagnostics, LoadError};
pub use field::FieldPath;
pub use handle::{cfg, init_config, reload_config};
