//! PaperDesk core: the error type, configuration and small shared helpers
//! used by every other crate in the workspace.

pub mod config;
pub mod error;
pub mod types;

pub use config::{LatencyConfig, ServiceConfig};
pub use error::ServiceError;
pub use types::{now_rfc3339, RecordId};
