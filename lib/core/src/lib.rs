pub mod error;
pub mod period;
pub mod types;

pub use error::ClientError;
pub use period::Period;
pub use types::{ListParams, ListResult, now_rfc3339};
