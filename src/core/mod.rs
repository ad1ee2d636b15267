pub mod forwarder;
pub mod relay;

pub use crate::domain::model::{ErrorBody, HealthResponse};
pub use crate::domain::ports::{ConfigProvider, Forwarder};
pub use crate::utils::error::Result;
