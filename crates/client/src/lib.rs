pub mod autosave;
pub mod error;
pub mod gateway;
pub mod http;
pub mod report;
pub mod session;
pub mod util;

#[cfg(test)]
pub(crate) mod fake;

pub use error::{GatewayError, GatewayResult};
pub use gateway::{LayoutGateway, LayoutSummary};
pub use http::HttpGateway;
pub use session::SharedState;
