//! Outbound HTTP clients

mod email_sender;
mod meta_graph;

pub use email_sender::HttpEmailSender;
pub use meta_graph::MetaGraphClient;

use crate::shared::errors::GatewayError;

/// Turn a non-2xx response into `GatewayError::Upstream`
async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, GatewayError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(GatewayError::Upstream {
        status: status.as_u16(),
        body,
    })
}
