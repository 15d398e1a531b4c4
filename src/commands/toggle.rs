//! Toggle Endpoint
//!
//! `POST /{tasks|projects}/{id}/toggle/` over fetch.

use async_trait::async_trait;
use gloo_net::http::Request;
use taskflow_core::toggle::ToggleTransport;
use taskflow_core::{ToggleError, ToggleResponse, ToggleTarget};

const CSRF_HEADER: &str = "X-CSRFToken";

pub struct HttpToggleTransport {
    csrf_token: String,
}

impl HttpToggleTransport {
    pub fn new(csrf_token: String) -> Self {
        Self { csrf_token }
    }
}

#[async_trait(?Send)]
impl ToggleTransport for HttpToggleTransport {
    async fn toggle(&self, target: &ToggleTarget) -> Result<ToggleResponse, ToggleError> {
        let response = Request::post(&target.endpoint())
            .header(CSRF_HEADER, &self.csrf_token)
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(|e| ToggleError::Transport(e.to_string()))?;

        tracing::debug!(status = response.status(), endpoint = %target.endpoint(), "toggle response received");

        // Error pages carry no JSON body and end up as decode failures
        response
            .json::<ToggleResponse>()
            .await
            .map_err(|e| ToggleError::Decode(e.to_string()))
    }
}
