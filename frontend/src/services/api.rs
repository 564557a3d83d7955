use gloo_net::http::Request;
use shared::api::{ErrorResponse, SessionResponse};

const API_BASE_URL: &str = "/api";

pub struct ApiService;

impl ApiService {
    pub async fn current_session() -> Result<SessionResponse, String> {
        let url = format!("{}/session", API_BASE_URL);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| format!("Request failed: {:?}", e))?;

        if !response.ok() {
            let status = response.status();
            return Err(match response.json::<ErrorResponse>().await {
                Ok(body) => body.error,
                Err(_) => format!("HTTP error: {}", status),
            });
        }

        response
            .json()
            .await
            .map_err(|e| format!("Failed to parse response: {:?}", e))
    }
}
