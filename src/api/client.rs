//! HTTP client for idea API requests.
//!
//! Wraps `reqwest` and turns every response into either the payload found
//! under the `data` field or a structured [`ApiError`].

use super::error::ApiError;
use log::*;
use reqwest::{Method, Response};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Envelope shared by every successful API response.
///
#[derive(Deserialize)]
struct Wrapper<T> {
    data: Option<T>,
}

/// Makes requests to the idea API and tries to conform response data to the
/// requested type.
///
pub struct Client {
    pub(crate) base_url: String,
    http_client: reqwest::Client,
}

impl Client {
    /// Returns a new instance for the given base URL.
    ///
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        Ok(Client {
            base_url: base_url.trim_end_matches('/').to_owned(),
            http_client: reqwest::Client::builder().build()?,
        })
    }

    /// Return the `data` payload of a GET request to the path.
    ///
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.call::<()>(Method::GET, path, None).await?;
        Self::decode(response).await
    }

    /// Return the `data` payload of a POST request with a JSON body.
    ///
    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self.call(Method::POST, path, Some(body)).await?;
        Self::decode(response).await
    }

    /// Make request and return the raw response.
    ///
    async fn call<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Response, ApiError> {
        let request_url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        debug!("Sending {} request to {}...", method, request_url);

        let mut request = self.http_client.request(method, &request_url);
        if let Some(body) = body {
            request = request.json(body);
        }
        Ok(request.send().await?)
    }

    /// Conform response to the expected payload or a structured error.
    ///
    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let status = response.status();
        let response_bytes = response.bytes().await?;

        if !status.is_success() {
            let message = serde_json::from_slice::<serde_json::Value>(&response_bytes)
                .ok()
                .and_then(|body| {
                    body.get("message")
                        .and_then(|message| message.as_str())
                        .map(str::to_owned)
                });
            warn!("API request failed with status {}", status);
            return Err(match message {
                Some(message) => ApiError::Rejected {
                    status: status.as_u16(),
                    message,
                },
                None => ApiError::Status {
                    status: status.as_u16(),
                    body: String::from_utf8_lossy(&response_bytes).into_owned(),
                },
            });
        }

        match serde_json::from_slice::<Wrapper<T>>(&response_bytes) {
            Ok(Wrapper { data: Some(data) }) => Ok(data),
            Ok(Wrapper { data: None }) => {
                warn!("API response missing 'data' field");
                Err(ApiError::MissingData)
            }
            Err(e) => {
                error!(
                    "Failed to deserialize API response: {}. Response body: {}",
                    e,
                    String::from_utf8_lossy(&response_bytes)
                );
                Err(e.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::MockServer;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Named {
        name: String,
    }

    #[tokio::test]
    async fn get_unwraps_data() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method("GET").path("/named");
                then.status(200).json_body(json!({ "data": { "name": "Alice" } }));
            })
            .await;

        let client = Client::new(&server.base_url()).unwrap();
        let named: Named = client.get("named").await.unwrap();
        assert_eq!(named.name, "Alice");
    }

    #[tokio::test]
    async fn get_missing_data() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method("GET").path("/named");
                then.status(200).json_body(json!({ "success": true }));
            })
            .await;

        let client = Client::new(&server.base_url()).unwrap();
        let result = client.get::<Named>("/named").await;
        assert!(matches!(result, Err(ApiError::MissingData)));
    }

    #[tokio::test]
    async fn get_unexpected_shape() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method("GET").path("/named");
                then.status(200).json_body(json!({ "data": [1, 2, 3] }));
            })
            .await;

        let client = Client::new(&server.base_url()).unwrap();
        let result = client.get::<Named>("/named").await;
        assert!(matches!(result, Err(ApiError::Deserialization(_))));
    }

    #[tokio::test]
    async fn post_rejection_with_message() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method("POST").path("/named");
                then.status(403).json_body(json!({ "message": "Invalid code" }));
            })
            .await;

        let client = Client::new(&server.base_url()).unwrap();
        let result = client.post::<_, Named>("/named", &json!({})).await;
        match result {
            Err(ApiError::Rejected { status, message }) => {
                assert_eq!(status, 403);
                assert_eq!(message, "Invalid code");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn post_rejection_without_message() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method("POST").path("/named");
                then.status(500).body("upstream exploded");
            })
            .await;

        let client = Client::new(&server.base_url()).unwrap();
        let result = client.post::<_, Named>("/named", &json!({})).await;
        match result {
            Err(ApiError::Status { status, body }) => {
                assert_eq!(status, 500);
                assert_eq!(body, "upstream exploded");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn base_url_trailing_slash_is_dropped() {
        let client = Client::new("http://localhost:8080/").unwrap();
        assert_eq!(client.base_url, "http://localhost:8080");
    }
}
