//! Idea API module.
//!
//! Typed access to the two endpoints the voting view depends on: the full
//! idea listing and vote submission.

mod client;
mod error;
mod resource;

pub use error::ApiError;
pub use resource::*;

use client::Client;
use log::*;

pub const DEFAULT_BASE_URL: &str = "https://swj-server.builtwithayush.tech";
const IDEAS_PATH: &str = "api/v1/idea/getAll";
const VOTE_PATH: &str = "api/v1/idea/vote";

/// Responsible for asynchronous interaction with the idea API including
/// transformation of response data into explicitly-defined types.
///
pub struct Api {
    client: Client,
}

impl Api {
    /// Returns a new instance talking to the given base URL.
    ///
    pub fn new(base_url: &str) -> Result<Api, ApiError> {
        debug!("Initializing idea API client for {}...", base_url);
        Ok(Api {
            client: Client::new(base_url)?,
        })
    }

    /// Returns every submitted idea.
    ///
    pub async fn ideas(&self) -> Result<Vec<Idea>, ApiError> {
        debug!("Requesting all ideas...");
        let ideas: Vec<Idea> = self.client.get(IDEAS_PATH).await?;
        debug!("Retrieved {} ideas", ideas.len());
        Ok(ideas)
    }

    /// Casts a vote and returns the acknowledgement naming the voter.
    ///
    pub async fn vote(&self, request: &VoteRequest) -> Result<VoteReceipt, ApiError> {
        debug!("Submitting vote for idea {}...", request.idea_id);
        self.client.post(VOTE_PATH, request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::{Fake, Faker};
    use httpmock::MockServer;
    use serde_json::json;

    #[tokio::test]
    async fn ideas_success() -> anyhow::Result<()> {
        let ideas: [Idea; 2] = Faker.fake();

        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method("GET").path("/api/v1/idea/getAll");
                then.status(200).json_body(json!({
                    "data": [
                        {
                            "_id": ideas[0].id,
                            "title": ideas[0].title,
                            "description": ideas[0].description,
                            "owner": { "name": ideas[0].owner.name },
                            "votes": ideas[0].votes,
                        },
                        {
                            "_id": ideas[1].id,
                            "title": ideas[1].title,
                            "description": ideas[1].description,
                            "owner": { "name": ideas[1].owner.name },
                            "votes": ideas[1].votes,
                        }
                    ]
                }));
            })
            .await;

        let api = Api::new(&server.base_url())?;
        let fetched = api.ideas().await?;
        mock.assert_async().await;
        assert_eq!(fetched, ideas.to_vec());
        Ok(())
    }

    #[tokio::test]
    async fn ideas_server_error() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method("GET").path("/api/v1/idea/getAll");
                then.status(500);
            })
            .await;

        let api = Api::new(&server.base_url()).unwrap();
        assert!(api.ideas().await.is_err());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn vote_success() -> anyhow::Result<()> {
        let receipt: VoteReceipt = Faker.fake();

        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method("POST")
                    .path("/api/v1/idea/vote")
                    .json_body(json!({ "ideaId": "idea-1", "voterCode": "ABC123" }));
                then.status(200)
                    .json_body(json!({ "data": { "name": receipt.name } }));
            })
            .await;

        let api = Api::new(&server.base_url())?;
        let acknowledged = api
            .vote(&VoteRequest {
                idea_id: "idea-1".to_string(),
                voter_code: "ABC123".to_string(),
            })
            .await?;
        mock.assert_async().await;
        assert_eq!(acknowledged, receipt);
        Ok(())
    }

    #[tokio::test]
    async fn vote_rejected() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method("POST").path("/api/v1/idea/vote");
                then.status(400)
                    .json_body(json!({ "success": false, "message": "Already voted" }));
            })
            .await;

        let api = Api::new(&server.base_url()).unwrap();
        let error = api
            .vote(&VoteRequest {
                idea_id: "idea-1".to_string(),
                voter_code: "ABC123".to_string(),
            })
            .await
            .unwrap_err();
        mock.assert_async().await;
        assert_eq!(error.user_message(), "Already voted");
    }
}
