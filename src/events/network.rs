use crate::api::{Api, VoteRequest};
use crate::state::State;
use anyhow::Result;
use log::*;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Specify different network event types.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    FetchIdeas {
        generation: u64,
    },
    CastVote {
        generation: u64,
        idea_title: String,
        request: VoteRequest,
    },
}

/// Specify struct for managing state with network events.
///
pub struct Handler<'a> {
    state: &'a Arc<Mutex<State>>,
    api: &'a Api,
}

impl<'a> Handler<'a> {
    /// Return new instance with reference to state.
    ///
    pub fn new(state: &'a Arc<Mutex<State>>, api: &'a Api) -> Self {
        Handler { state, api }
    }

    /// Handle network events by type.
    ///
    pub async fn handle(&mut self, event: Event) -> Result<()> {
        debug!("Processing network event '{:?}'...", event);
        match event {
            Event::FetchIdeas { generation } => self.fetch_ideas(generation).await,
            Event::CastVote {
                generation,
                idea_title,
                request,
            } => self.cast_vote(generation, idea_title, request).await,
        }
        Ok(())
    }

    /// Update state with the full idea list.
    ///
    async fn fetch_ideas(&mut self, generation: u64) {
        info!("Fetching ideas...");
        let result = self.api.ideas().await;
        let mut state = self.state.lock().await;
        match result {
            Ok(ideas) => {
                let count = ideas.len();
                if state.set_ideas(generation, ideas) {
                    info!("Received {} ideas.", count);
                }
            }
            Err(e) => {
                state.fail_ideas(generation, &e);
            }
        }
    }

    /// Submit a vote and report the outcome to state.
    ///
    async fn cast_vote(&mut self, generation: u64, idea_title: String, request: VoteRequest) {
        let outcome = self.api.vote(&request).await;
        let mut state = self.state.lock().await;
        state.finish_vote(generation, &idea_title, outcome);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::LogBuffer;
    use crate::ui::Theme;
    use httpmock::MockServer;
    use serde_json::json;
    use std::sync::mpsc;
    use std::time::Duration;

    fn shared_state() -> (Arc<Mutex<State>>, mpsc::Receiver<Event>) {
        let (tx, rx) = mpsc::channel();
        let state = State::new(
            tx,
            Theme::default(),
            Duration::from_secs(4),
            LogBuffer::default(),
        );
        (Arc::new(Mutex::new(state)), rx)
    }

    #[tokio::test]
    async fn fetch_ideas_fills_state() -> Result<()> {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method("GET").path("/api/v1/idea/getAll");
                then.status(200).json_body(json!({
                    "data": [
                        { "_id": "1", "title": "Food App", "description": "", "owner": { "name": "Ravi" }, "votes": [] },
                        { "_id": "2", "title": "Parking", "description": "", "owner": { "name": "Meera" }, "votes": ["A"] }
                    ]
                }));
            })
            .await;

        let (state, rx) = shared_state();
        let generation = {
            let mut state = state.lock().await;
            state.activate_voting();
            state.current_generation()
        };
        let event = rx.try_recv()?;
        assert_eq!(event, Event::FetchIdeas { generation });

        let api = Api::new(&server.base_url())?;
        Handler::new(&state, &api).handle(event).await?;
        mock.assert_async().await;

        let state = state.lock().await;
        assert!(!state.is_loading());
        assert_eq!(state.get_ideas().len(), 2);
        assert_eq!(state.idea_page().ideas[0].title, "Parking");
        Ok(())
    }

    #[tokio::test]
    async fn fetch_ideas_failure_toasts() -> Result<()> {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method("GET").path("/api/v1/idea/getAll");
                then.status(503);
            })
            .await;

        let (state, rx) = shared_state();
        state.lock().await.activate_voting();
        let event = rx.try_recv()?;

        let api = Api::new(&server.base_url())?;
        Handler::new(&state, &api).handle(event).await?;

        let state = state.lock().await;
        assert!(!state.is_loading());
        assert!(state.get_ideas().is_empty());
        assert_eq!(state.get_toasts()[0].title, "Error");
        assert_eq!(state.get_toasts()[0].description, "Failed to load ideas");
        Ok(())
    }

    #[tokio::test]
    async fn cast_vote_reports_voter_name() -> Result<()> {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method("GET").path("/api/v1/idea/getAll");
                then.status(200).json_body(json!({
                    "data": [
                        { "_id": "food", "title": "Food App", "description": "", "owner": { "name": "Ravi" }, "votes": [] }
                    ]
                }));
            })
            .await;
        let vote_mock = server
            .mock_async(|when, then| {
                when.method("POST")
                    .path("/api/v1/idea/vote")
                    .json_body(json!({ "ideaId": "food", "voterCode": "ABC123" }));
                then.status(200).json_body(json!({ "data": { "name": "Alice" } }));
            })
            .await;

        let api = Api::new(&server.base_url())?;
        let (state, rx) = shared_state();
        state.lock().await.activate_voting();
        Handler::new(&state, &api).handle(rx.try_recv()?).await?;

        {
            let mut state = state.lock().await;
            state.open_vote_dialog()?;
            "abc123".chars().for_each(|c| {
                state.add_code_char(c);
            });
            state.confirm_vote();
        }
        Handler::new(&state, &api).handle(rx.try_recv()?).await?;
        vote_mock.assert_async().await;

        let state = state.lock().await;
        assert!(!state.is_vote_dialog_open());
        assert_eq!(state.get_toasts()[0].description, "Voted as Alice for Food App");
        Ok(())
    }

    #[tokio::test]
    async fn cast_vote_surfaces_server_message() -> Result<()> {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method("GET").path("/api/v1/idea/getAll");
                then.status(200).json_body(json!({
                    "data": [
                        { "_id": "food", "title": "Food App", "description": "", "owner": { "name": "Ravi" }, "votes": [] }
                    ]
                }));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method("POST").path("/api/v1/idea/vote");
                then.status(400).json_body(json!({ "message": "Already voted" }));
            })
            .await;

        let api = Api::new(&server.base_url())?;
        let (state, rx) = shared_state();
        state.lock().await.activate_voting();
        Handler::new(&state, &api).handle(rx.try_recv()?).await?;

        {
            let mut state = state.lock().await;
            state.open_vote_dialog()?;
            state.add_code_char('Z');
            state.confirm_vote();
        }
        Handler::new(&state, &api).handle(rx.try_recv()?).await?;

        let state = state.lock().await;
        assert!(!state.is_vote_dialog_open());
        assert!(state.get_voting().vote().code().is_none());
        assert_eq!(state.get_toasts()[0].description, "Already voted");
        Ok(())
    }

    #[tokio::test]
    async fn response_after_teardown_is_dropped() -> Result<()> {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method("GET").path("/api/v1/idea/getAll");
                then.status(200).json_body(json!({ "data": [] }));
            })
            .await;

        let (state, rx) = shared_state();
        state.lock().await.activate_voting();
        let event = rx.try_recv()?;
        state.lock().await.activate_register();

        let api = Api::new(&server.base_url())?;
        Handler::new(&state, &api).handle(event).await?;

        let state = state.lock().await;
        assert!(!state.is_loading());
        assert!(state.get_toasts().is_empty());
        Ok(())
    }
}
