use fake::Dummy;
use serde::{Deserialize, Serialize};

/// Defines the submitter of an idea.
///
#[derive(Clone, Debug, Default, Dummy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    #[serde(default)]
    pub name: String,
}

/// Defines idea data structure as returned by the idea listing.
///
#[derive(Clone, Debug, Dummy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "WireIdea")]
pub struct Idea {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub description: String,
    pub owner: Owner,
    pub votes: Vec<String>, // voter identifiers
}

/// Idea as it arrives from the server. Only the title is required; a bad
/// field on one idea must not fail the whole listing.
///
#[derive(Deserialize)]
struct WireIdea {
    #[serde(rename = "_id", default)]
    server_id: Option<String>,
    #[serde(default)]
    id: Option<String>,
    title: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    owner: Option<Owner>,
    #[serde(default)]
    votes: Option<Vec<serde_json::Value>>,
}

impl From<WireIdea> for Idea {
    fn from(wire: WireIdea) -> Self {
        Idea {
            id: wire.server_id.or(wire.id).unwrap_or_default(),
            title: wire.title,
            description: wire.description.unwrap_or_default(),
            owner: wire.owner.unwrap_or_default(),
            votes: wire
                .votes
                .unwrap_or_default()
                .into_iter()
                .map(|vote| match vote {
                    serde_json::Value::String(voter) => voter,
                    other => other.to_string(),
                })
                .collect(),
        }
    }
}

impl Idea {
    /// Return the number of votes cast for this idea.
    ///
    pub fn vote_count(&self) -> usize {
        self.votes.len()
    }
}

/// Defines the body of a vote submission.
///
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteRequest {
    pub idea_id: String,
    pub voter_code: String,
}

/// Defines the server acknowledgement of an accepted vote.
///
#[derive(Clone, Debug, Dummy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteReceipt {
    pub name: String, // display name of the voter
}
