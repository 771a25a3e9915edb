/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust response structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Deserializer, Serialize};

use super::models::{BlockedUser, DirectThread, Reel};
use crate::id::Id;

/// Bare `{"status": "ok"}` acknowledgement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
}

impl StatusResponse {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BroadcastPayload {
    #[serde(default)]
    pub client_context: Option<String>,
    #[serde(default)]
    pub item_id: Option<Id>,
    #[serde(default)]
    pub thread_id: Option<Id>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BroadcastResponse {
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub status_code: Option<String>,
    #[serde(default)]
    pub payload: Option<BroadcastPayload>,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetByParticipantsResponse {
    #[serde(default)]
    pub thread: Option<DirectThread>,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateTitleResponse {
    pub thread: DirectThread,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddUserResponse {
    pub thread: DirectThread,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApproveParticipantRequestsResponse {
    pub thread: DirectThread,
    pub status: String,
}

/// Page of the user story feed. `reel` is null when the user has no active story.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserStoryFeedResponse {
    #[serde(default)]
    pub reel: Option<Reel>,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockedUsersFeedResponse {
    #[serde(default)]
    pub blocked_list: Vec<BlockedUser>,
    #[serde(default, deserialize_with = "non_empty_string")]
    pub next_max_id: Option<String>,
    #[serde(default)]
    pub page_size: u32,
    pub status: String,
}

/// The API sends `""` or `null` interchangeably for "no next page"
fn non_empty_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}
