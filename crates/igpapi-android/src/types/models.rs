/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust structs shared by several endpoint responses
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

use crate::id::Id;

/// Participant of a direct thread
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThreadUser {
    pub pk: u64,
    pub username: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub is_private: bool,
    #[serde(default)]
    pub profile_pic_url: Option<String>,
    #[serde(default)]
    pub is_verified: bool,
}

/// Direct messaging thread
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectThread {
    pub thread_id: Id,
    #[serde(default)]
    pub thread_v2_id: Option<Id>,
    #[serde(default)]
    pub users: Vec<ThreadUser>,
    #[serde(default)]
    pub thread_title: Option<String>,
    #[serde(default)]
    pub thread_type: Option<String>,
    #[serde(default)]
    pub muted: bool,
    #[serde(default)]
    pub pending: bool,
    #[serde(default)]
    pub is_group: bool,
    #[serde(default)]
    pub named: bool,
    #[serde(default)]
    pub canonical: bool,
    #[serde(default)]
    pub last_activity_at: Option<i64>,
    #[serde(default)]
    pub viewer_id: Option<u64>,
    #[serde(default)]
    pub oldest_cursor: Option<String>,
    #[serde(default)]
    pub newest_cursor: Option<String>,
    #[serde(default)]
    pub has_older: bool,
    #[serde(default)]
    pub has_newer: bool,
}

/// One story media item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryItem {
    pub id: String,
    #[serde(default)]
    pub pk: Option<u64>,
    #[serde(default)]
    pub media_type: Option<u8>,
    #[serde(default)]
    pub taken_at: Option<i64>,
    #[serde(default)]
    pub expiring_at: Option<i64>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub original_width: Option<u32>,
    #[serde(default)]
    pub original_height: Option<u32>,
    #[serde(default)]
    pub video_duration: Option<f64>,
}

/// Story reel of one user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reel {
    #[serde(default)]
    pub id: Option<Id>,
    #[serde(default)]
    pub latest_reel_media: Option<i64>,
    #[serde(default)]
    pub expiring_at: Option<i64>,
    #[serde(default)]
    pub seen: Option<i64>,
    #[serde(default)]
    pub items: Vec<StoryItem>,
}

/// Entry of the blocked users list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockedUser {
    pub user_id: u64,
    pub username: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub profile_pic_url: String,
    #[serde(default)]
    pub block_at: i64,
}
