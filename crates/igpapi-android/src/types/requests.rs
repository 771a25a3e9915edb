/*
[INPUT]:  Caller arguments for composite write operations
[OUTPUT]: Typed request options (recipients, broadcast options)
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When write operations gain new options
*/

use crate::http::{Form, Query, Result};
use crate::id::{Id, collect_ids, encode_ids};

/// Addressing mode of a broadcast
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recipients {
    /// Existing threads, sent as `thread_ids`
    ByThreadIds(Vec<Id>),
    /// Users, sent as `recipient_users`; the server opens or reuses one thread for the group
    ByUserIds(Vec<Id>),
}

impl Recipients {
    pub fn thread(thread_id: impl Into<Id>) -> Self {
        Recipients::ByThreadIds(vec![thread_id.into()])
    }

    pub fn threads<I>(thread_ids: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Id>,
    {
        Recipients::ByThreadIds(collect_ids(thread_ids))
    }

    pub fn user(user_id: impl Into<Id>) -> Self {
        Recipients::ByUserIds(vec![user_id.into()])
    }

    pub fn users<I>(user_ids: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Id>,
    {
        Recipients::ByUserIds(collect_ids(user_ids))
    }

    /// Form key for this addressing mode
    pub fn form_key(&self) -> &'static str {
        match self {
            Recipients::ByThreadIds(_) => "thread_ids",
            Recipients::ByUserIds(_) => "recipient_users",
        }
    }

    /// Encoded form value: `["t1"]` for threads, `[["u1","u2"]]` for users
    pub fn encode(&self) -> Result<String> {
        match self {
            Recipients::ByThreadIds(ids) => encode_ids(ids),
            Recipients::ByUserIds(ids) => Ok(serde_json::to_string(&[ids])?),
        }
    }
}

/// Options of a broadcast (send item) call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BroadcastOptions {
    /// Item kind, becomes the last path segment (`text`, `link`, `media_share`, ...)
    pub item: String,
    pub recipients: Recipients,
    /// Extra form fields, merged last
    pub form: Form,
    pub query: Option<Query>,
    /// Pass the assembled form through the transport's signing step
    pub signed: bool,
}

impl BroadcastOptions {
    pub fn new(item: impl Into<String>, recipients: Recipients) -> Self {
        Self {
            item: item.into(),
            recipients,
            form: Form::new(),
            query: None,
            signed: false,
        }
    }

    pub fn form_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.form.insert(key.into(), value.into());
        self
    }

    pub fn query(mut self, query: Query) -> Self {
        self.query = Some(query);
        self
    }

    pub fn signed(mut self, signed: bool) -> Self {
        self.signed = signed;
        self
    }
}
