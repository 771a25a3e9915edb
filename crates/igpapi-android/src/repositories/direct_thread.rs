/*
[INPUT]:  Thread/item/user identifiers, broadcast options and session state
[OUTPUT]: Typed responses of direct thread endpoints
[POS]:    Repository layer - one call per direct thread endpoint
[UPDATE]: When adding direct thread endpoints or changing their form fields
*/

// ### Direct Thread Endpoints

use std::sync::Arc;

use tracing::debug;
use uuid::Uuid;

use crate::http::{Form, Query, RequestDescriptor, Result, Transport};
use crate::id::{Id, collect_ids, encode_ids};
use crate::state::SessionState;
use crate::types::{
    AddUserResponse, ApproveParticipantRequestsResponse, BroadcastOptions, BroadcastResponse,
    GetByParticipantsResponse, Recipients, StatusResponse, UpdateTitleResponse,
};

const THREADS_PATH: &str = "/api/v1/direct_v2/threads";

/// Direct messaging thread operations
#[derive(Clone)]
pub struct DirectThreadRepository {
    transport: Arc<dyn Transport>,
    state: Arc<SessionState>,
}

impl DirectThreadRepository {
    pub fn new(transport: Arc<dyn Transport>, state: Arc<SessionState>) -> Self {
        Self { transport, state }
    }

    /// Approve a pending thread
    ///
    /// POST /api/v1/direct_v2/threads/{thread_id}/approve/
    pub async fn approve(&self, thread_id: impl Into<Id>) -> Result<StatusResponse> {
        let path = thread_path(&thread_id.into(), "approve");
        self.post(path, self.state.session_form()).await
    }

    /// Approve several pending threads
    ///
    /// POST /api/v1/direct_v2/threads/approve_multiple/
    pub async fn approve_multiple<I>(&self, thread_ids: I) -> Result<StatusResponse>
    where
        I: IntoIterator,
        I::Item: Into<Id>,
    {
        let form = self.with_ids("thread_ids", collect_ids(thread_ids))?;
        self.post(format!("{THREADS_PATH}/approve_multiple/"), form)
            .await
    }

    /// Decline a pending thread
    ///
    /// POST /api/v1/direct_v2/threads/{thread_id}/decline/
    pub async fn decline(&self, thread_id: impl Into<Id>) -> Result<StatusResponse> {
        let path = thread_path(&thread_id.into(), "decline");
        self.post(path, self.state.session_form()).await
    }

    /// Decline several pending threads
    ///
    /// POST /api/v1/direct_v2/threads/decline_multiple/
    pub async fn decline_multiple<I>(&self, thread_ids: I) -> Result<StatusResponse>
    where
        I: IntoIterator,
        I::Item: Into<Id>,
    {
        let form = self.with_ids("thread_ids", collect_ids(thread_ids))?;
        self.post(format!("{THREADS_PATH}/decline_multiple/"), form)
            .await
    }

    /// Decline every pending thread
    ///
    /// POST /api/v1/direct_v2/threads/decline_all/
    pub async fn decline_all(&self) -> Result<StatusResponse> {
        self.post(
            format!("{THREADS_PATH}/decline_all/"),
            self.state.session_form(),
        )
        .await
    }

    /// Let users who asked to join a group thread in
    ///
    /// POST /api/v1/direct_v2/threads/{thread_id}/approve_participant_requests/
    pub async fn approve_participant_requests<I>(
        &self,
        thread_id: impl Into<Id>,
        user_ids: I,
    ) -> Result<ApproveParticipantRequestsResponse>
    where
        I: IntoIterator,
        I::Item: Into<Id>,
    {
        let path = thread_path(&thread_id.into(), "approve_participant_requests");
        let mut form = self.with_ids("user_ids", collect_ids(user_ids))?;
        form.insert("share_join_chat_story".to_string(), "true".to_string());
        self.post(path, form).await
    }

    /// Find the thread whose participants are exactly `user_ids`
    ///
    /// GET /api/v1/direct_v2/threads/get_by_participants/?recipient_users={json}
    pub async fn get_by_participants<I>(&self, user_ids: I) -> Result<GetByParticipantsResponse>
    where
        I: IntoIterator,
        I::Item: Into<Id>,
    {
        let mut query = Query::new();
        query.insert(
            "recipient_users".to_string(),
            encode_ids(&collect_ids(user_ids))?,
        );
        let request =
            RequestDescriptor::get(format!("{THREADS_PATH}/get_by_participants/")).query(query);
        self.transport.send_json(request).await
    }

    /// Rename a group thread
    ///
    /// POST /api/v1/direct_v2/threads/{thread_id}/update_title/
    pub async fn update_title(
        &self,
        thread_id: impl Into<Id>,
        title: impl Into<String>,
    ) -> Result<UpdateTitleResponse> {
        let path = thread_path(&thread_id.into(), "update_title");
        let mut form = self.state.session_form();
        form.insert("title".to_string(), title.into());
        self.post(path, form).await
    }

    /// POST /api/v1/direct_v2/threads/{thread_id}/mute/
    pub async fn mute(&self, thread_id: impl Into<Id>) -> Result<StatusResponse> {
        let path = thread_path(&thread_id.into(), "mute");
        self.post(path, self.state.session_form()).await
    }

    /// POST /api/v1/direct_v2/threads/{thread_id}/unmute/
    pub async fn unmute(&self, thread_id: impl Into<Id>) -> Result<StatusResponse> {
        let path = thread_path(&thread_id.into(), "unmute");
        self.post(path, self.state.session_form()).await
    }

    /// Add users to a group thread
    ///
    /// POST /api/v1/direct_v2/threads/{thread_id}/add_user/
    pub async fn add_user<I>(&self, thread_id: impl Into<Id>, user_ids: I) -> Result<AddUserResponse>
    where
        I: IntoIterator,
        I::Item: Into<Id>,
    {
        let path = thread_path(&thread_id.into(), "add_user");
        let form = self.with_ids("user_ids", collect_ids(user_ids))?;
        self.post(path, form).await
    }

    /// POST /api/v1/direct_v2/threads/{thread_id}/leave/
    pub async fn leave(&self, thread_id: impl Into<Id>) -> Result<StatusResponse> {
        let path = thread_path(&thread_id.into(), "leave");
        self.post(path, self.state.session_form()).await
    }

    /// Remove a thread from the inbox
    ///
    /// POST /api/v1/direct_v2/threads/{thread_id}/hide/
    pub async fn hide(&self, thread_id: impl Into<Id>) -> Result<StatusResponse> {
        let path = thread_path(&thread_id.into(), "hide");
        let mut form = self.state.session_form();
        form.insert("use_unified_inbox".to_string(), "true".to_string());
        self.post(path, form).await
    }

    /// POST /api/v1/direct_v2/threads/{thread_id}/items/{item_id}/seen/
    pub async fn mark_item_seen(
        &self,
        thread_id: impl Into<Id>,
        item_id: impl Into<Id>,
    ) -> Result<StatusResponse> {
        let thread_id = thread_id.into();
        let item_id = item_id.into();
        let path = item_path(&thread_id, &item_id, "seen");

        let mut form = self.state.session_form();
        form.insert("use_unified_inbox".to_string(), "true".to_string());
        form.insert("action".to_string(), "mark_seen".to_string());
        form.insert("thread_id".to_string(), thread_id.into_string());
        form.insert("item_id".to_string(), item_id.into_string());
        self.post(path, form).await
    }

    /// POST /api/v1/direct_v2/threads/{thread_id}/items/{item_id}/delete/
    pub async fn delete_item(
        &self,
        thread_id: impl Into<Id>,
        item_id: impl Into<Id>,
    ) -> Result<StatusResponse> {
        let path = item_path(&thread_id.into(), &item_id.into(), "delete");
        self.post(path, self.state.session_form()).await
    }

    /// Send an item to threads or users
    ///
    /// POST /api/v1/direct_v2/threads/broadcast/{item}/
    ///
    /// Each call carries a fresh mutation token as both `client_context` and
    /// `mutation_token` so the server can drop duplicated sends. Fields in
    /// `options.form` override the generated ones.
    pub async fn broadcast(&self, options: BroadcastOptions) -> Result<BroadcastResponse> {
        let BroadcastOptions {
            item,
            recipients,
            form: extra,
            query,
            signed,
        } = options;
        let mutation_token = Uuid::new_v4().to_string();

        let mut form = Form::new();
        form.insert("action".to_string(), "send_item".to_string());
        form.insert(recipients.form_key().to_string(), recipients.encode()?);
        form.insert("client_context".to_string(), mutation_token.clone());
        form.insert("_csrftoken".to_string(), self.state.csrf_token().to_string());
        form.insert("device_id".to_string(), self.state.device_id().to_string());
        form.insert("mutation_token".to_string(), mutation_token.clone());
        form.insert("_uuid".to_string(), self.state.uuid().to_string());
        form.extend(extra);

        debug!(
            item = %item,
            recipients = recipients.form_key(),
            mutation_token = %mutation_token,
            signed,
            "broadcasting item"
        );

        let path = format!("{THREADS_PATH}/broadcast/{item}/");
        let mut request = if signed {
            RequestDescriptor::post(path).signed_form(self.transport.sign(form)?)
        } else {
            RequestDescriptor::post(path).form(form)
        };
        request.query = query;

        self.transport.send_json(request).await
    }

    /// Send a text message
    ///
    /// POST /api/v1/direct_v2/threads/broadcast/text/
    pub async fn broadcast_text(
        &self,
        recipients: Recipients,
        text: impl Into<String>,
    ) -> Result<BroadcastResponse> {
        let options = BroadcastOptions::new("text", recipients).form_field("text", text);
        self.broadcast(options).await
    }

    /// Session form plus one JSON-encoded id list
    fn with_ids(&self, key: &str, ids: Vec<Id>) -> Result<Form> {
        let mut form = self.state.session_form();
        form.insert(key.to_string(), encode_ids(&ids)?);
        Ok(form)
    }

    async fn post<T: serde::de::DeserializeOwned>(&self, path: String, form: Form) -> Result<T> {
        let request = RequestDescriptor::post(path).form(form);
        self.transport.send_json(request).await
    }
}

fn thread_path(thread_id: &Id, action: &str) -> String {
    format!("{THREADS_PATH}/{thread_id}/{action}/")
}

fn item_path(thread_id: &Id, item_id: &Id, action: &str) -> String {
    format!("{THREADS_PATH}/{thread_id}/items/{item_id}/{action}/")
}
