use chronos_shared::{ChatMessage, FriendRequest, FriendSummary, FriendTargetRequest, SendChatRequest};
use serde_json::Value;

use super::ChronosClient;
use crate::error::ApiResult;
use crate::request::endpoint_path;
use crate::social::{normalize_all, normalize_chat_message, normalize_friend, normalize_friend_request};
use crate::transport::Transport;

impl<T: Transport> ChronosClient<T> {
    /// Users matching `query`, as friend summaries.
    pub async fn search_users(&self, query: &str) -> ApiResult<Vec<FriendSummary>> {
        let path = endpoint_path(&["friends", "search"], &[("q", query)])?;
        let raw = self.fetch_list(&path).await?;
        Ok(normalize_all(&raw, "users", normalize_friend))
    }

    pub async fn list_friends(&self) -> ApiResult<Vec<FriendSummary>> {
        let raw = self.fetch_list("/friends").await?;
        Ok(normalize_all(&raw, "friends", normalize_friend))
    }

    pub async fn list_friend_requests(&self) -> ApiResult<Vec<FriendRequest>> {
        let raw = self.fetch_list("/friends/requests").await?;
        Ok(normalize_all(&raw, "requests", normalize_friend_request))
    }

    pub async fn send_friend_request(&self, target_id: &str) -> ApiResult<Option<Value>> {
        let request = self.post("/friends/request").json(&FriendTargetRequest {
            target_id: target_id.to_string(),
        })?;
        self.executor.request(request).await
    }

    pub async fn accept_friend_request(&self, request_id: &str) -> ApiResult<Option<Value>> {
        let path = endpoint_path(&["friends", "request", request_id, "accept"], &[])?;
        self.executor.request(self.post(path)).await
    }

    pub async fn reject_friend_request(&self, request_id: &str) -> ApiResult<Option<Value>> {
        let path = endpoint_path(&["friends", "request", request_id, "reject"], &[])?;
        self.executor.request(self.post(path)).await
    }

    pub async fn remove_friend(&self, friend_id: &str) -> ApiResult<()> {
        let path = endpoint_path(&["friends", friend_id], &[])?;
        self.executor.request(self.delete(path)).await?;
        Ok(())
    }

    pub async fn block_user(&self, target_id: &str) -> ApiResult<Option<Value>> {
        let request = self.post("/friends/block").json(&FriendTargetRequest {
            target_id: target_id.to_string(),
        })?;
        self.executor.request(request).await
    }

    /// Conversation with one friend, oldest first as sent by the server.
    pub async fn get_chat(&self, friend_id: &str) -> ApiResult<Vec<ChatMessage>> {
        let path = endpoint_path(&["friends", "chat", friend_id], &[])?;
        let raw = self.fetch_list(&path).await?;
        Ok(normalize_all(&raw, "messages", normalize_chat_message))
    }

    /// Send a message. Returns the stored message when the server echoes one
    /// back with a usable id.
    pub async fn send_chat(&self, friend_id: &str, content: &str) -> ApiResult<Option<ChatMessage>> {
        let path = endpoint_path(&["friends", "chat", friend_id], &[])?;
        let request = self.post(path).json(&SendChatRequest {
            content: content.to_string(),
        })?;
        let raw = self.executor.request(request).await?;
        Ok(raw.as_ref().and_then(normalize_chat_message))
    }

    async fn fetch_list(&self, path: &str) -> ApiResult<Value> {
        Ok(self.executor.request(self.get(path)).await?.unwrap_or(Value::Null))
    }
}
