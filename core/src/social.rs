//! Friend, friend-request and chat record normalization
//!
//! Each canonical field is resolved from an ordered candidate list (see
//! [`crate::fields`]). Records without a resolvable identifier normalize to
//! `None`; list helpers drop them so the UI never sees an unaddressable row.

use chronos_shared::{ChatMessage, FriendRequest, FriendSummary, friend_status};
use serde_json::Value;

use crate::fields::{first_bool, first_string, list_items};

pub const FRIEND_ID_CANDIDATES: [&str; 4] = ["friendId", "id", "friend.id", "user.id"];
pub const FRIEND_USERNAME_CANDIDATES: [&str; 4] =
    ["username", "friend.username", "user.username", "name"];
pub const FRIEND_STATUS_CANDIDATES: [&str; 4] = ["status", "state", "friend.status", "user.status"];
pub const FRIEND_ONLINE_CANDIDATES: [&str; 4] =
    ["online", "isOnline", "friend.online", "user.online"];

pub const REQUEST_ID_CANDIDATES: [&str; 4] = ["id", "requestId", "_id", "request.id"];
pub const REQUEST_FROM_ID_CANDIDATES: [&str; 7] = [
    "fromId",
    "from_id",
    "senderId",
    "requesterId",
    "from.id",
    "sender.id",
    "requester.id",
];
pub const REQUEST_FROM_USERNAME_CANDIDATES: [&str; 4] = [
    "fromUsername",
    "from.username",
    "sender.username",
    "requester.username",
];
pub const REQUEST_TO_ID_CANDIDATES: [&str; 5] = ["toId", "to_id", "targetId", "to.id", "receiver.id"];

pub const MESSAGE_ID_CANDIDATES: [&str; 3] = ["id", "messageId", "_id"];
pub const MESSAGE_SENDER_CANDIDATES: [&str; 6] =
    ["senderId", "sender_id", "fromId", "from", "sender.id", "from.id"];
pub const MESSAGE_RECEIVER_CANDIDATES: [&str; 6] =
    ["receiverId", "receiver_id", "toId", "to", "receiver.id", "to.id"];
pub const MESSAGE_CONTENT_CANDIDATES: [&str; 4] = ["content", "text", "message", "body"];

pub const STATUS_CANDIDATES: [&str; 2] = ["status", "state"];
pub const CREATED_AT_CANDIDATES: [&str; 4] = ["createdAt", "created_at", "sentAt", "timestamp"];

/// Normalize a friend record.
///
/// The id falls back to the username when no id field is present; a record
/// with neither is rejected.
pub fn normalize_friend(raw: &Value) -> Option<FriendSummary> {
    let username = first_string(raw, &FRIEND_USERNAME_CANDIDATES);
    let id = first_string(raw, &FRIEND_ID_CANDIDATES).or_else(|| username.clone())?;

    let status = first_string(raw, &FRIEND_STATUS_CANDIDATES).or_else(|| {
        first_bool(raw, &FRIEND_ONLINE_CANDIDATES).map(|online| {
            if online {
                friend_status::ONLINE.to_string()
            } else {
                friend_status::OFFLINE.to_string()
            }
        })
    });

    Some(FriendSummary {
        id,
        username,
        status,
    })
}

/// Normalize a pending friend request. Both the request id and the sender
/// id are required.
pub fn normalize_friend_request(raw: &Value) -> Option<FriendRequest> {
    let id = first_string(raw, &REQUEST_ID_CANDIDATES)?;
    let from_id = first_string(raw, &REQUEST_FROM_ID_CANDIDATES)?;

    Some(FriendRequest {
        id,
        from_id,
        from_username: first_string(raw, &REQUEST_FROM_USERNAME_CANDIDATES),
        to_id: first_string(raw, &REQUEST_TO_ID_CANDIDATES),
        status: first_string(raw, &STATUS_CANDIDATES),
        created_at: first_string(raw, &CREATED_AT_CANDIDATES),
    })
}

/// Normalize a chat message. The sender id is required.
///
/// Messages without their own id are keyed by `sender:timestamp`; without a
/// timestamp either, the message is rejected.
pub fn normalize_chat_message(raw: &Value) -> Option<ChatMessage> {
    let sender_id = first_string(raw, &MESSAGE_SENDER_CANDIDATES)?;
    let created_at = first_string(raw, &CREATED_AT_CANDIDATES);
    let id = match first_string(raw, &MESSAGE_ID_CANDIDATES) {
        Some(id) => id,
        None => format!("{}:{}", sender_id, created_at.as_deref()?),
    };

    Some(ChatMessage {
        id,
        sender_id,
        receiver_id: first_string(raw, &MESSAGE_RECEIVER_CANDIDATES),
        content: first_string(raw, &MESSAGE_CONTENT_CANDIDATES).unwrap_or_default(),
        created_at,
    })
}

/// Normalize every record of a list response, dropping rejected records.
///
/// `wrapper` names the field holding the array when the backend wraps it in
/// an object (`{"friends": [...]}`).
pub fn normalize_all<T>(value: &Value, wrapper: &str, normalize: fn(&Value) -> Option<T>) -> Vec<T> {
    let items = list_items(value, wrapper);
    let normalized: Vec<T> = items.iter().filter_map(normalize).collect();
    if normalized.len() < items.len() {
        tracing::debug!(
            "Discarded {} of {} {} records without a usable id",
            items.len() - normalized.len(),
            items.len(),
            wrapper
        );
    }
    normalized
}
