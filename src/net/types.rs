//! Wire types for the bulletin board REST API.
//!
//! The backend speaks camelCase JSON; every type here carries a
//! `rename_all` attribute so the Rust side stays snake_case.

use serde::{Deserialize, Serialize};

/// Login request body for `POST /auth/login`.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub team_name: String,
    pub password: String,
}

/// Login response: token pair plus the member's identity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub member_id: i64,
    pub team_id: i64,
    pub team_name: String,
}

/// Team registration request body for `POST /teams`.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterTeamRequest {
    pub team_name: String,
    pub number_of_members: u32,
}

/// Team registration response: the issued one-time member passwords.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterTeamResponse {
    pub team_id: i64,
    pub team_name: String,
    pub passwords: Vec<String>,
}

/// Password change request body for `PUT /members/password`.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

/// A post as it appears in list responses.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: i64,
    pub content: String,
    pub created_at: String,
    pub updated_at: Option<String>,
    pub check_count: u32,
    pub like_count: u32,
    pub comment_count: u32,
    pub is_mine: bool,
}

/// A post with the caller's own reaction flags, from `GET /posts/{id}`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDetail {
    pub id: i64,
    pub content: String,
    pub created_at: String,
    pub updated_at: Option<String>,
    pub check_count: u32,
    pub like_count: u32,
    pub comment_count: u32,
    pub is_mine: bool,
    pub has_checked: bool,
    pub has_liked: bool,
}

/// A comment as it appears in list responses.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: i64,
    pub content: String,
    pub created_at: String,
    pub updated_at: Option<String>,
    pub check_count: u32,
    pub like_count: u32,
    pub is_mine: bool,
}

/// Request body for creating or updating a post or comment.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentRequest {
    pub content: String,
}

/// Reaction kind attached to posts and comments.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ReactionKind {
    Check,
    Like,
}

/// Reaction toggle request body.
#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReactionRequest {
    #[serde(rename = "type")]
    pub kind: ReactionKind,
}

/// Reaction toggle response; `active` is the state after the toggle.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReactionResponse {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: ReactionKind,
    pub active: bool,
}

/// Spring-style paged list envelope shared by the post and comment lists.
///
/// `number` is the 0-based page index the server was asked for; the UI
/// works in 1-based pages and converts at the call site.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total_pages: u32,
    pub total_elements: u64,
    pub last: bool,
    pub size: u32,
    pub number: u32,
}
