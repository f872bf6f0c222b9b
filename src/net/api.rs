//! REST endpoint wrappers for the bulletin board backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, with the
//! bearer token attached from the session store and the global 401
//! reaction (clear session, redirect to `/login`) applied to every
//! authorized endpoint. The login and team registration endpoints are
//! unauthenticated, so a 401 there surfaces as [`ApiError::AuthFailed`]
//! without the redirect and the user stays on the form.
//!
//! Server-side (SSR): stubs returning errors since these endpoints are
//! only meaningful in the browser.

#![allow(clippy::unused_async)]

use crate::net::error::ApiError;
use crate::net::types::{
    ChangePasswordRequest, Comment, LoginRequest, LoginResponse, Page, Post, PostDetail,
    ReactionKind, ReactionResponse, RegisterTeamRequest, RegisterTeamResponse,
};

#[cfg(feature = "hydrate")]
use crate::net::types::{ContentRequest, ReactionRequest};
use crate::session::controller::AuthExchange;

#[cfg(feature = "hydrate")]
use http::*;

#[cfg(feature = "hydrate")]
mod http {
    use gloo_net::http::{RequestBuilder, Response};

    use crate::net::error::ApiError;
    use crate::session::store::SessionStore;

    pub(super) const API_BASE: &str = "/api";

    /// Attach the stored bearer token, if any.
    pub(super) fn authorized(builder: RequestBuilder) -> RequestBuilder {
        match SessionStore::local().access_token() {
            Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
            None => builder,
        }
    }

    /// Map a response to the error taxonomy. A 401 on an authorized
    /// endpoint means the token is no longer accepted: drop the session
    /// and send the client back to the login entry point.
    pub(super) fn check(
        result: Result<Response, gloo_net::Error>,
        is_authorized: bool,
    ) -> Result<Response, ApiError> {
        let resp = result.map_err(|e| ApiError::Network(e.to_string()))?;
        if resp.status() == 401 {
            if is_authorized {
                log::warn!("401 from {}; clearing session", resp.url());
                SessionStore::local().clear();
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_href("/login");
                }
            }
            return Err(ApiError::AuthFailed);
        }
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        Ok(resp)
    }

    pub(super) async fn decode<T: serde::de::DeserializeOwned>(
        resp: Response,
    ) -> Result<T, ApiError> {
        resp.json::<T>()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))
    }

    pub(super) fn body_error(err: gloo_net::Error) -> ApiError {
        ApiError::Network(err.to_string())
    }
}

#[cfg(not(feature = "hydrate"))]
fn ssr_unreachable() -> ApiError {
    ApiError::Network("not available on server".to_owned())
}

/// Exchange team credentials for a session via `POST /auth/login`.
/// Unauthenticated; bad credentials map to [`ApiError::AuthFailed`].
pub async fn login(request: &LoginRequest) -> Result<LoginResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&format!("{API_BASE}/auth/login"))
            .json(request)
            .map_err(body_error)?
            .send()
            .await;
        decode(check(resp, false)?).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ssr_unreachable())
    }
}

/// Production [`AuthExchange`] used by the session context.
pub struct RestAuth;

impl AuthExchange for RestAuth {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        login(request).await
    }
}

/// Register a new team via `POST /teams`; returns the issued one-time
/// member passwords.
pub async fn register_team(
    request: &RegisterTeamRequest,
) -> Result<RegisterTeamResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&format!("{API_BASE}/teams"))
            .json(request)
            .map_err(body_error)?
            .send()
            .await;
        decode(check(resp, false)?).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ssr_unreachable())
    }
}

/// Change the member password via `PUT /members/password`.
pub async fn change_password(request: &ChangePasswordRequest) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = authorized(gloo_net::http::Request::put(&format!(
            "{API_BASE}/members/password"
        )))
        .json(request)
        .map_err(body_error)?
        .send()
        .await;
        check(resp, true).map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ssr_unreachable())
    }
}

/// Fetch one page of posts via `GET /posts`. `page` is 0-based, the way
/// the list API counts; the UI converts from its 1-based pages first.
pub async fn fetch_posts(page: u32, size: u32) -> Result<Page<Post>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{API_BASE}/posts?page={page}&size={size}");
        let resp = authorized(gloo_net::http::Request::get(&url)).send().await;
        decode(check(resp, true)?).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (page, size);
        Err(ssr_unreachable())
    }
}

/// Fetch a single post with the caller's reaction flags.
pub async fn fetch_post(post_id: i64) -> Result<PostDetail, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{API_BASE}/posts/{post_id}");
        let resp = authorized(gloo_net::http::Request::get(&url)).send().await;
        decode(check(resp, true)?).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = post_id;
        Err(ssr_unreachable())
    }
}

/// Create a post via `POST /posts`.
pub async fn create_post(content: &str) -> Result<Post, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = ContentRequest {
            content: content.to_owned(),
        };
        let resp = authorized(gloo_net::http::Request::post(&format!("{API_BASE}/posts")))
            .json(&body)
            .map_err(body_error)?
            .send()
            .await;
        decode(check(resp, true)?).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = content;
        Err(ssr_unreachable())
    }
}

/// Update a post via `PUT /posts/{id}`.
pub async fn update_post(post_id: i64, content: &str) -> Result<Post, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = ContentRequest {
            content: content.to_owned(),
        };
        let url = format!("{API_BASE}/posts/{post_id}");
        let resp = authorized(gloo_net::http::Request::put(&url))
            .json(&body)
            .map_err(body_error)?
            .send()
            .await;
        decode(check(resp, true)?).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (post_id, content);
        Err(ssr_unreachable())
    }
}

/// Delete a post via `DELETE /posts/{id}`.
pub async fn delete_post(post_id: i64) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{API_BASE}/posts/{post_id}");
        let resp = authorized(gloo_net::http::Request::delete(&url)).send().await;
        check(resp, true).map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = post_id;
        Err(ssr_unreachable())
    }
}

/// Toggle a reaction on a post via `POST /posts/{id}/reactions`.
pub async fn react_to_post(
    post_id: i64,
    kind: ReactionKind,
) -> Result<ReactionResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{API_BASE}/posts/{post_id}/reactions");
        let resp = authorized(gloo_net::http::Request::post(&url))
            .json(&ReactionRequest { kind })
            .map_err(body_error)?
            .send()
            .await;
        decode(check(resp, true)?).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (post_id, kind);
        Err(ssr_unreachable())
    }
}

/// Fetch one page of a post's comments via `GET /posts/{id}/comments`.
/// `page` is 0-based like the post list.
pub async fn fetch_comments(
    post_id: i64,
    page: u32,
    size: u32,
) -> Result<Page<Comment>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{API_BASE}/posts/{post_id}/comments?page={page}&size={size}");
        let resp = authorized(gloo_net::http::Request::get(&url)).send().await;
        decode(check(resp, true)?).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (post_id, page, size);
        Err(ssr_unreachable())
    }
}

/// Create a comment under a post via `POST /posts/{id}/comments`.
pub async fn create_comment(post_id: i64, content: &str) -> Result<Comment, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = ContentRequest {
            content: content.to_owned(),
        };
        let url = format!("{API_BASE}/posts/{post_id}/comments");
        let resp = authorized(gloo_net::http::Request::post(&url))
            .json(&body)
            .map_err(body_error)?
            .send()
            .await;
        decode(check(resp, true)?).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (post_id, content);
        Err(ssr_unreachable())
    }
}

/// Update a comment via `PUT /comments/{id}`.
pub async fn update_comment(comment_id: i64, content: &str) -> Result<Comment, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = ContentRequest {
            content: content.to_owned(),
        };
        let url = format!("{API_BASE}/comments/{comment_id}");
        let resp = authorized(gloo_net::http::Request::put(&url))
            .json(&body)
            .map_err(body_error)?
            .send()
            .await;
        decode(check(resp, true)?).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (comment_id, content);
        Err(ssr_unreachable())
    }
}

/// Delete a comment via `DELETE /comments/{id}`.
pub async fn delete_comment(comment_id: i64) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{API_BASE}/comments/{comment_id}");
        let resp = authorized(gloo_net::http::Request::delete(&url)).send().await;
        check(resp, true).map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = comment_id;
        Err(ssr_unreachable())
    }
}

/// Toggle a reaction on a comment via `POST /comments/{id}/reactions`.
pub async fn react_to_comment(
    comment_id: i64,
    kind: ReactionKind,
) -> Result<ReactionResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{API_BASE}/comments/{comment_id}/reactions");
        let resp = authorized(gloo_net::http::Request::post(&url))
            .json(&ReactionRequest { kind })
            .map_err(body_error)?
            .send()
            .await;
        decode(check(resp, true)?).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (comment_id, kind);
        Err(ssr_unreachable())
    }
}
