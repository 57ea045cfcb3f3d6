//! REST helpers for the activities endpoints.
//!
//! Browser (wasm32) builds make real HTTP calls via `gloo-net`. Host builds
//! get stub bodies returning a transport error, since these endpoints only
//! exist in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call resolves to `Result<_, ApiError>` with exactly two error
//! kinds: a transport/parse failure, or a structured rejection carrying the
//! server's `detail` text. Callers turn both into a status message; nothing
//! here panics or propagates further.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::state::activities::Snapshot;

/// Failure of a single API call.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never completed or the body was not valid JSON.
    #[error("transport failure: {0}")]
    Transport(String),
    /// The server answered non-2xx with an optional `detail` message.
    #[error("rejected: {}", .detail.as_deref().unwrap_or("no detail"))]
    Rejected { detail: Option<String> },
}

/// Build the signup/unregister URL, percent-encoding the activity path
/// segment and the email query value.
pub fn action_url(action: &str, activity: &str, email: &str) -> String {
    format!(
        "/activities/{}/{action}?email={}",
        urlencoding::encode(activity),
        urlencoding::encode(email)
    )
}

/// Fetch the full activities snapshot from `GET /activities`.
///
/// # Errors
///
/// Any non-2xx status, network failure, or parse failure is a
/// [`ApiError::Transport`]; the list endpoint has no structured error shape.
pub async fn fetch_activities() -> Result<Snapshot, ApiError> {
    #[cfg(target_arch = "wasm32")]
    {
        let resp = gloo_net::http::Request::get("/activities")
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Transport(format!(
                "unexpected status {}",
                resp.status()
            )));
        }
        resp.json::<Snapshot>()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Err(ApiError::Transport(
            "not available outside the browser".to_owned(),
        ))
    }
}

/// Sign `email` up for `activity` via `POST /activities/{name}/signup`.
/// Returns the server's confirmation message.
///
/// # Errors
///
/// [`ApiError::Rejected`] on a structured non-2xx response,
/// [`ApiError::Transport`] otherwise.
pub async fn signup(activity: &str, email: &str) -> Result<String, ApiError> {
    post_action(&action_url("signup", activity, email)).await
}

/// Remove `email` from `activity` via `POST /activities/{name}/unregister`.
/// Returns the server's confirmation message.
///
/// # Errors
///
/// Same contract as [`signup`].
pub async fn unregister(activity: &str, email: &str) -> Result<String, ApiError> {
    post_action(&action_url("unregister", activity, email)).await
}

/// POST to a mutation endpoint and decode the `{message}` / `{detail}` body.
async fn post_action(url: &str) -> Result<String, ApiError> {
    #[cfg(target_arch = "wasm32")]
    {
        #[derive(serde::Deserialize)]
        struct MessageBody {
            message: String,
        }

        #[derive(serde::Deserialize)]
        struct DetailBody {
            detail: Option<String>,
        }

        let resp = gloo_net::http::Request::post(url)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        if resp.ok() {
            let body: MessageBody = resp
                .json()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            Ok(body.message)
        } else {
            // An unparseable error body still surfaces as a rejection; the
            // caller supplies the fallback text.
            let detail = resp.json::<DetailBody>().await.ok().and_then(|b| b.detail);
            Err(ApiError::Rejected { detail })
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = url;
        Err(ApiError::Transport(
            "not available outside the browser".to_owned(),
        ))
    }
}
