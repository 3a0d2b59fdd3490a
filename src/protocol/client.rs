//! Async JSON POST client for admin actions
//!
//! Runs on the browser's single thread; callers hand the returned future to
//! `spawn_local` and act on completion. There is no retry, no timeout, and no
//! in-flight tracking: a failed or hung request simply leaves the page in its
//! pre-request state.

use gloo_net::http::Request;
use serde::Serialize;

use crate::context::AdminContext;
use crate::error::AdminError;
use crate::protocol::envelope::ActionResponse;

/// POST `request` to `endpoint` and decode the JSON response.
///
/// Transport failures and undecodable bodies map to `AdminError::Transport`;
/// a well-formed body with `success: false` maps to `AdminError::Server`.
pub async fn post_action<Req, Resp>(
    ctx: &AdminContext,
    endpoint: &str,
    request: &Req,
) -> Result<Resp, AdminError>
where
    Req: Serialize,
    Resp: ActionResponse,
{
    let url = ctx.action_url(endpoint);

    let response = Request::post(&url)
        .json(request)
        .map_err(|err| transport(endpoint, err))?
        .send()
        .await
        .map_err(|err| transport(endpoint, err))?;

    let parsed: Resp = response
        .json()
        .await
        .map_err(|err| transport(endpoint, err))?;

    if !parsed.success() {
        return Err(AdminError::Server {
            endpoint: endpoint.to_string(),
        });
    }

    Ok(parsed)
}

fn transport(endpoint: &str, err: gloo_net::Error) -> AdminError {
    AdminError::Transport {
        endpoint: endpoint.to_string(),
        message: err.to_string(),
    }
}
