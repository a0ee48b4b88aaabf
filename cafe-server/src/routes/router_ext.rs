//! Router extension for oneshot calls
//!
//! Calls the Router directly without going through the network stack.

use anyhow::Result;
use axum::Router;
use axum::body::Body;
use http::{Request, Response};
use tower::Service;

use crate::core::ServerState;

pub type OneshotResult = Result<Response<Body>>;

#[async_trait::async_trait]
pub trait OneshotRouter {
    /// Process a single request in-process
    ///
    /// # Example
    ///
    /// ```ignore
    /// let state = ServerState::initialize(&config).await;
    /// let request = Request::builder().uri("/health").body(Body::empty())?;
    /// let response = build_app().oneshot(&state, request).await?;
    /// ```
    async fn oneshot(&mut self, state: &ServerState, request: Request<Body>) -> OneshotResult;
}

#[async_trait::async_trait]
impl OneshotRouter for Router<ServerState> {
    async fn oneshot(&mut self, state: &ServerState, request: Request<Body>) -> OneshotResult {
        let mut svc = self.clone().with_state(state.clone());
        let response = svc.call(request).await?;
        Ok(response)
    }
}
