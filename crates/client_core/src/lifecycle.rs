//! Request lifecycle for one endpoint: idle, loading, success or error.

use std::{marker::PhantomData, sync::Arc};

use serde::{de::DeserializeOwned, Serialize};
use shared::error::RequestError;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};
use url::Url;

use crate::transport::JsonTransport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LifecycleSnapshot<Resp> {
    pub data: Option<Resp>,
    pub loading: bool,
    pub error: Option<String>,
    /// Ticket of the call that produced `data`; 0 before any success.
    pub data_generation: u64,
}

impl<Resp> LifecycleSnapshot<Resp> {
    pub fn phase(&self) -> Phase {
        if self.loading {
            Phase::Loading
        } else if self.error.is_some() {
            Phase::Error
        } else if self.data.is_some() {
            Phase::Success
        } else {
            Phase::Idle
        }
    }
}

struct LifecycleState<Resp> {
    data: Option<Resp>,
    loading: bool,
    error: Option<String>,
    data_generation: u64,
    issued: u64,
}

impl<Resp> LifecycleState<Resp> {
    fn idle() -> Arc<Mutex<Self>> {
        Arc::new(Mutex::new(Self {
            data: None,
            loading: false,
            error: None,
            data_generation: 0,
            issued: 0,
        }))
    }
}

/// Submits `Req` payloads to a fixed endpoint and mirrors the outcome of the
/// most recently issued call into shared state.
///
/// Every call takes a ticket. A call that settles after a newer one was issued
/// leaves the state untouched and reports [`RequestError::superseded`] to its caller.
///
/// Clones share state. Use [`RequestLifecycle::fresh`] for an independent one.
pub struct RequestLifecycle<Req, Resp> {
    endpoint: Url,
    transport: Arc<dyn JsonTransport>,
    state: Arc<Mutex<LifecycleState<Resp>>>,
    _request: PhantomData<fn(&Req)>,
}

impl<Req, Resp> Clone for RequestLifecycle<Req, Resp> {
    fn clone(&self) -> Self {
        Self {
            endpoint: self.endpoint.clone(),
            transport: Arc::clone(&self.transport),
            state: Arc::clone(&self.state),
            _request: PhantomData,
        }
    }
}

impl<Req, Resp> RequestLifecycle<Req, Resp>
where
    Req: Serialize + Sync,
    Resp: DeserializeOwned + Clone + Send,
{
    pub fn new(endpoint: Url, transport: Arc<dyn JsonTransport>) -> Self {
        Self {
            endpoint,
            transport,
            state: LifecycleState::idle(),
            _request: PhantomData,
        }
    }

    /// Same endpoint and transport, with its own idle state.
    pub fn fresh(&self) -> Self {
        Self::new(self.endpoint.clone(), Arc::clone(&self.transport))
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub async fn snapshot(&self) -> LifecycleSnapshot<Resp> {
        let state = self.state.lock().await;
        LifecycleSnapshot {
            data: state.data.clone(),
            loading: state.loading,
            error: state.error.clone(),
            data_generation: state.data_generation,
        }
    }

    /// Not idempotent: every call issues a new request and nothing is retried.
    ///
    /// Dropping the returned future after it has started leaves `loading` set
    /// until the next call settles.
    pub async fn execute(&self, payload: &Req) -> Result<Resp, RequestError> {
        let ticket = self.begin().await;
        let outcome = self.round_trip(payload).await;
        self.settle(ticket, outcome).await
    }

    async fn begin(&self) -> u64 {
        let mut state = self.state.lock().await;
        state.issued += 1;
        state.loading = true;
        state.error = None;
        debug!(ticket = state.issued, endpoint = %self.endpoint, "request issued");
        state.issued
    }

    async fn round_trip(&self, payload: &Req) -> Result<Resp, RequestError> {
        let body = serde_json::to_vec(payload)
            .map_err(|err| RequestError::encode(format!("failed to encode request: {err}")))?;
        let reply = self.transport.post_json(&self.endpoint, body).await?;
        if !reply.is_success() {
            return Err(RequestError::status(reply.status, &reply.body));
        }
        serde_json::from_str(&reply.body).map_err(|err| {
            RequestError::malformed(format!(
                "unexpected response from {}: {err}",
                self.endpoint
            ))
        })
    }

    async fn settle(
        &self,
        ticket: u64,
        outcome: Result<Resp, RequestError>,
    ) -> Result<Resp, RequestError> {
        let mut state = self.state.lock().await;
        if ticket != state.issued {
            debug!(ticket, latest = state.issued, "discarding superseded result");
            return Err(RequestError::superseded());
        }

        state.loading = false;
        match outcome {
            Ok(response) => {
                info!(ticket, endpoint = %self.endpoint, "request succeeded");
                state.data = Some(response.clone());
                state.data_generation = ticket;
                state.error = None;
                Ok(response)
            }
            Err(err) => {
                warn!(ticket, kind = ?err.kind, error = %err, "request failed");
                state.error = Some(err.message.clone());
                Err(err)
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/lifecycle_tests.rs"]
mod tests;
