//! Completion-handler bridge
//!
//! Some network APIs report their result by invoking a callback instead of
//! returning a future. `CallbackTransport` wraps such an API: every call hands
//! the API a `Completion`, then suspends until that completion fires.
//!
//! A `Completion` resolves its exchange at most once. `complete` consumes the
//! handle, so completing twice does not compile. Callers that must pass a
//! re-invocable closure can use `into_callback`; its second and later
//! invocations are ignored and logged. A completion dropped without firing
//! resolves the exchange with `TransportError::Abandoned`.

use super::types::{ApiRequest, Exchange, ResponseMeta, Transport};
use crate::error::TransportError;
use async_trait::async_trait;
use bytes::Bytes;
use futures::channel::oneshot;
use tracing::warn;

/// One-shot handle that resolves a pending exchange
#[derive(Debug)]
pub struct Completion {
    sender: oneshot::Sender<Result<Bytes, TransportError>>,
}

impl Completion {
    /// Resolve the exchange
    pub fn complete(self, result: Result<Bytes, TransportError>) {
        // The receiver is gone when the awaiting call was dropped; nothing to deliver.
        let _ = self.sender.send(result);
    }

    /// Resolve the exchange with a payload
    pub fn succeed(self, body: impl Into<Bytes>) {
        self.complete(Ok(body.into()));
    }

    /// Resolve the exchange with an error
    pub fn fail(self, error: TransportError) {
        self.complete(Err(error));
    }

    /// Turn the handle into a closure for APIs that take `FnMut` callbacks
    ///
    /// Only the first invocation resolves the exchange.
    pub fn into_callback(self) -> impl FnMut(Result<Bytes, TransportError>) + Send + 'static {
        let mut slot = Some(self);
        move |result| match slot.take() {
            Some(completion) => completion.complete(result),
            None => warn!("Completion callback invoked more than once, ignoring"),
        }
    }
}

/// Transport adapter over a completion-handler style function
pub struct CallbackTransport<F> {
    start: F,
}

impl<F> CallbackTransport<F>
where
    F: Fn(ApiRequest, Completion) + Send + Sync,
{
    /// Wrap a function that starts an exchange and later fires the completion
    pub fn new(start: F) -> Self {
        Self { start }
    }
}

#[async_trait]
impl<F> Transport for CallbackTransport<F>
where
    F: Fn(ApiRequest, Completion) + Send + Sync,
{
    async fn execute(&self, request: &ApiRequest) -> Result<Exchange, TransportError> {
        let (sender, receiver) = oneshot::channel();
        (self.start)(request.clone(), Completion { sender });

        match receiver.await {
            Ok(result) => result.map(|body| (body, ResponseMeta::ok(request.url().ok()))),
            Err(oneshot::Canceled) => Err(TransportError::Abandoned),
        }
    }
}

impl<F> std::fmt::Debug for CallbackTransport<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallbackTransport").finish_non_exhaustive()
    }
}
