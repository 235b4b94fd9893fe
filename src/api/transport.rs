//! Seam between endpoint bindings and the code that actually talks HTTP
//!
//! Bindings never perform I/O. They hand a finished [`Request`] to a
//! [`Dispatcher`] together with a [`Callback`] and return whatever handle the
//! dispatcher gives back (typically something that can abort the request).

use crate::api::models::{ApiResponse, Request, RequestOptions};
use crate::error::{ClientError, Failure};
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::sync::oneshot;

/// Final outcome delivered to a callback
pub type Outcome = Result<ApiResponse, Failure>;

/// Completion callback, invoked at most once
pub type Callback = Box<dyn FnOnce(Outcome) + Send + 'static>;

/// Sends a request on behalf of a binding
pub trait Dispatcher {
    /// Returned to the caller unchanged, e.g. an abort handle
    type Handle;

    fn make_request(
        &self,
        request: Request,
        options: RequestOptions,
        callback: Callback,
    ) -> Self::Handle;
}

impl<F, H> Dispatcher for F
where
    F: Fn(Request, RequestOptions, Callback) -> H,
{
    type Handle = H;

    fn make_request(
        &self,
        request: Request,
        options: RequestOptions,
        callback: Callback,
    ) -> Self::Handle {
        self(request, options, callback)
    }
}

/// Build a callback that settles a oneshot channel
pub(crate) fn settle_channel() -> (Callback, oneshot::Receiver<Outcome>) {
    let (sender, receiver) = oneshot::channel();
    let callback: Callback = Box::new(move |outcome| {
        // Receiver gone means the caller stopped waiting
        if sender.send(outcome).is_err() {
            log::debug!("Response receiver dropped before completion");
        }
    });
    (callback, receiver)
}

/// Future returned when a binding is called without a callback.
///
/// Resolves with the dispatcher's response or its error. If the dispatcher
/// drops the callback without calling it the future yields
/// [`ClientError::Canceled`].
pub struct PendingResponse<H> {
    handle: Option<H>,
    receiver: oneshot::Receiver<Outcome>,
}

impl<H> PendingResponse<H> {
    pub(crate) fn new(handle: Option<H>, receiver: oneshot::Receiver<Outcome>) -> Self {
        Self { handle, receiver }
    }

    /// The dispatcher's handle, `None` if validation failed before dispatch
    pub fn handle(&self) -> Option<&H> {
        self.handle.as_ref()
    }

    pub fn take_handle(&mut self) -> Option<H> {
        self.handle.take()
    }
}

// The handle is never pinned
impl<H> Unpin for PendingResponse<H> {}

impl<H> Future for PendingResponse<H> {
    type Output = Result<ApiResponse, ClientError>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();
        match Pin::new(&mut this.receiver).poll(cx) {
            Poll::Ready(Ok(Ok(response))) => Poll::Ready(Ok(response)),
            Poll::Ready(Ok(Err(failure))) => Poll::Ready(Err(failure.error)),
            Poll::Ready(Err(_)) => Poll::Ready(Err(ClientError::Canceled)),
            Poll::Pending => Poll::Pending,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::Method;
    use indexmap::IndexMap;
    use serde_json::Value;

    fn sample_request() -> Request {
        Request {
            method: Method::Get,
            path: "/tweets/_doc/_percolate".to_string(),
            body: Value::String(String::new()),
            querystring: IndexMap::new(),
        }
    }

    #[test]
    fn test_closure_is_dispatcher() {
        let dispatcher = |request: Request, _options: RequestOptions, callback: Callback| {
            callback(Ok(ApiResponse::default()));
            request.path.len()
        };
        let handle = dispatcher.make_request(
            sample_request(),
            RequestOptions::default(),
            Box::new(|_| {}),
        );
        assert_eq!(handle, "/tweets/_doc/_percolate".len());
    }

    #[tokio::test]
    async fn test_pending_response_resolves() {
        let (callback, receiver) = settle_channel();
        callback(Ok(ApiResponse {
            status_code: Some(200),
            ..Default::default()
        }));
        let pending: PendingResponse<()> = PendingResponse::new(Some(()), receiver);
        assert!(pending.handle().is_some());
        let response = pending.await.expect("expected success");
        assert_eq!(response.status_code, Some(200));
    }

    #[tokio::test]
    async fn test_pending_response_rejects_with_error() {
        let (callback, receiver) = settle_channel();
        callback(Err(Failure::new(
            ClientError::Timeout { timeout_ms: 10 },
            ApiResponse::default(),
        )));
        let pending: PendingResponse<()> = PendingResponse::new(None, receiver);
        let error = pending.await.expect_err("expected failure");
        assert_eq!(error, ClientError::Timeout { timeout_ms: 10 });
    }

    #[tokio::test]
    async fn test_pending_response_canceled_when_callback_dropped() {
        let (callback, receiver) = settle_channel();
        drop(callback);
        let mut pending: PendingResponse<u8> = PendingResponse::new(Some(7), receiver);
        assert_eq!(pending.take_handle(), Some(7));
        assert!(pending.handle().is_none());
        assert_eq!(pending.await, Err(ClientError::Canceled));
    }
}
