//! Pluggable handling of non-HTTPS requests that cannot be redirected.
//!
//! The gate only consults a handler for insecure, non-local requests whose
//! method is not GET. Whatever the handler returns becomes the decision.

use http::StatusCode;

use crate::decision::Decision;
use crate::request::RequestDescriptor;

/// Strategy deciding what happens to an insecure unsafe-method request.
///
/// Implemented for closures, so a one-off policy needs no new type:
///
/// ```
/// use http::StatusCode;
/// use require_https::{Decision, HttpsGate, RequestDescriptor};
///
/// let gate = HttpsGate::with_handler(|_: &RequestDescriptor| {
///     Decision::reject(StatusCode::NOT_FOUND)
/// });
///
/// let request = RequestDescriptor::new("http", "POST", "example.com");
/// assert_eq!(gate.decide(&request), Decision::reject(StatusCode::NOT_FOUND));
/// ```
///
/// A panicking handler is not caught; the panic reaches the caller of
/// [`HttpsGate::decide`](crate::HttpsGate::decide).
pub trait NonHttpsHandler {
    /// Produces the decision for `request`.
    fn handle(&self, request: &RequestDescriptor) -> Decision;
}

/// Default handler: reject with `403 Forbidden`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Forbid;

impl NonHttpsHandler for Forbid {
    fn handle(&self, _request: &RequestDescriptor) -> Decision {
        Decision::forbidden()
    }
}

/// Rejects with a fixed status.
///
/// ```
/// use http::StatusCode;
/// use require_https::{Decision, NonHttpsHandler, RejectWith, RequestDescriptor};
///
/// let handler = RejectWith(StatusCode::NOT_FOUND);
/// let request = RequestDescriptor::new("http", "DELETE", "example.com");
/// assert_eq!(handler.handle(&request), Decision::reject(StatusCode::NOT_FOUND));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RejectWith(pub StatusCode);

impl NonHttpsHandler for RejectWith {
    fn handle(&self, _request: &RequestDescriptor) -> Decision {
        Decision::reject(self.0)
    }
}

impl<F> NonHttpsHandler for F
where
    F: Fn(&RequestDescriptor) -> Decision,
{
    fn handle(&self, request: &RequestDescriptor) -> Decision {
        self(request)
    }
}
