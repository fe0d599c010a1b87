//! One-call admission for `http`-based request pipelines.

use http::Response;

use crate::error::Error;
use crate::gate::HttpsGate;
use crate::handler::NonHttpsHandler;

use super::ExtractDescriptor;

/// Runs a request through the gate and returns the response to send, if any.
///
/// `Ok(None)` means the request is admitted and the protected handler
/// should run. `Ok(Some(response))` must be sent instead of running it.
///
/// # Errors
///
/// Returns an [`Error`] if the decision cannot be expressed as an HTTP
/// response; see [`Decision::to_response`](crate::Decision::to_response).
///
/// # Examples
///
/// ```
/// use http::{header, Request, StatusCode};
/// use require_https::{web::admit, HttpsGate};
///
/// let gate = HttpsGate::new();
/// let request = Request::get("/account?tab=1")
///     .header(header::HOST, "example.com")
///     .body(())
///     .unwrap();
///
/// let response = admit(&gate, &request).unwrap().expect("insecure GET is redirected");
/// assert_eq!(response.status(), StatusCode::MOVED_PERMANENTLY);
/// assert_eq!(response.headers()[header::LOCATION], "https://example.com/account?tab=1");
/// ```
pub fn admit<H, R>(gate: &HttpsGate<H>, request: &R) -> Result<Option<Response<()>>, Error>
where
    H: NonHttpsHandler,
    R: ExtractDescriptor + ?Sized,
{
    let descriptor = request.extract_descriptor();
    gate.decide(&descriptor).to_response()
}

/// Like [`admit`], but with the scheme of the connection the request
/// arrived on.
///
/// A server terminating TLS receives origin-form targets with no scheme in
/// them. Passing `"https"` here keeps such requests from being redirected
/// to themselves.
///
/// # Errors
///
/// Same as [`admit`].
///
/// # Examples
///
/// ```
/// use http::{header, Request};
/// use require_https::{web::admit_with_scheme, HttpsGate};
///
/// let gate = HttpsGate::new();
/// let request = Request::get("/login")
///     .header(header::HOST, "example.com")
///     .body(())
///     .unwrap();
///
/// assert!(admit_with_scheme(&gate, &request, "https").unwrap().is_none());
/// ```
pub fn admit_with_scheme<H, R>(
    gate: &HttpsGate<H>,
    request: &R,
    scheme: &str,
) -> Result<Option<Response<()>>, Error>
where
    H: NonHttpsHandler,
    R: ExtractDescriptor + ?Sized,
{
    let descriptor = request.extract_descriptor().with_scheme(scheme);
    gate.decide(&descriptor).to_response()
}
