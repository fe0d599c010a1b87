use crate::{
    decision::Decision,
    handler::{Forbid, NonHttpsHandler},
    host::is_local_host,
    logging::{record_allow, record_decision, AllowReason},
    request::RequestDescriptor,
    url::build_https_url,
};

/// The HTTPS admission gate.
///
/// Every request passes through [`HttpsGate::decide`] before any protected
/// handler runs. Secure requests and requests to `localhost` are allowed;
/// an insecure GET is redirected to its HTTPS equivalent; any other insecure
/// request is given to the gate's [`NonHttpsHandler`], which rejects with
/// `403 Forbidden` by default.
///
/// The gate holds no mutable state. It is `Send + Sync` whenever its handler
/// is, so a single instance can serve all requests.
///
/// # Examples
///
/// ```
/// use http::StatusCode;
/// use require_https::{Decision, HttpsGate, RequestDescriptor};
///
/// let gate = HttpsGate::new();
///
/// let get = RequestDescriptor::new("http", "GET", "example.com").with_path("/login");
/// assert_eq!(
///     gate.decide(&get),
///     Decision::redirect_permanently("https://example.com/login")
/// );
///
/// let post = RequestDescriptor::new("http", "POST", "example.com");
/// assert_eq!(gate.decide(&post), Decision::reject(StatusCode::FORBIDDEN));
///
/// let local = RequestDescriptor::new("http", "POST", "localhost:5000");
/// assert_eq!(gate.decide(&local), Decision::Allow);
/// ```
#[derive(Debug, Clone, Default)]
pub struct HttpsGate<H = Forbid> {
    handler: H,
}

impl HttpsGate {
    /// Creates a gate that rejects insecure unsafe requests with 403.
    pub fn new() -> Self {
        Self { handler: Forbid }
    }
}

impl<H: NonHttpsHandler> HttpsGate<H> {
    /// Creates a gate with a custom non-HTTPS handler.
    pub fn with_handler(handler: H) -> Self {
        Self { handler }
    }

    /// Replaces the non-HTTPS handler, keeping builder-style chaining.
    ///
    /// # Examples
    ///
    /// ```
    /// use http::StatusCode;
    /// use require_https::{Decision, HttpsGate, RejectWith, RequestDescriptor};
    ///
    /// let gate = HttpsGate::new().handler(RejectWith(StatusCode::NOT_FOUND));
    /// let request = RequestDescriptor::new("http", "PUT", "example.com");
    /// assert_eq!(gate.decide(&request), Decision::reject(StatusCode::NOT_FOUND));
    /// ```
    pub fn handler<N: NonHttpsHandler>(self, handler: N) -> HttpsGate<N> {
        HttpsGate { handler }
    }

    /// Decides what to do with `request`.
    ///
    /// Never fails. A handler that panics is not caught.
    pub fn decide(&self, request: &RequestDescriptor) -> Decision {
        if request.is_https() {
            record_allow(request, AllowReason::Secure);
            return Decision::Allow;
        }

        // Local traffic is exempt regardless of method.
        if is_local_host(request.host()) {
            record_allow(request, AllowReason::Local);
            return Decision::Allow;
        }

        let decision = if request.is_safe_method() {
            Decision::redirect_permanently(build_https_url(
                request.host(),
                request.path_base(),
                request.path(),
                request.query(),
            ))
        } else {
            self.handler.handle(request)
        };

        record_decision(request, &decision);
        decision
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use http::StatusCode;

    use super::*;
    use crate::handler::RejectWith;

    #[test]
    fn https_is_always_allowed() {
        let gate = HttpsGate::new();
        for method in ["GET", "POST", "DELETE", ""] {
            let request = RequestDescriptor::new("https", method, "example.com")
                .with_path("/a?b")
                .with_query("?x=1");
            assert_eq!(gate.decide(&request), Decision::Allow);
        }
    }

    #[test]
    fn scheme_match_ignores_case() {
        let gate = HttpsGate::new();
        let request = RequestDescriptor::new("HTTPS", "POST", "example.com");
        assert_eq!(gate.decide(&request), Decision::Allow);
    }

    #[test]
    fn localhost_is_allowed_for_every_method() {
        let gate = HttpsGate::new();
        for method in ["GET", "POST", "PUT", "PATCH", "DELETE"] {
            let request = RequestDescriptor::new("http", method, "localhost");
            assert_eq!(gate.decide(&request), Decision::Allow, "{method}");
        }
    }

    #[test]
    fn insecure_get_is_redirected() {
        let gate = HttpsGate::new();
        let request = RequestDescriptor::new("http", "GET", "localhost1")
            .with_path_base("/pathbase")
            .with_path("/path")
            .with_query("?foo=bar");

        assert_eq!(
            gate.decide(&request),
            Decision::redirect_permanently("https://localhost1/pathbase/path?foo=bar")
        );
    }

    #[test]
    fn lowercase_get_is_redirected() {
        let gate = HttpsGate::new();
        let request = RequestDescriptor::new("http", "get", "example.com");
        assert_eq!(
            gate.decide(&request),
            Decision::redirect_permanently("https://example.com")
        );
    }

    #[test]
    fn insecure_unsafe_methods_are_forbidden() {
        let gate = HttpsGate::new();
        for method in ["POST", "PUT", "PATCH", "DELETE", "HEAD", ""] {
            let request = RequestDescriptor::new("http", method, "localhost1");
            assert_eq!(gate.decide(&request), Decision::forbidden(), "{method:?}");
        }
    }

    #[test]
    fn handler_result_is_returned_verbatim() {
        let gate = HttpsGate::with_handler(|_: &RequestDescriptor| {
            Decision::redirect_permanently("https://elsewhere.test/")
        });
        let request = RequestDescriptor::new("http", "POST", "example.com");
        assert_eq!(
            gate.decide(&request),
            Decision::redirect_permanently("https://elsewhere.test/")
        );
    }

    #[test]
    fn handler_only_runs_for_unsafe_insecure_requests() {
        let calls = Cell::new(0);
        let gate = HttpsGate::with_handler(|_: &RequestDescriptor| {
            calls.set(calls.get() + 1);
            Decision::reject(StatusCode::NOT_FOUND)
        });

        gate.decide(&RequestDescriptor::new("https", "POST", "example.com"));
        gate.decide(&RequestDescriptor::new("http", "POST", "localhost"));
        gate.decide(&RequestDescriptor::new("http", "GET", "example.com"));
        assert_eq!(calls.get(), 0);

        gate.decide(&RequestDescriptor::new("http", "POST", "example.com"));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn builder_swaps_handler() {
        let gate = HttpsGate::new().handler(RejectWith(StatusCode::NOT_FOUND));
        let request = RequestDescriptor::new("http", "", "testhost");
        assert_eq!(gate.decide(&request), Decision::reject(StatusCode::NOT_FOUND));
    }

    #[test]
    #[should_panic(expected = "handler failure")]
    fn handler_panics_propagate() {
        let gate = HttpsGate::with_handler(|_: &RequestDescriptor| -> Decision {
            panic!("handler failure")
        });
        gate.decide(&RequestDescriptor::new("http", "POST", "example.com"));
    }

    #[test]
    fn gate_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpsGate>();
        assert_send_sync::<HttpsGate<RejectWith>>();
    }
}
