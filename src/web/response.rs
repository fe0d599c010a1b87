//! Mapping a [`Decision`] onto an `http` response.

use http::{header, HeaderValue, Response, StatusCode};

use crate::decision::Decision;
use crate::error::Error;

impl Decision {
    /// Builds the response the framework should send, if any.
    ///
    /// - `Allow` yields `None`: continue to the protected handler.
    /// - A redirect yields `301 Moved Permanently` with a `Location` header.
    /// - A reject yields its status with an empty body.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLocation`] if the redirect URL contains bytes
    /// a header value cannot carry (for example a control character taken
    /// from the request's host).
    ///
    /// # Examples
    ///
    /// ```
    /// use http::{header, StatusCode};
    /// use require_https::Decision;
    ///
    /// let response = Decision::redirect_permanently("https://example.com/")
    ///     .to_response()
    ///     .unwrap()
    ///     .expect("redirects produce a response");
    ///
    /// assert_eq!(response.status(), StatusCode::MOVED_PERMANENTLY);
    /// assert_eq!(response.headers()[header::LOCATION], "https://example.com/");
    /// ```
    pub fn to_response(&self) -> Result<Option<Response<()>>, Error> {
        match self {
            Decision::Allow => Ok(None),
            Decision::RedirectPermanently { url } => {
                let location = HeaderValue::from_str(url)
                    .map_err(|_| Error::InvalidLocation { url: url.clone() })?;
                let response = Response::builder()
                    .status(StatusCode::MOVED_PERMANENTLY)
                    .header(header::LOCATION, location)
                    .body(())?;
                Ok(Some(response))
            }
            Decision::Reject { status } => {
                let response = Response::builder().status(*status).body(())?;
                Ok(Some(response))
            }
        }
    }
}
