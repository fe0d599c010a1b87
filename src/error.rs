use std::fmt;

/// Errors raised while turning a [`Decision`](crate::Decision) into an HTTP response.
///
/// Deciding itself never fails; only the mapping onto `http` types can.
#[derive(Debug)]
pub enum Error {
    /// The redirect URL cannot be carried in a `Location` header
    InvalidLocation {
        /// The rejected URL
        url: String,
    },
    /// The `http` response builder rejected the response
    Response(http::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidLocation { url } => {
                write!(f, "redirect target is not a valid Location header: {:?}", url)
            }
            Error::Response(e) => write!(f, "failed to build response: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::InvalidLocation { .. } => None,
            Error::Response(e) => Some(e),
        }
    }
}

impl From<http::Error> for Error {
    fn from(e: http::Error) -> Self {
        Error::Response(e)
    }
}
