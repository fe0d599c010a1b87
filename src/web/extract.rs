//! Mapping `http` request types onto [`RequestDescriptor`].

use http::{header, request::Parts, HeaderMap, Method, Request, Uri};
use percent_encoding::percent_decode_str;

use crate::request::RequestDescriptor;

/// Builds a [`RequestDescriptor`] from a framework request type.
///
/// Implemented for `http::Request<B>` and `http::request::Parts`. Other
/// frameworks can implement it for their own request types.
///
/// Origin-form targets (`/path`), which is what a server normally sees,
/// carry no scheme, so the descriptor falls back to `http`. A server that
/// terminates TLS must supply the connection scheme, either with
/// [`RequestDescriptor::with_scheme`] or through
/// [`admit_with_scheme`](super::admit_with_scheme).
///
/// The `http` types carry no notion of a path base, so the extracted
/// descriptor has an empty one. Applications mounted under a prefix should
/// set it with [`RequestDescriptor::with_path_base`] and strip it from the
/// path.
///
/// # Examples
///
/// ```
/// use http::Request;
/// use require_https::web::ExtractDescriptor;
///
/// let request = Request::get("/docs/a%20b?page=2")
///     .header("host", "example.com:8080")
///     .body(())
///     .unwrap();
///
/// let descriptor = request.extract_descriptor();
/// assert_eq!(descriptor.scheme(), "http");
/// assert_eq!(descriptor.host(), "example.com:8080");
/// assert_eq!(descriptor.path(), "/docs/a b");
/// assert_eq!(descriptor.query(), "?page=2");
/// ```
pub trait ExtractDescriptor {
    /// Extracts the fields the gate needs from the request.
    fn extract_descriptor(&self) -> RequestDescriptor;
}

impl<B> ExtractDescriptor for Request<B> {
    fn extract_descriptor(&self) -> RequestDescriptor {
        descriptor_from(self.method(), self.uri(), self.headers())
    }
}

impl ExtractDescriptor for Parts {
    fn extract_descriptor(&self) -> RequestDescriptor {
        descriptor_from(&self.method, &self.uri, &self.headers)
    }
}

fn descriptor_from(method: &Method, uri: &Uri, headers: &HeaderMap) -> RequestDescriptor {
    // Origin-form targets ("/path") carry no scheme; the caller overrides
    // this when the connection is TLS.
    let scheme = uri.scheme_str().unwrap_or("http");

    let host = headers
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
        .or_else(|| {
            uri.authority().map(|authority| match authority.port() {
                Some(port) => format!("{}:{}", authority.host(), port),
                None => authority.host().to_owned(),
            })
        })
        .unwrap_or_default();

    let path = decode_path(uri.path()).unwrap_or_else(|| uri.path().to_owned());

    let query = uri.query().map(|q| format!("?{}", q)).unwrap_or_default();

    RequestDescriptor::new(scheme, method.as_str(), host)
        .with_path(path)
        .with_query(query)
}

/// Percent-decodes a request path, except for `%2F` and `%25`.
///
/// Those two escapes stand for characters that would change the path's
/// meaning once decoded, so they stay as `%XX` text. Returns `None` when the
/// decoded bytes are not UTF-8; the caller then keeps the raw path.
fn decode_path(raw: &str) -> Option<String> {
    let mut decoded = String::with_capacity(raw.len());
    let mut rest = raw;

    while let Some(index) = find_kept_escape(rest) {
        decoded.push_str(&percent_decode_str(&rest[..index]).decode_utf8().ok()?);
        decoded.push_str(&rest[index..index + 3]);
        rest = &rest[index + 3..];
    }
    decoded.push_str(&percent_decode_str(rest).decode_utf8().ok()?);

    Some(decoded)
}

fn find_kept_escape(path: &str) -> Option<usize> {
    path.match_indices('%').map(|(index, _)| index).find(|&index| {
        path.get(index + 1..index + 3)
            .is_some_and(|hex| hex.eq_ignore_ascii_case("2F") || hex == "25")
    })
}
