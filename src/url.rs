//! Construction of the HTTPS redirect target.

use std::borrow::Cow;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Bytes left as-is in a path: unreserved characters, sub-delims, `:`, `@`
/// and the `/` separator (RFC 3986 `pchar` plus `/`). Everything else,
/// including `?`, `#` and a `%` that does not start an escape, is
/// percent-encoded.
const PATH: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'!')
    .remove(b'$')
    .remove(b'&')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'*')
    .remove(b'+')
    .remove(b',')
    .remove(b';')
    .remove(b'=')
    .remove(b':')
    .remove(b'@')
    .remove(b'/');

/// Percent-encodes a path so it can be placed in a URL.
///
/// Existing `%XX` escapes are kept as they are, so a path that still carries
/// escapes for characters with no unencoded form (`%2F`, `%25`, invalid
/// UTF-8) round-trips unchanged. A `%` not followed by two hex digits is
/// escaped to `%25`. Borrows the input when nothing needs escaping.
///
/// # Examples
///
/// ```
/// use require_https::encode_path;
///
/// assert_eq!(encode_path("/path?base"), "/path%3Fbase");
/// assert_eq!(encode_path("/plain/path"), "/plain/path");
/// assert_eq!(encode_path("/a%2Fb"), "/a%2Fb");
/// ```
pub fn encode_path(path: &str) -> Cow<'_, str> {
    let bytes = path.as_bytes();
    let mut encoded = String::new();
    let mut run_start = 0;
    let mut i = 0;

    while i < bytes.len() {
        if is_escape(&bytes[i..]) {
            encoded.extend(utf8_percent_encode(&path[run_start..i], PATH));
            encoded.push_str(&path[i..i + 3]);
            i += 3;
            run_start = i;
        } else {
            i += 1;
        }
    }

    if run_start == 0 {
        return utf8_percent_encode(path, PATH).into();
    }
    encoded.extend(utf8_percent_encode(&path[run_start..], PATH));
    Cow::Owned(encoded)
}

fn is_escape(bytes: &[u8]) -> bool {
    matches!(bytes, [b'%', hi, lo, ..] if hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit())
}

/// Builds the `https://` URL a non-secure GET is redirected to.
///
/// The host is copied verbatim, port included. `path_base` and `path` are
/// joined with exactly one `/` between them and percent-encoded. `query` is
/// appended untouched because the caller supplies it already encoded; the
/// leading `?` is added if missing.
///
/// # Examples
///
/// ```
/// use require_https::build_https_url;
///
/// assert_eq!(build_https_url("localhost1", "", "", ""), "https://localhost1");
/// assert_eq!(
///     build_https_url("localhost1", "/pathbase", "/path", "?foo=bar"),
///     "https://localhost1/pathbase/path?foo=bar",
/// );
/// assert_eq!(
///     build_https_url("localhost1", "/", "", "?foo=bar%2Fbaz"),
///     "https://localhost1/?foo=bar%2Fbaz",
/// );
/// ```
pub fn build_https_url(host: &str, path_base: &str, path: &str, query: &str) -> String {
    let mut url = String::with_capacity(
        "https://".len() + host.len() + path_base.len() + path.len() + query.len() + 2,
    );
    url.push_str("https://");
    url.push_str(host);
    let authority_end = url.len();

    for segment in [path_base, path] {
        if segment.is_empty() {
            continue;
        }

        let mut segment = segment;
        let after_slash = url.len() > authority_end && url.ends_with('/');
        match (after_slash, segment.starts_with('/')) {
            (true, true) => segment = &segment[1..],
            (false, false) => url.push('/'),
            _ => {}
        }
        url.push_str(&encode_path(segment));
    }

    if !query.is_empty() && query != "?" {
        if !query.starts_with('?') {
            url.push('?');
        }
        url.push_str(query);
    }

    url
}
