//! Host header inspection.

/// The only host name exempt from HTTPS enforcement.
const LOCALHOST: &str = "localhost";

/// Splits a host header value into its name and optional port.
///
/// Splits on the last `:` only. Nothing is validated, so an IPv6 literal
/// such as `[::1]:80` yields `("[::1]", Some("80"))` and `::1` yields
/// `(":", Some("1"))`. Neither of those ever compares equal to `localhost`.
///
/// # Examples
///
/// ```
/// use require_https::split_host_port;
///
/// assert_eq!(split_host_port("localhost:5000"), ("localhost", Some("5000")));
/// assert_eq!(split_host_port("example.com"), ("example.com", None));
/// ```
pub fn split_host_port(host: &str) -> (&str, Option<&str>) {
    match host.rsplit_once(':') {
        Some((name, port)) => (name, Some(port)),
        None => (host, None),
    }
}

/// Returns `true` if the host header names the local machine.
///
/// Only the bare name `localhost` counts, compared ASCII case-insensitively
/// with any port ignored. Subdomains, look-alikes (`localhost1`,
/// `localhost.test.com`) and loopback IP literals are not local.
///
/// # Examples
///
/// ```
/// use require_https::is_local_host;
///
/// assert!(is_local_host("LOCALHOST"));
/// assert!(is_local_host("localhost:5000"));
/// assert!(!is_local_host("localhost.test.com"));
/// assert!(!is_local_host("127.0.0.1"));
/// ```
pub fn is_local_host(host: &str) -> bool {
    let (name, _port) = split_host_port(host);
    name.eq_ignore_ascii_case(LOCALHOST)
}
