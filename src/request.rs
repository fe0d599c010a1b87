/// Normalized view of an inbound request, as seen by the admission gate.
///
/// The hosting framework builds one of these per request. All fields are
/// owned strings; the gate only ever reads them.
///
/// `path_base` and `path` are stored unencoded. `query` is expected to be
/// percent-encoded already and is passed through untouched.
///
/// # Examples
///
/// ```
/// use require_https::RequestDescriptor;
///
/// let request = RequestDescriptor::new("http", "GET", "example.com:8080")
///     .with_path_base("/app")
///     .with_path("/users")
///     .with_query("?page=2");
///
/// assert_eq!(request.host(), "example.com:8080");
/// assert_eq!(request.query(), "?page=2");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestDescriptor {
    scheme: String,
    method: String,
    host: String,
    path_base: String,
    path: String,
    query: String,
}

impl RequestDescriptor {
    /// Creates a descriptor with an empty path base, path and query.
    pub fn new(
        scheme: impl Into<String>,
        method: impl Into<String>,
        host: impl Into<String>,
    ) -> Self {
        Self {
            scheme: scheme.into(),
            method: method.into(),
            host: host.into(),
            ..Self::default()
        }
    }

    /// Replaces the scheme.
    ///
    /// Servers terminating TLS themselves receive origin-form targets
    /// (`/path`) with no scheme in them; they must set it from the
    /// connection.
    pub fn with_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = scheme.into();
        self
    }

    /// Sets the path base (the prefix the application is mounted under).
    pub fn with_path_base(mut self, path_base: impl Into<String>) -> Self {
        self.path_base = path_base.into();
        self
    }

    /// Sets the request path, relative to the path base.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    /// Sets the query string. A leading `?` is optional.
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Request scheme, e.g. `http` or `https`.
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// HTTP method as supplied by the framework. May be empty.
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Host header value, including the port if one was sent.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Unencoded path base.
    ///
    /// Like [`path`](Self::path), it may still carry `%XX` escapes for
    /// characters that have no unencoded form.
    pub fn path_base(&self) -> &str {
        &self.path_base
    }

    /// Unencoded path.
    ///
    /// Escapes for `/`, `%` and bytes that are not UTF-8 may remain as
    /// `%XX` text; they are preserved when the redirect URL is built.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Already-encoded query string.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Returns `true` if the scheme is `https`, ignoring case.
    pub fn is_https(&self) -> bool {
        self.scheme.eq_ignore_ascii_case("https")
    }

    /// Returns `true` for `GET`, ignoring case.
    ///
    /// GET is the only method the gate treats as safe to redirect.
    pub fn is_safe_method(&self) -> bool {
        self.method.eq_ignore_ascii_case("GET")
    }
}
