//! HTTPS admission gate with a localhost exemption.
//!
//! Decides, per request, whether a plain-HTTP request may proceed:
//! - **Secure requests** (`https`) are always allowed
//! - **Local requests** (host `localhost`, any port) are allowed regardless of method
//! - **Insecure GETs** are redirected permanently to their `https://` equivalent
//! - **Other insecure requests** go to a pluggable [`NonHttpsHandler`], which
//!   rejects with `403 Forbidden` unless replaced
//!
//! The gate is a pure decision function. Serving the response is left to the
//! hosting framework; the [`web`] module maps `http` types in and out.
//!
//! # Core Types
//!
//! - [`RequestDescriptor`]: Normalized view of the inbound request
//! - [`Decision`]: Allow, redirect, or reject
//! - [`HttpsGate`]: The decision function, configured with a handler
//! - [`NonHttpsHandler`]: Strategy for insecure unsafe-method requests
//!
//! # Examples
//!
//! ```
//! use http::StatusCode;
//! use require_https::{Decision, HttpsGate, RejectWith, RequestDescriptor};
//!
//! let gate = HttpsGate::new();
//!
//! let request = RequestDescriptor::new("http", "GET", "localhost1")
//!     .with_path_base("/path?base");
//! assert_eq!(
//!     gate.decide(&request),
//!     Decision::redirect_permanently("https://localhost1/path%3Fbase")
//! );
//!
//! // Swap the reject behavior
//! let gate = HttpsGate::with_handler(RejectWith(StatusCode::NOT_FOUND));
//! let request = RequestDescriptor::new("http", "POST", "localhost1");
//! assert_eq!(gate.decide(&request), Decision::reject(StatusCode::NOT_FOUND));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod decision;
mod error;
mod gate;
mod handler;
mod host;
mod logging;
mod request;
mod url;

pub mod web;

pub use decision::Decision;
pub use error::Error;
pub use gate::HttpsGate;
pub use handler::{Forbid, NonHttpsHandler, RejectWith};
pub use host::{is_local_host, split_host_port};
pub use request::RequestDescriptor;
pub use url::{build_https_url, encode_path};
