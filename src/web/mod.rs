//! Integration surface for `http`-based frameworks.
//!
//! The gate itself only knows about [`RequestDescriptor`](crate::RequestDescriptor)
//! and [`Decision`](crate::Decision). This module maps in both directions:
//! - `http::Request` / `http::request::Parts` into a descriptor
//! - a decision into an `http::Response<()>` the framework can send
//!
//! # Integration Flow
//!
//! ```text
//! http::Request
//!   ↓ extract_descriptor()
//! RequestDescriptor
//!   ↓ HttpsGate::decide()
//! Decision
//!   ↓ to_response()
//! None (continue) | Some(301 / 403 response)
//! ```
//!
//! [`admit`] runs the whole flow in one call. Servers that terminate TLS
//! themselves use [`admit_with_scheme`] so origin-form requests arriving
//! over HTTPS are recognised as secure.

mod extract;
mod middleware;
mod response;

pub use extract::ExtractDescriptor;
pub use middleware::{admit, admit_with_scheme};
