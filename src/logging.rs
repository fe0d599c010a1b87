//! Structured `tracing` events for gate decisions.
//!
//! One event per evaluated request. The crate never installs a subscriber;
//! the embedding application decides where events go.

use crate::decision::Decision;
use crate::request::RequestDescriptor;

/// Why a request was allowed through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AllowReason {
    /// Already on HTTPS
    Secure,
    /// Addressed to `localhost`
    Local,
}

impl AllowReason {
    fn as_str(self) -> &'static str {
        match self {
            AllowReason::Secure => "secure",
            AllowReason::Local => "local",
        }
    }
}

/// Emits the event for an allowed request at debug level.
pub(crate) fn record_allow(request: &RequestDescriptor, reason: AllowReason) {
    tracing::debug!(
        method = %request.method(),
        host = %request.host(),
        decision = Decision::Allow.kind_str(),
        reason = reason.as_str(),
        "request allowed"
    );
}

/// Emits the event for a redirect or handler-produced decision.
///
/// Redirects log at info, rejects at warn. A handler that chose to allow
/// is logged at debug like any other allowed request.
pub(crate) fn record_decision(request: &RequestDescriptor, decision: &Decision) {
    let kind = decision.kind_str();
    match decision {
        Decision::Allow => tracing::debug!(
            method = %request.method(),
            host = %request.host(),
            decision = kind,
            reason = "handler",
            "request allowed"
        ),
        Decision::RedirectPermanently { url } => tracing::info!(
            method = %request.method(),
            host = %request.host(),
            decision = kind,
            location = %url,
            "redirecting insecure request to https"
        ),
        Decision::Reject { status } => tracing::warn!(
            method = %request.method(),
            host = %request.host(),
            decision = kind,
            status = status.as_u16(),
            "rejecting insecure request"
        ),
    }
}
