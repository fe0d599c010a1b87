//! Property tests for the admission gate.
//!
//! These check the gate's invariants across arbitrary hosts, methods and
//! paths rather than the fixed scenario tables.

use http::StatusCode;
use proptest::prelude::*;
use require_https::{
    build_https_url, is_local_host, Decision, HttpsGate, RejectWith, RequestDescriptor,
};

// Strategy: any casing of "localhost", optionally with a port
fn arb_localhost() -> impl Strategy<Value = String> {
    (
        prop::collection::vec(any::<bool>(), 9),
        prop::option::of(any::<u16>()),
    )
        .prop_map(|(upper, port)| {
            let name: String = "localhost"
                .chars()
                .zip(upper)
                .map(|(c, up)| if up { c.to_ascii_uppercase() } else { c })
                .collect();
            match port {
                Some(port) => format!("{}:{}", name, port),
                None => name,
            }
        })
}

// Strategy: host names that are never "localhost"
fn arb_remote_host() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z0-9-]{1,12}(\\.[a-z]{2,6}){0,2}(:[0-9]{1,5})?")
        .unwrap()
        .prop_filter("must not be localhost", |h| !is_local_host(h))
}

fn arb_unsafe_method() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("POST"), Just("PUT"), Just("PATCH"), Just("DELETE"), Just("")]
}

fn arb_any_method() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("GET"), Just("get"), arb_unsafe_method()]
}

fn arb_path() -> impl Strategy<Value = String> {
    prop::string::string_regex("(/[a-zA-Z0-9 ?#%._-]{0,8}){0,3}").unwrap()
}

proptest! {
    /// Property: secure requests are allowed whatever else they carry
    #[test]
    fn proptest_https_always_allowed(
        host in ".{0,20}",
        method in arb_any_method(),
        path in arb_path(),
    ) {
        let gate = HttpsGate::new();
        let request = RequestDescriptor::new("https", method, host).with_path(path);

        prop_assert_eq!(gate.decide(&request), Decision::Allow);
    }

    /// Property: localhost over plain HTTP is allowed for every method
    #[test]
    fn proptest_localhost_always_allowed(
        host in arb_localhost(),
        method in arb_any_method(),
        path in arb_path(),
    ) {
        let gate = HttpsGate::new();
        let request = RequestDescriptor::new("http", method, host).with_path(path);

        prop_assert_eq!(gate.decide(&request), Decision::Allow);
    }

    /// Property: remote GETs redirect to an https URL on the same host
    #[test]
    fn proptest_remote_get_redirects(
        host in arb_remote_host(),
        path_base in arb_path(),
        path in arb_path(),
        query in prop::string::string_regex("(\\?[a-z0-9=&%]{1,10})?").unwrap(),
    ) {
        let gate = HttpsGate::new();
        let request = RequestDescriptor::new("http", "GET", host.clone())
            .with_path_base(path_base.clone())
            .with_path(path.clone())
            .with_query(query.clone());

        let decision = gate.decide(&request);
        let expected = build_https_url(&host, &path_base, &path, &query);
        prop_assert_eq!(&decision, &Decision::redirect_permanently(expected.clone()));

        let prefix = format!("https://{}", host);
        prop_assert!(expected.starts_with(&prefix));
        prop_assert!(expected.ends_with(&query));

        // Escaped path characters never leak into the query or fragment.
        let path_part = &expected[prefix.len()..expected.len() - query.len()];
        prop_assert!(!path_part.contains('?'));
        prop_assert!(!path_part.contains('#'));
    }

    /// Property: remote unsafe requests are forbidden by default
    #[test]
    fn proptest_remote_unsafe_forbidden(
        host in arb_remote_host(),
        method in arb_unsafe_method(),
    ) {
        let gate = HttpsGate::new();
        let request = RequestDescriptor::new("http", method, host);

        prop_assert_eq!(gate.decide(&request), Decision::reject(StatusCode::FORBIDDEN));
    }

    /// Property: a replaced handler only changes the reject outcome
    #[test]
    fn proptest_handler_only_affects_unsafe_remote(
        host in prop_oneof![arb_localhost(), arb_remote_host()],
        scheme in prop_oneof![Just("http"), Just("https")],
        method in arb_any_method(),
    ) {
        let default_gate = HttpsGate::new();
        let custom_gate = HttpsGate::with_handler(RejectWith(StatusCode::NOT_FOUND));
        let request = RequestDescriptor::new(scheme, method, host);

        let default_decision = default_gate.decide(&request);
        let custom_decision = custom_gate.decide(&request);

        if default_decision == Decision::forbidden() {
            prop_assert_eq!(custom_decision, Decision::reject(StatusCode::NOT_FOUND));
        } else {
            prop_assert_eq!(custom_decision, default_decision);
        }
    }

    /// Property: the host predicate never panics
    #[test]
    fn proptest_is_local_host_total(host in ".*") {
        let _ = is_local_host(&host);
    }
}
