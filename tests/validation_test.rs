//! Integration tests for the input validators
//!
//! These tests exercise the validators through the public API with the
//! kinds of values operators paste into DNS, route and posture-check forms.

use netconsole::utils::validation::{
    is_int, is_valid_domain, is_valid_email, is_valid_unix_file_path, is_valid_url,
    is_valid_version, is_valid_windows_file_path,
};
use netconsole::DomainOptions;
use proptest::prelude::*;

#[test]
fn test_domain_wildcard_matrix() {
    let allow = DomainOptions::default();
    let deny = DomainOptions {
        allow_wildcard: false,
        ..DomainOptions::default()
    };

    let cases = vec![
        ("*.example.com", allow, true),
        ("*.example.com", deny, false),
        ("a*b.com", allow, false),
        ("example.com", deny, true),
        ("*.*.example.com", allow, false),
    ];

    for (domain, options, expected) in cases {
        assert_eq!(
            is_valid_domain(domain, options),
            expected,
            "domain {} with {:?}",
            domain,
            options
        );
    }
}

#[test]
fn test_validators_never_panic_on_odd_input() {
    let inputs = vec![
        "",
        "\0",
        "\u{10ffff}",
        "🚀.🚀",
        "C:",
        "/",
        "\\\\server\\share",
        "http://",
        "..",
    ];

    for input in inputs {
        let _ = is_valid_domain(input, DomainOptions::default());
        let _ = is_valid_email(input);
        let _ = is_valid_url(input);
        let _ = is_valid_version(input);
        let _ = is_valid_unix_file_path(input);
        let _ = is_valid_windows_file_path(input);
    }
}

#[test]
fn test_posture_check_paths() {
    let unix = vec!["/usr/local/bin/netbird", "/opt/app/run.sh"];
    for path in unix {
        assert!(is_valid_unix_file_path(path), "{}", path);
        assert!(!is_valid_windows_file_path(path), "{}", path);
    }

    let windows = vec!["C:\\Program Files\\NetBird\\netbird.exe", "d:\\tools"];
    for path in windows {
        assert!(is_valid_windows_file_path(path), "{}", path);
        assert!(!is_valid_unix_file_path(path), "{}", path);
    }
}

#[test]
fn test_domain_labels_measured_in_utf16_units() {
    // Astral characters take two UTF-16 units each
    let at_limit = format!("{}.com", "🚀".repeat(31));
    let over_limit = format!("{}.com", "🚀".repeat(32));

    assert!(is_valid_domain(&at_limit, DomainOptions::default()));
    assert!(!is_valid_domain(&over_limit, DomainOptions::default()));
}

#[test]
fn test_management_urls() {
    assert!(is_valid_url("https://api.netbird.io:443"));
    assert!(is_valid_url("https://netbird.selfhosted.example/api/peers?limit=10"));
    assert!(is_valid_url("http://192.168.1.10:33073"));
    assert!(!is_valid_url("https://api.netbird.io:port"));
}

proptest! {
    #[test]
    fn prop_domain_without_dot_is_invalid(domain in "[^.]{0,40}") {
        let strict = DomainOptions {
            allow_wildcard: false,
            allow_only_tld: false,
        };
        prop_assert!(!is_valid_domain(&domain, DomainOptions::default()));
        prop_assert!(!is_valid_domain(&domain, strict));
    }

    #[test]
    fn prop_unix_paths_with_trailing_slash_are_invalid(path in "/[a-z0-9/]{0,30}/") {
        prop_assert!(!is_valid_unix_file_path(&path));
    }

    #[test]
    fn prop_whole_numbers_are_ints(n in -1_000_000i64..1_000_000i64) {
        prop_assert!(is_int(n as f64));
        prop_assert!(!is_int(n as f64 + 0.5));
    }

    #[test]
    fn prop_semver_triples_are_valid(major in 0u32..1000, minor in 0u32..1000, patch in 0u32..1000) {
        let version = format!("{}.{}.{}", major, minor, patch);
        prop_assert!(is_valid_version(&version));
    }
}
