//! Input validators
//!
//! Validators for the values an operator types into the console: domains,
//! emails, URLs, versions and file paths. Every validator is a total
//! function from `&str` to `bool`. Patterns are compiled once; a pattern that
//! fails to compile makes its validator reject everything instead of
//! panicking.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use tracing::warn;

const MAX_DOMAIN_LENGTH: usize = 255;
const MAX_LABEL_LENGTH: usize = 63;

static DOMAIN_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Label length and `*` placement are checked separately
    compile(r"(?i)^[a-z0-9\x{00a1}-\x{10ffff}*-]*(?:\.[a-z0-9\x{00a1}-\x{10ffff}*-]*)*$")
});

static EMAIL_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| compile(r"(?i)^[a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,63}$"));

static URL_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    compile(concat!(
        r"(?i)^(?:https?://)?",
        r"(?:(?:[a-z0-9](?:[a-z0-9-]*[a-z0-9])*\.)+[a-z]{2,}|localhost|(?:[0-9]{1,3}\.){3}[0-9]{1,3})",
        r"(?::[0-9]+)?(?:/[-a-z0-9%_.~+]*)*",
        r"(?:\?[;&a-z0-9%_.~+=-]*)?",
        r"(?:#[-a-z0-9_]*)?$",
    ))
});

static VERSION_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    compile(concat!(
        r"^[0-9]+(?:\.[0-9]+)?(?:\.[0-9]+)?",
        r"(?:-[0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*)?",
        r"(?:\+[0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*)?$",
    ))
});

static UNIX_PATH_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| compile(r"^/(?:[^/]+/)*[^/]+$"));

static WINDOWS_PATH_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    compile(r#"^[a-zA-Z]:\\(?:[^\\/:*?"<>|\r\n]+\\)*[^\\/:*?"<>|\r\n]*$"#)
});

fn compile(pattern: &str) -> Option<Regex> {
    match Regex::new(pattern) {
        Ok(regex) => Some(regex),
        Err(err) => {
            warn!(%err, pattern, "validation pattern failed to compile");
            None
        }
    }
}

fn matches(pattern: &LazyLock<Option<Regex>>, input: &str) -> bool {
    match &**pattern {
        Some(regex) => regex.is_match(input),
        None => false,
    }
}

/// Options accepted by `is_valid_domain`
///
/// Both flags default to `true`, matching the console's DNS and route forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomainOptions {
    /// Accept a leading `*.` wildcard label
    pub allow_wildcard: bool,
    /// When `false`, a domain starting with `.` is rejected
    pub allow_only_tld: bool,
}

impl Default for DomainOptions {
    fn default() -> Self {
        Self {
            allow_wildcard: true,
            allow_only_tld: true,
        }
    }
}

/// Validates a (possibly internationalised) domain name
///
/// The domain must be 1 to 255 UTF-16 units long, contain at least one dot
/// and no whitespace. Each label is at most 63 UTF-16 units and may use ASCII
/// letters and digits, any character from U+00A1 upwards, and hyphens that
/// are neither leading nor trailing. A `*` is only accepted as a leading `*.`
/// label, and only when `options.allow_wildcard` is set.
///
/// # Arguments
/// - `domain` - The candidate domain
/// - `options` - Wildcard and leading-dot handling
///
/// # Returns
/// `true` if the domain is acceptable
pub fn is_valid_domain(domain: &str, options: DomainOptions) -> bool {
    let length = domain.encode_utf16().count();
    if length < 1 || length > MAX_DOMAIN_LENGTH {
        return false;
    }

    let is_wildcard = domain.starts_with("*.");
    if is_wildcard && !options.allow_wildcard {
        return false;
    }
    let rest = if is_wildcard { &domain[2..] } else { domain };
    if rest.contains('*') {
        return false;
    }

    if !options.allow_only_tld && domain.starts_with('.') {
        return false;
    }

    if !domain.contains('.') || domain.chars().any(char::is_whitespace) {
        return false;
    }

    let labels_ok = domain.split('.').all(|label| {
        label.encode_utf16().count() <= MAX_LABEL_LENGTH
            && !label.starts_with('-')
            && !label.ends_with('-')
    });

    labels_ok && matches(&DOMAIN_PATTERN, domain)
}

/// Validates an email address of the form `local@domain.tld`
pub fn is_valid_email(email: &str) -> bool {
    matches(&EMAIL_PATTERN, email)
}

/// Validates an HTTP(S) URL, bare hostname, `localhost` or IPv4 address
///
/// The scheme is optional. A port, path, query string and fragment may follow
/// the host. Matching is case-insensitive.
pub fn is_valid_url(url: &str) -> bool {
    matches(&URL_PATTERN, url)
}

/// Validates a semantic version such as `1`, `1.2`, `1.2.3-beta.1+build5`
pub fn is_valid_version(version: &str) -> bool {
    matches(&VERSION_PATTERN, version)
}

/// Validates an absolute Unix file path
///
/// Requires a leading `/`, non-empty segments and no trailing `/`.
pub fn is_valid_unix_file_path(path: &str) -> bool {
    !path.ends_with('/') && matches(&UNIX_PATH_PATTERN, path)
}

/// Validates an absolute Windows file path like `C:\Program Files\app.exe`
///
/// Segments may not contain `\ / : * ? " < > |`, carriage returns or line
/// feeds, and the path may not end with a backslash.
pub fn is_valid_windows_file_path(path: &str) -> bool {
    !path.ends_with('\\') && matches(&WINDOWS_PATH_PATTERN, path)
}

/// Checks whether a number has no fractional part
///
/// Infinities and NaN are rejected since their remainder is NaN.
pub fn is_int(n: f64) -> bool {
    n % 1.0 == 0.0
}
