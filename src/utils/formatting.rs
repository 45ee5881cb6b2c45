//! Display formatting utilities
//!
//! Helpers for presenting console data: stable avatar colors derived from
//! names, whitespace stripping for pasted values, and extracting a process
//! name from an executable path shown in posture checks.

/// Derives a stable `#rrggbb` color from an arbitrary string
///
/// Folds the UTF-16 code units of `input` into a 32-bit signed hash
/// (`hash = unit + hash * 31`, wrapping), then takes the low three bytes of
/// the hash as the red, green and blue channels.
///
/// # Arguments
/// - `input` - Any string, typically a peer, user or group name
///
/// # Returns
/// A `#` followed by six lowercase hex digits. Equal inputs always produce
/// equal colors; distinct inputs may collide.
pub fn generate_color_from_string(input: &str) -> String {
    let hash = input.encode_utf16().fold(0i32, |hash, unit| {
        i32::from(unit).wrapping_add(hash.wrapping_shl(5).wrapping_sub(hash))
    });

    let mut color = String::with_capacity(7);
    color.push('#');
    for i in 0..3 {
        let channel = (hash >> (i * 8)) & 0xff;
        color.push_str(&format!("{:02x}", channel));
    }
    color
}

/// Removes every whitespace character from a string
///
/// Whitespace is the set browsers use for `\s`: Unicode whitespace plus the
/// byte order mark, without NEL (U+0085).
pub fn remove_all_spaces(input: &str) -> String {
    input.chars().filter(|c| !is_space(*c)).collect()
}

fn is_space(c: char) -> bool {
    match c {
        '\u{85}' => false,
        '\u{feff}' => true,
        c => c.is_whitespace(),
    }
}

fn last_segment(path: &str, separator: char) -> Option<&str> {
    if !path.contains(separator) {
        return None;
    }
    path.rsplit(separator).next().filter(|segment| !segment.is_empty())
}

/// Best-effort extraction of a process name from an executable path
///
/// Prefers the last `/`-separated segment, then the last `\`-separated
/// segment. Falls back to the input unchanged when neither yields a
/// non-empty name.
///
/// # Examples
/// ```
/// use netconsole::utils::formatting::try_get_process_name_from_path;
///
/// assert_eq!(try_get_process_name_from_path("/usr/bin/netbird"), "netbird");
/// assert_eq!(try_get_process_name_from_path("C:\\Tools\\agent.exe"), "agent.exe");
/// assert_eq!(try_get_process_name_from_path("agent"), "agent");
/// ```
pub fn try_get_process_name_from_path(path: &str) -> &str {
    last_segment(path, '/')
        .or_else(|| last_segment(path, '\\'))
        .unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_matches_known_values() {
        assert_eq!(generate_color_from_string(""), "#000000");
        assert_eq!(generate_color_from_string("abc"), "#627801");
        assert_eq!(generate_color_from_string("netbird"), "#d6b7d7");
        assert_eq!(generate_color_from_string("peer.add"), "#15520f");
        assert_eq!(generate_color_from_string("Setup Keys"), "#f73916");
    }

    #[test]
    fn test_color_hashes_utf16_units() {
        assert_eq!(generate_color_from_string("münchen"), "#6d2449");
        // Astral characters contribute both surrogate halves
        assert_eq!(generate_color_from_string("🚀"), "#e30d1b");
    }

    #[test]
    fn test_color_is_deterministic() {
        let name = "a fairly long group name that overflows the hash many times over";
        assert_eq!(
            generate_color_from_string(name),
            generate_color_from_string(name)
        );
    }

    #[test]
    fn test_remove_all_spaces() {
        assert_eq!(remove_all_spaces("a b\tc\nd"), "abcd");
        assert_eq!(remove_all_spaces("  100.64.0.1 \r\n"), "100.64.0.1");
        assert_eq!(remove_all_spaces("no\u{00a0}break\u{feff}"), "nobreak");
        assert_eq!(remove_all_spaces(""), "");
    }

    #[test]
    fn test_remove_all_spaces_keeps_next_line() {
        assert_eq!(remove_all_spaces("a\u{85}b"), "a\u{85}b");
        assert_eq!(remove_all_spaces("a\u{2028} \u{85}"), "a\u{85}");
    }

    #[test]
    fn test_process_name_from_unix_path() {
        assert_eq!(try_get_process_name_from_path("/usr/bin/foo"), "foo");
    }

    #[test]
    fn test_process_name_from_windows_path() {
        assert_eq!(
            try_get_process_name_from_path("C:\\Program Files\\foo.exe"),
            "foo.exe"
        );
    }

    #[test]
    fn test_process_name_without_separator() {
        assert_eq!(try_get_process_name_from_path("foo"), "foo");
        assert_eq!(try_get_process_name_from_path(""), "");
    }

    #[test]
    fn test_process_name_prefers_forward_slash() {
        assert_eq!(try_get_process_name_from_path("C:\\dir/sub\\app"), "sub\\app");
    }

    #[test]
    fn test_process_name_trailing_separator_falls_back() {
        assert_eq!(try_get_process_name_from_path("C:\\tools\\bin/"), "bin/");
        assert_eq!(try_get_process_name_from_path("/usr/bin/"), "/usr/bin/");
        assert_eq!(try_get_process_name_from_path("dir\\"), "dir\\");
    }
}
