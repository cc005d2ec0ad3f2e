//! URL decomposition along the generic `scheme://netloc/path;params?query#fragment` grammar.

use thiserror::Error;

use super::scheme;
use super::UrlComponents;

/// Failure while decomposing a URL. Mismatched IPv6 brackets are the only
/// input this parser rejects; everything else degrades to path-only output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecomposeError {
    /// The netloc contains `[` without `]`, or `]` without `[`.
    #[error("invalid IPv6 URL")]
    InvalidIpv6,
}

/// Splits `url` into its six components.
///
/// Absent parts come back as empty strings, and input with no recognizable
/// structure lands wholesale in `path`. The scheme is lowercased; everything
/// else is preserved byte for byte after control-character stripping. The
/// netloc is only recognized after `//`, the fragment is split before the
/// query, and `;params` are split off the last path segment for schemes that
/// use them.
pub fn decompose(url: &str) -> Result<UrlComponents, DecomposeError> {
    let mut rest = sanitize(url);
    let mut components = UrlComponents::default();

    if let Some(i) = rest.find(':') {
        if i > 0 && is_scheme_prefix(&rest[..i]) {
            components.scheme = rest[..i].to_ascii_lowercase();
            rest.drain(..=i);
        }
    }

    if rest.starts_with("//") {
        let (netloc, tail) = split_authority(&rest);
        if mismatched_ipv6_brackets(netloc) {
            return Err(DecomposeError::InvalidIpv6);
        }
        components.netloc = netloc.to_string();
        rest = tail.to_string();
    }

    if let Some(i) = rest.find('#') {
        components.fragment = rest.split_off(i + 1);
        rest.truncate(i);
    }

    if let Some(i) = rest.find('?') {
        components.query = rest.split_off(i + 1);
        rest.truncate(i);
    }

    if scheme::uses_params(&components.scheme) && rest.contains(';') {
        if let Some(i) = params_split_index(&rest) {
            components.params = rest.split_off(i + 1);
            rest.truncate(i);
        }
    }

    components.path = rest;
    Ok(components)
}

/// Strips leading C0 controls and spaces, and removes tab, CR and LF anywhere.
fn sanitize(url: &str) -> String {
    url.trim_start_matches(|ch: char| ch <= '\u{20}')
        .chars()
        .filter(|ch| !matches!(ch, '\t' | '\n' | '\r'))
        .collect()
}

/// A scheme prefix starts with an ASCII letter and continues with letters,
/// digits, `+`, `-`, or `.`.
fn is_scheme_prefix(prefix: &str) -> bool {
    let mut chars = prefix.chars();
    chars.next().is_some_and(|first| first.is_ascii_alphabetic())
        && chars.all(scheme::is_scheme_char)
}

/// Splits `//netloc<rest>` at the first of `/`, `?`, or `#` after the slashes.
fn split_authority(url: &str) -> (&str, &str) {
    let end = url[2..]
        .find(['/', '?', '#'])
        .map(|i| i + 2)
        .unwrap_or(url.len());
    (&url[2..end], &url[end..])
}

/// True when the netloc has `[` without `]` or `]` without `[`.
fn mismatched_ipv6_brackets(netloc: &str) -> bool {
    netloc.contains('[') != netloc.contains(']')
}

/// Index of the `;` separating params, confined to the last path segment.
fn params_split_index(path: &str) -> Option<usize> {
    match path.rfind('/') {
        Some(slash) => path[slash..].find(';').map(|i| slash + i),
        None => path.find(';'),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decompose_full_url() {
        let c = decompose("https://user@example.com:8080/path;style?a=1&b=2#frag").unwrap();
        assert_eq!(c.scheme, "https");
        assert_eq!(c.netloc, "user@example.com:8080");
        assert_eq!(c.path, "/path");
        assert_eq!(c.params, "style");
        assert_eq!(c.query, "a=1&b=2");
        assert_eq!(c.fragment, "frag");
    }

    #[test]
    fn decompose_degenerate_input_lands_in_path() {
        let c = decompose("not a url").unwrap();
        assert_eq!(c.scheme, "");
        assert_eq!(c.netloc, "");
        assert_eq!(c.path, "not a url");
        assert_eq!(c.params, "");
        assert_eq!(c.query, "");
        assert_eq!(c.fragment, "");
    }

    #[test]
    fn decompose_empty_input() {
        let c = decompose("").unwrap();
        assert_eq!(c, UrlComponents::default());
    }

    #[test]
    fn decompose_lowercases_scheme_only() {
        let c = decompose("HTTPS://Example.COM/Path").unwrap();
        assert_eq!(c.scheme, "https");
        assert_eq!(c.netloc, "Example.COM");
        assert_eq!(c.path, "/Path");
    }

    #[test]
    fn decompose_host_colon_port_reads_as_scheme() {
        // "example.com" is made of valid scheme characters, so the first
        // colon wins. Matches the generic grammar, surprising as it looks.
        let c = decompose("example.com:8080/path").unwrap();
        assert_eq!(c.scheme, "example.com");
        assert_eq!(c.netloc, "");
        assert_eq!(c.path, "8080/path");
    }

    #[test]
    fn decompose_netloc_requires_double_slash() {
        let c = decompose("www.example.com/path").unwrap();
        assert_eq!(c.netloc, "");
        assert_eq!(c.path, "www.example.com/path");

        let c = decompose("//example.com/path").unwrap();
        assert_eq!(c.scheme, "");
        assert_eq!(c.netloc, "example.com");
        assert_eq!(c.path, "/path");
    }

    #[test]
    fn decompose_netloc_stops_at_first_delimiter() {
        let c = decompose("https://example.com?q=1").unwrap();
        assert_eq!(c.netloc, "example.com");
        assert_eq!(c.path, "");
        assert_eq!(c.query, "q=1");

        let c = decompose("https://example.com#top").unwrap();
        assert_eq!(c.netloc, "example.com");
        assert_eq!(c.fragment, "top");
    }

    #[test]
    fn decompose_fragment_splits_before_query() {
        let c = decompose("https://example.com/p?q=1#frag?notquery").unwrap();
        assert_eq!(c.query, "q=1");
        assert_eq!(c.fragment, "frag?notquery");

        let c = decompose("https://example.com/p#f?x=1").unwrap();
        assert_eq!(c.query, "");
        assert_eq!(c.fragment, "f?x=1");
    }

    #[test]
    fn decompose_empty_query_and_fragment_markers() {
        let c = decompose("https://example.com/p?#").unwrap();
        assert_eq!(c.path, "/p");
        assert_eq!(c.query, "");
        assert_eq!(c.fragment, "");
    }

    #[test]
    fn decompose_params_only_in_last_segment() {
        let c = decompose("http://example.com/a;x/b;y").unwrap();
        assert_eq!(c.path, "/a;x/b");
        assert_eq!(c.params, "y");

        let c = decompose("http://example.com/a;x/b").unwrap();
        assert_eq!(c.path, "/a;x/b");
        assert_eq!(c.params, "");
    }

    #[test]
    fn decompose_params_respect_scheme_table() {
        let c = decompose("tel:+1-234;ext=5").unwrap();
        assert_eq!(c.scheme, "tel");
        assert_eq!(c.path, "+1-234");
        assert_eq!(c.params, "ext=5");

        let c = decompose("telnet://host/x;y").unwrap();
        assert_eq!(c.path, "/x;y");
        assert_eq!(c.params, "");
    }

    #[test]
    fn decompose_mailto_keeps_address_in_path() {
        let c = decompose("mailto:user@example.com").unwrap();
        assert_eq!(c.scheme, "mailto");
        assert_eq!(c.netloc, "");
        assert_eq!(c.path, "user@example.com");
    }

    #[test]
    fn decompose_ipv6_netloc() {
        let c = decompose("http://[::1]:8080/p").unwrap();
        assert_eq!(c.netloc, "[::1]:8080");
        assert_eq!(c.path, "/p");
    }

    #[test]
    fn decompose_mismatched_ipv6_brackets_fail() {
        assert_eq!(decompose("http://[::1/p"), Err(DecomposeError::InvalidIpv6));
        assert_eq!(decompose("http://::1]/p"), Err(DecomposeError::InvalidIpv6));
    }

    #[test]
    fn decompose_strips_controls_and_embedded_whitespace() {
        let c = decompose("  \thttps://exa\tmple.com/\npa\rth").unwrap();
        assert_eq!(c.scheme, "https");
        assert_eq!(c.netloc, "example.com");
        assert_eq!(c.path, "/path");
    }

    #[test]
    fn decompose_scheme_requires_leading_alpha() {
        // A lone colon prefix is not a scheme; digits cannot start one.
        let c = decompose(":later").unwrap();
        assert_eq!(c.scheme, "");
        assert_eq!(c.path, ":later");

        let c = decompose("1http://example.com").unwrap();
        assert_eq!(c.scheme, "");
        assert_eq!(c.path, "1http://example.com");
    }
}
