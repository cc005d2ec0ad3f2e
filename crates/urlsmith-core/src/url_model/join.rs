//! URL recomposition from components, with the query sanity rule.

use super::scheme;
use super::UrlComponents;

/// Reassembles a URL from `components`.
///
/// The query is kept only when it is non-empty and contains `=`; anything
/// else is dropped rather than emitted as a dangling `?`. Non-empty params
/// are re-attached to the path with `;`. Joining never fails: the output is
/// plain concatenation of whatever the components hold, with no escaping.
pub fn recompose(components: &UrlComponents) -> String {
    let query = sanitized_query(&components.query);

    let mut url = components.path.clone();
    if !components.params.is_empty() {
        url.push(';');
        url.push_str(&components.params);
    }

    if !components.netloc.is_empty() {
        if !url.is_empty() && !url.starts_with('/') {
            url.insert(0, '/');
        }
        url = format!("//{}{}", components.netloc, url);
    } else if url.starts_with("//") {
        // A path beginning with `//` would otherwise read back as a netloc.
        url = format!("//{url}");
    } else if !components.scheme.is_empty()
        && scheme::uses_netloc(&components.scheme)
        && (url.is_empty() || url.starts_with('/'))
    {
        url = format!("//{url}");
    }

    if !components.scheme.is_empty() {
        url = format!("{}:{}", components.scheme, url);
    }
    if !query.is_empty() {
        url.push('?');
        url.push_str(query);
    }
    if !components.fragment.is_empty() {
        url.push('#');
        url.push_str(&components.fragment);
    }
    url
}

/// Applies the query sanity rule: keep only a non-empty query containing `=`.
fn sanitized_query(query: &str) -> &str {
    if !query.is_empty() && query.contains('=') {
        query
    } else {
        ""
    }
}
