//! JSON(P) body handling
//!
//! The pingback endpoints historically answer callback-wrapped JSON so a
//! page could load them cross-origin via script injection: the body looks
//! like `callback([...]);`. Plain JSON passes through untouched, so the same
//! code path serves CORS-enabled deployments.

/// Strip a JSONP callback wrapper from a response body, if one is present.
///
/// Returns the inner JSON for `ident( ... )` and `ident( ... );` bodies and
/// the input unchanged otherwise. Anything that does not look like an
/// identifier-shaped callback invocation is treated as plain JSON.
pub(crate) fn strip_callback(body: &str) -> &str {
    let trimmed = body.trim();
    let Some(open) = trimmed.find('(') else {
        return body;
    };
    let name = &trimmed[..open];
    if name.is_empty() || !name.chars().all(is_callback_char) {
        return body;
    }
    let rest = trimmed[open + 1..].trim_end();
    let rest = rest.strip_suffix(';').unwrap_or(rest).trim_end();
    match rest.strip_suffix(')') {
        Some(inner) => inner.trim(),
        None => body,
    }
}

// jQuery generates names like jQuery17108254679875029294_1360014685958;
// dotted paths (obj.callback) also occur in the wild.
fn is_callback_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$' || c == '.'
}
