//! Track-name sanitization.
//!
//! Generated names end up as filesystem paths and as arguments to
//! shell-invoked synthesis backends, so the characters those contexts
//! reserve are replaced before any exporter sees a name.

/// Characters rejected by at least one target filesystem.
const FORBIDDEN: [char; 9] = ['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Replace reserved characters with commas.
///
/// On non-Windows targets parentheses are replaced too: they are meaningful
/// to the shell that invokes the synthesis backend there. Applying the
/// function twice changes nothing, because the replacement character is
/// never itself reserved.
#[must_use]
pub fn sanitize(raw: &str) -> String {
    raw.chars()
        .map(|c| {
            if FORBIDDEN.contains(&c) || (cfg!(not(windows)) && matches!(c, '(' | ')')) {
                ','
            } else {
                c
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "tests/sanitize.rs"]
mod tests;
