//! Response cleanup for model completions.
//!
//! Models often wrap their answer in a markdown code block even when told not
//! to. Stripping is anchored to the start and end of the trimmed response so a
//! fence sequence inside a string literal survives untouched.

use regex::Regex;
use std::sync::OnceLock;

/// Closing fence marker.
const FENCE: &str = "```";

/// Matches an opening fence and its optional language tag.
///
/// `sql` is recognised even when code follows on the same line; any other tag
/// only counts when it ends the line, so "```SELECT 1```" keeps its SELECT.
fn opening_fence() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^```(?:[ \t]*(?i:sql)\b|[A-Za-z0-9_+.-]*[ \t]*(?:\r?\n|$))?")
            .expect("opening fence pattern is valid")
    })
}

/// Removes leading/trailing markdown code fences and surrounding whitespace.
///
/// Repeats until nothing changes, so `strip_code_fences(strip_code_fences(x))`
/// always equals `strip_code_fences(x)` and no fence remains at either end.
pub fn strip_code_fences(response: &str) -> String {
    let mut current = response.trim();

    loop {
        let mut next = current;

        if let Some(m) = opening_fence().find(next) {
            next = next[m.end()..].trim();
        }
        if let Some(rest) = next.strip_suffix(FENCE) {
            next = rest.trim();
        }

        if next.len() == current.len() {
            return next.to_string();
        }
        current = next;
    }
}

/// Returns true if the text still starts or ends with a fence marker.
pub fn has_edge_fence(text: &str) -> bool {
    let trimmed = text.trim();
    trimmed.starts_with(FENCE) || trimmed.ends_with(FENCE)
}
