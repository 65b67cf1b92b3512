use std::sync::LazyLock;

use regex::Regex;

/// Ordered experience patterns; the first match wins, so an explicit
/// "경력 N~M년" range outranks a bare year count.
static PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"경력\s*\d+~?\d*\s*년",
        r"경력\s*무관",
        r"신입",
        r"\d+년\s*이상",
        r"\d+~\d+년",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// Reduce free experience text to its canonical token, or empty when no
/// known pattern is present.
pub fn clean_experience(text: &str) -> String {
    if text.trim().is_empty() {
        return String::new();
    }
    PATTERNS
        .iter()
        .find_map(|re| re.find(text))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}
