use std::sync::LazyLock;

use regex::Regex;

static PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"[가-힣]*졸",
        r"학력\s*무관",
        r"대학교\s*졸업",
        r"전문대\s*졸업",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// Reduce free education text to its canonical token ("대졸", "학력 무관", …),
/// or empty when no known pattern is present.
pub fn clean_education(text: &str) -> String {
    if text.trim().is_empty() {
        return String::new();
    }
    PATTERNS
        .iter()
        .find_map(|re| re.find(text))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}
