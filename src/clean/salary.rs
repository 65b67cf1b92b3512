use std::sync::LazyLock;

use regex::Regex;

/// Ordered salary patterns: explicit amounts first, then ranges, then the
/// closed set of negotiation phrases.
static PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"\d+,?\d*만원",
        r"\d+,?\d*원",
        r"연봉\s*\d+,?\d*만원",
        r"월급\s*\d+,?\d*만원",
        r"시급\s*\d+,?\d*원",
        r"\d+~\d+만원",
        r"\d+~\d+원",
        r"면접후\s*결정",
        r"협의",
        r"회사내규",
        r"급여협의",
        r"면접시\s*협의",
        r"경력에\s*따라\s*협의",
        r"능력에\s*따라",
        r"상담후\s*결정",
        r"별도협의",
        r"추후협의",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

static AMOUNT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+[,\d]*\s*만?원").unwrap());

/// Keywords that justify keeping otherwise-unparseable text as a last resort.
const KEYWORDS: &[&str] = &["급여", "연봉", "월급", "시급", "임금", "보수"];

/// Reduce free salary text to an amount token or a negotiation phrase.
/// When nothing parses but the text is clearly salary-related, the trimmed
/// original is kept; anything else is discarded.
pub fn clean_salary(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    if let Some(m) = PATTERNS.iter().find_map(|re| re.find(text)) {
        return m.as_str().to_string();
    }

    if text.contains("만원") || text.contains('원') {
        if let Some(m) = AMOUNT_RE.find(text) {
            return m.as_str().to_string();
        }
    }

    if KEYWORDS.iter().any(|k| text.contains(k)) {
        return trimmed.to_string();
    }

    String::new()
}
