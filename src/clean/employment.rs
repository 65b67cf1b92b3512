/// Employment types in priority order; the first one present in the text wins.
const TYPES: &[&str] = &["정규직", "계약직", "파트타임", "인턴", "기간제", "프리랜서"];

/// Reduce free employment-type text to one of the enumerated types, or empty.
pub fn clean_employment_type(text: &str) -> String {
    if text.trim().is_empty() {
        return String::new();
    }
    TYPES
        .iter()
        .find(|t| text.contains(*t))
        .map(|t| t.to_string())
        .unwrap_or_default()
}
