use std::sync::LazyLock;

use regex::Regex;

/// The 17 top-level administrative regions recognized in location text.
pub const PROVINCES: &[&str] = &[
    "서울", "부산", "대구", "인천", "광주", "대전", "울산", "세종", "경기", "강원", "충북",
    "충남", "전북", "전남", "경북", "경남", "제주",
];

/// Direct-governed cities where the district name alone identifies the area.
const METRO_PROVINCES: &[&str] = &["서울", "부산", "대구", "인천", "광주", "대전", "울산"];

static CITY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"({})\s*([가-힣]+시|[가-힣]+구|[가-힣]+군)",
        PROVINCES.join("|")
    ))
    .unwrap()
});

static WS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Reduce free-form region text to "province district" or a bare district
/// token. Without a pattern match, falls back to the first word of the text.
pub fn format_location(text: &str) -> String {
    let cleaned = text.replace('\n', " ");
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return String::new();
    }

    if let Some(caps) = CITY_RE.captures(cleaned) {
        return render(&caps[1], &caps[2]);
    }

    cleaned.split_whitespace().next().unwrap_or("").to_string()
}

/// Recover a region embedded in another field's text. Returns the resolved
/// location and the text with every region token removed and whitespace
/// collapsed; `("", original)` when no region is present.
pub fn extract_location_from_text(text: &str) -> (String, String) {
    if text.trim().is_empty() {
        return (String::new(), text.to_string());
    }

    let Some(caps) = CITY_RE.captures(text) else {
        return (String::new(), text.to_string());
    };
    let location = render(&caps[1], &caps[2]);

    let remainder = CITY_RE.replace_all(text, "");
    let remainder = WS_RE.replace_all(remainder.trim(), " ").into_owned();
    (location, remainder)
}

fn render(province: &str, district: &str) -> String {
    // Inside a metro city the district is unambiguous on its own; a 시-level
    // token still needs the metro prefix. Ordinary provinces keep the token.
    if METRO_PROVINCES.contains(&province) && !district.contains('구') {
        format!("{} {}", province, district)
    } else {
        district.to_string()
    }
}
