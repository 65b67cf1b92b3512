use std::sync::LazyLock;

use chrono::{Datelike, Local, NaiveDate};
use regex::Regex;

static DATE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d{1,2})/(\d{1,2})").unwrap());

/// Noise fragments stripped before matching.
const NOISE: &[&str] = &["~", "입사지원", "홈페이지 지원"];

/// Reduce deadline text to "m/d" (no leading zeros), the ongoing marker
/// "상시채용", the until-filled marker "채용시", or empty.
pub fn format_deadline(text: &str) -> String {
    format_deadline_on(text, Local::now().date_naive())
}

fn format_deadline_on(text: &str, today: NaiveDate) -> String {
    if text.trim().is_empty() {
        return String::new();
    }

    let mut cleaned = text.to_string();
    for noise in NOISE {
        cleaned = cleaned.replace(noise, "");
    }
    let cleaned = cleaned.trim();

    if let Some(caps) = DATE_RE.captures(cleaned) {
        // Reparse so "07/15" and the relative branches agree on "7/15".
        let month: u32 = caps[1].parse().unwrap_or_default();
        let day: u32 = caps[2].parse().unwrap_or_default();
        return format!("{}/{}", month, day);
    }

    if cleaned.contains("오늘마감") {
        return format!("{}/{}", today.month(), today.day());
    }
    if cleaned.contains("내일마감") {
        let tomorrow = today.succ_opt().unwrap_or(today);
        return format!("{}/{}", tomorrow.month(), tomorrow.day());
    }
    if cleaned.contains("상시채용") {
        return "상시채용".to_string();
    }
    if cleaned.contains("채용시") {
        return "채용시".to_string();
    }

    String::new()
}
