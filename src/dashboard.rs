use std::collections::HashMap;
use std::path::Path;
use std::sync::LazyLock;

use anyhow::Result;
use regex::Regex;

use crate::dataset::{self, JobListing};

/// Bucket value for fields the dataset could not populate.
pub const UNKNOWN: &str = "정보없음";

// Named district sets for the three metros the dashboard breaks out
// individually. Derivation is intentionally independent of the core
// classifiers: these are display buckets, not canonical values.
const SEOUL_DISTRICTS: &[&str] = &[
    "강남구", "서초구", "종로구", "중구", "용산구", "성동구", "광진구", "동대문구", "중랑구",
    "성북구", "강북구", "도봉구", "노원구", "은평구", "서대문구", "마포구", "양천구", "강서구",
    "구로구", "금천구", "영등포구", "동작구", "관악구", "송파구", "강동구",
];
const DAEJEON_DISTRICTS: &[&str] = &["유성구", "서구", "중구", "동구", "대덕구"];
const BUSAN_DISTRICTS: &[&str] = &[
    "해운대구", "부산진구", "동래구", "남구", "북구", "사상구", "사하구", "서구", "영도구",
    "중구", "연제구", "수영구", "금정구", "강서구", "기장군",
];

const REGIONS: &[&str] = &[
    "서울", "경기", "인천", "부산", "대구", "광주", "대전", "울산", "세종", "강원", "충북",
    "충남", "전북", "전남", "경북", "경남", "제주",
];

/// Title keywords tracked by the stats view.
const TITLE_KEYWORDS: &[&str] = &[
    "RPA", "개발자", "UiPath", "UI Path", "Automation", "자동화", "Consultant", "PM", "PL",
    "구축", "운영", "AI", "시스템",
];

static NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").unwrap());

/// One dataset row plus the display-only buckets used for filtering and
/// grouping.
#[derive(Debug, Clone)]
pub struct DashboardRecord {
    pub listing: JobListing,
    pub location_bucket: String,
    pub experience_bucket: String,
    pub employment_bucket: String,
    pub salary_bucket: String,
}

/// Optional bucket filters selected on the command line; `None` means "all".
#[derive(Debug, Default)]
pub struct Filters {
    pub location: Option<String>,
    pub experience: Option<String>,
    pub employment: Option<String>,
}

impl Filters {
    fn matches(&self, record: &DashboardRecord) -> bool {
        self.location
            .as_deref()
            .is_none_or(|want| record.location_bucket == want)
            && self
                .experience
                .as_deref()
                .is_none_or(|want| record.experience_bucket == want)
            && self
                .employment
                .as_deref()
                .is_none_or(|want| record.employment_bucket == want)
    }
}

/// Headline numbers shown at the top of the stats view.
pub struct Metrics {
    pub total: usize,
    pub companies: usize,
    pub full_time: usize,
    pub seoul: usize,
}

/// Load the persisted dataset and derive the dashboard buckets. Rows with
/// empty titles are dropped.
pub fn load(path: &Path) -> Result<Vec<DashboardRecord>> {
    let jobs = dataset::load_csv(path)?;
    Ok(jobs
        .into_iter()
        .filter(|j| !j.title.is_empty())
        .map(|listing| DashboardRecord {
            location_bucket: location_bucket(&listing.location),
            experience_bucket: experience_bucket(&listing.experience),
            employment_bucket: employment_bucket(&listing.employment_type),
            salary_bucket: salary_bucket(&listing.salary),
            listing,
        })
        .collect())
}

pub fn apply_filters<'a>(
    records: &'a [DashboardRecord],
    filters: &Filters,
) -> Vec<&'a DashboardRecord> {
    records.iter().filter(|r| filters.matches(r)).collect()
}

/// Coarse location: named metro district sets first, then any district
/// suffix, then a bare region name, then the raw value.
pub fn location_bucket(location: &str) -> String {
    let location = location.trim();
    if location.is_empty() {
        return UNKNOWN.to_string();
    }
    if SEOUL_DISTRICTS.contains(&location) {
        return "서울".to_string();
    }
    if DAEJEON_DISTRICTS.contains(&location) {
        return "대전".to_string();
    }
    if BUSAN_DISTRICTS.contains(&location) {
        return "부산".to_string();
    }
    if location.contains('구') {
        return "기타 광역시".to_string();
    }
    for region in REGIONS {
        if location.contains(region) {
            return region.to_string();
        }
    }
    location.to_string()
}

/// Coarse experience: new-graduate, unspecified, "경력 N년+", bare career,
/// or the raw value.
pub fn experience_bucket(experience: &str) -> String {
    let trimmed = experience.trim();
    if trimmed.is_empty() {
        return UNKNOWN.to_string();
    }
    if experience.contains("신입") {
        return "신입".to_string();
    }
    if experience.contains("경력무관") {
        return "경력무관".to_string();
    }
    if experience.contains("경력") && experience.contains('년') {
        if let Some(m) = NUMBER_RE.find(experience) {
            return format!("경력 {}년+", m.as_str());
        }
        return "경력".to_string();
    }
    if experience.contains("경력") {
        return "경력".to_string();
    }
    trimmed.to_string()
}

/// Coarse employment: one of the enumerated types, else "기타".
pub fn employment_bucket(employment: &str) -> String {
    if employment.trim().is_empty() {
        return UNKNOWN.to_string();
    }
    if employment.contains("정규직") {
        return "정규직".to_string();
    }
    if employment.contains("계약직") {
        return "계약직".to_string();
    }
    if employment.contains("파트") {
        return "파트타임".to_string();
    }
    if employment.contains("인턴") {
        return "인턴".to_string();
    }
    "기타".to_string()
}

/// Coarse salary: a rounded annual figure, a salary-stated marker, or
/// unknown.
pub fn salary_bucket(salary: &str) -> String {
    if salary.trim().is_empty() {
        return UNKNOWN.to_string();
    }
    if salary.contains("만원") {
        if let Some(m) = NUMBER_RE.find(salary) {
            return format!("{}만원", m.as_str());
        }
    } else if salary.contains('원') {
        return "급여정보있음".to_string();
    }
    UNKNOWN.to_string()
}

/// Frequency table over one derived bucket, most common first.
pub fn frequency<F>(records: &[&DashboardRecord], key: F) -> Vec<(String, usize)>
where
    F: Fn(&DashboardRecord) -> &str,
{
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for record in records {
        *counts.entry(key(record)).or_default() += 1;
    }
    sorted_counts(counts)
}

pub fn metrics(records: &[&DashboardRecord]) -> Metrics {
    let companies: std::collections::HashSet<&str> = records
        .iter()
        .filter(|r| !r.listing.company.is_empty())
        .map(|r| r.listing.company.as_str())
        .collect();
    Metrics {
        total: records.len(),
        companies: companies.len(),
        full_time: records
            .iter()
            .filter(|r| r.employment_bucket == "정규직")
            .count(),
        seoul: records
            .iter()
            .filter(|r| r.location_bucket == "서울")
            .count(),
    }
}

pub fn top_companies(records: &[&DashboardRecord], limit: usize) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for record in records {
        if !record.listing.company.is_empty() {
            *counts.entry(record.listing.company.as_str()).or_default() += 1;
        }
    }
    let mut sorted = sorted_counts(counts);
    sorted.truncate(limit);
    sorted
}

/// Occurrence counts of the tracked keywords across all titles,
/// case-insensitive; keywords that never occur are omitted.
pub fn title_keyword_counts(records: &[&DashboardRecord]) -> Vec<(String, usize)> {
    let titles = records
        .iter()
        .map(|r| r.listing.title.to_uppercase())
        .collect::<Vec<_>>()
        .join(" ");
    TITLE_KEYWORDS
        .iter()
        .filter_map(|kw| {
            let count = titles.matches(&kw.to_uppercase()).count();
            (count > 0).then(|| (kw.to_string(), count))
        })
        .collect()
}

fn sorted_counts(counts: HashMap<&str, usize>) -> Vec<(String, usize)> {
    let mut sorted: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();
    sorted.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    sorted
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_buckets() {
        assert_eq!(location_bucket("강남구"), "서울");
        assert_eq!(location_bucket("중구"), "서울"); // Seoul set wins over Daejeon/Busan
        assert_eq!(location_bucket("유성구"), "대전");
        assert_eq!(location_bucket("해운대구"), "부산");
        assert_eq!(location_bucket("수성구"), "기타 광역시");
        assert_eq!(location_bucket("성남시"), "성남시");
        assert_eq!(location_bucket("경기 성남시"), "경기");
        assert_eq!(location_bucket(""), UNKNOWN);
    }

    #[test]
    fn experience_buckets() {
        assert_eq!(experience_bucket("신입"), "신입");
        assert_eq!(experience_bucket("경력 3~15년"), "경력 3년+");
        assert_eq!(experience_bucket("경력"), "경력");
        assert_eq!(experience_bucket("10년차 환영"), "10년차 환영");
        assert_eq!(experience_bucket(""), UNKNOWN);
    }

    #[test]
    fn employment_buckets() {
        assert_eq!(employment_bucket("정규직"), "정규직");
        assert_eq!(employment_bucket("파트타임"), "파트타임");
        assert_eq!(employment_bucket("프리랜서"), "기타");
        assert_eq!(employment_bucket(""), UNKNOWN);
    }

    #[test]
    fn salary_buckets() {
        assert_eq!(salary_bucket("3,000만원"), "3만원");
        assert_eq!(salary_bucket("4000만원"), "4000만원");
        assert_eq!(salary_bucket("15000원"), "급여정보있음");
        assert_eq!(salary_bucket("협의"), UNKNOWN);
        assert_eq!(salary_bucket(""), UNKNOWN);
    }

    fn record(title: &str, company: &str, location: &str, employment: &str) -> DashboardRecord {
        let listing = JobListing {
            title: title.to_string(),
            company: company.to_string(),
            location: location.to_string(),
            employment_type: employment.to_string(),
            ..Default::default()
        };
        DashboardRecord {
            location_bucket: location_bucket(&listing.location),
            experience_bucket: experience_bucket(&listing.experience),
            employment_bucket: employment_bucket(&listing.employment_type),
            salary_bucket: salary_bucket(&listing.salary),
            listing,
        }
    }

    #[test]
    fn filters_and_metrics() {
        let records = vec![
            record("RPA 개발자", "가나다", "강남구", "정규직"),
            record("RPA 운영", "가나다", "유성구", "계약직"),
            record("자동화 PM", "라마바", "강서구", "정규직"),
        ];
        let refs: Vec<&DashboardRecord> = records.iter().collect();

        let m = metrics(&refs);
        assert_eq!(m.total, 3);
        assert_eq!(m.companies, 2);
        assert_eq!(m.full_time, 2);
        assert_eq!(m.seoul, 2); // 강서구 is in both sets; Seoul is checked first

        let filtered = apply_filters(
            &records,
            &Filters {
                location: Some("서울".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(filtered.len(), 2);

        let freq = frequency(&refs, |r| r.employment_bucket.as_str());
        assert_eq!(freq[0], ("정규직".to_string(), 2));
    }

    #[test]
    fn keyword_counts_are_case_insensitive() {
        let records = vec![
            record("RPA 개발자 (UiPath)", "가나다", "", ""),
            record("rpa 운영 담당", "가나다", "", ""),
        ];
        let refs: Vec<&DashboardRecord> = records.iter().collect();
        let counts = title_keyword_counts(&refs);
        let rpa = counts.iter().find(|(k, _)| k == "RPA").unwrap();
        assert_eq!(rpa.1, 2);
        assert!(counts.iter().all(|(_, c)| *c > 0));
    }
}
