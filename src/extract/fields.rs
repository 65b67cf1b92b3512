use std::sync::LazyLock;

use scraper::{ElementRef, Selector};

use crate::clean::location::PROVINCES;
use crate::dataset::{JobListing, SITE_ORIGIN};

/// Ordered candidate selectors for one field plus its disambiguation
/// keywords. Candidates run most-specific first; the first one whose first
/// match yields non-empty text containing a keyword wins. An empty keyword
/// set accepts any non-empty text.
struct Field {
    selectors: Vec<Selector>,
    keywords: Vec<&'static str>,
}

impl Field {
    fn new(selectors: &[&str], keywords: &[&'static str]) -> Self {
        Self {
            selectors: selectors
                .iter()
                .map(|s| Selector::parse(s).unwrap())
                .collect(),
            keywords: keywords.to_vec(),
        }
    }

    fn accepts(&self, text: &str) -> bool {
        self.keywords.is_empty() || self.keywords.iter().any(|kw| text.contains(kw))
    }
}

struct Fields {
    title: Field,
    company: Field,
    location: Field,
    experience: Field,
    education: Field,
    employment: Field,
    salary: Field,
    deadline: Field,
}

static FIELDS: LazyLock<Fields> = LazyLock::new(|| {
    // Location text is gated on the region vocabulary shared with the
    // resolver, plus the generic tokens the site uses for area labels.
    let mut location_keywords: Vec<&'static str> = PROVINCES.to_vec();
    location_keywords.extend(["지역", "구"]);

    Fields {
        title: Field::new(
            &[".job_tit a", ".recruit_tit", "h2 a", "h3 a", ".tit a", "a[title]"],
            &[],
        ),
        company: Field::new(
            &[".corp_name a", ".company", ".corp", r#"[class*="company"]"#],
            &[],
        ),
        location: Field::new(
            &[
                ".job_condition .condition",
                ".location",
                r#"[class*="location"]"#,
                r#"[class*="area"]"#,
            ],
            &location_keywords,
        ),
        experience: Field::new(
            &[
                ".job_condition",
                ".condition",
                r#"[class*="career"]"#,
                r#"[class*="experience"]"#,
            ],
            &["경력", "신입", "년"],
        ),
        education: Field::new(
            &[".job_condition", ".condition", r#"[class*="education"]"#],
            &["학력", "대졸", "고졸", "무관"],
        ),
        employment: Field::new(
            &[".job_condition", ".condition", r#"[class*="employment"]"#],
            &["정규직", "계약직", "파트", "인턴"],
        ),
        salary: Field::new(
            &[
                ".job_condition",
                ".condition",
                r#"[class*="salary"]"#,
                r#"[class*="pay"]"#,
            ],
            &["만원", "원", "연봉", "급여", "시급", "월급", "협의"],
        ),
        deadline: Field::new(
            &[".job_date", ".date", r#"[class*="deadline"]"#, r#"[class*="dday"]"#],
            &["~", "마감", "D-", "/", "상시", "채용시"],
        ),
    }
});

/// Extract one raw listing from a container. Fields that cannot be resolved
/// stay empty; a failing field never affects its siblings.
pub fn extract_listing(container: ElementRef) -> JobListing {
    let fields = &*FIELDS;
    let mut job = JobListing::default();

    if let Some((title_el, text)) = probe(container, &fields.title) {
        job.title = text;
        job.link = title_el
            .value()
            .attr("href")
            .map(absolute_link)
            .unwrap_or_default();
    }
    if let Some((_, text)) = probe(container, &fields.company) {
        job.company = text;
    }
    job.location = probe_text(container, &fields.location);
    job.experience = probe_text(container, &fields.experience);
    job.education = probe_text(container, &fields.education);
    job.employment_type = probe_text(container, &fields.employment);
    job.salary = probe_text(container, &fields.salary);
    job.deadline = probe_text(container, &fields.deadline);

    job
}

/// Run a field's candidate list: for each selector, look at its first match
/// only, then move on to the next candidate if the text is empty or fails
/// the keyword gate.
fn probe<'a>(container: ElementRef<'a>, field: &Field) -> Option<(ElementRef<'a>, String)> {
    for selector in &field.selectors {
        let Some(el) = container.select(selector).next() else {
            continue;
        };
        let text = normalized_text(el);
        if text.is_empty() || !field.accepts(&text) {
            continue;
        }
        return Some((el, text));
    }
    None
}

fn probe_text(container: ElementRef, field: &Field) -> String {
    probe(container, field).map(|(_, text)| text).unwrap_or_default()
}

/// Concatenated descendant text with runs of whitespace collapsed.
fn normalized_text(el: ElementRef) -> String {
    el.text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn absolute_link(href: &str) -> String {
    if href.is_empty() || href.starts_with("http") {
        href.to_string()
    } else {
        format!("{}{}", SITE_ORIGIN, href)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    fn first_container(html: &str) -> JobListing {
        let document = Html::parse_document(html);
        let selector = Selector::parse(".item_recruit").unwrap();
        let container = document.select(&selector).next().unwrap();
        extract_listing(container)
    }

    #[test]
    fn extracts_all_fields_from_well_formed_container() {
        let job = first_container(
            r#"<div class="item_recruit">
                <h2 class="job_tit"><a href="/zf_user/jobs/view?rec_idx=101" title="RPA 개발자">RPA 개발자</a></h2>
                <strong class="corp_name"><a href="/company/1">오토메이트코리아</a></strong>
                <div class="job_condition">
                  <span class="condition">서울 강남구</span>
                  <span>경력 3~5년</span>
                  <span>대졸 이상</span>
                  <span>정규직</span>
                  <span>연봉 4,000만원</span>
                </div>
                <span class="job_date">~07/15</span>
            </div>"#,
        );

        assert_eq!(job.title, "RPA 개발자");
        assert_eq!(job.company, "오토메이트코리아");
        assert_eq!(job.location, "서울 강남구");
        assert!(job.experience.contains("경력 3~5년"));
        assert!(job.education.contains("대졸"));
        assert!(job.employment_type.contains("정규직"));
        assert!(job.salary.contains("4,000만원"));
        assert_eq!(job.deadline, "~07/15");
        assert_eq!(job.link, format!("{}/zf_user/jobs/view?rec_idx=101", SITE_ORIGIN));
    }

    #[test]
    fn absolute_links_are_left_alone() {
        let job = first_container(
            r#"<div class="item_recruit">
                <h2 class="job_tit"><a href="https://www.saramin.co.kr/jobs/102">자동화 엔지니어</a></h2>
            </div>"#,
        );
        assert_eq!(job.link, "https://www.saramin.co.kr/jobs/102");
    }

    #[test]
    fn keyword_gate_rejects_unrelated_sibling_text() {
        // The structural location candidate matches but carries no region
        // vocabulary, so the field must stay empty.
        let job = first_container(
            r#"<div class="item_recruit">
                <h2 class="job_tit"><a href="/jobs/103">사무 보조</a></h2>
                <div class="job_condition">
                  <span class="condition">주 5일 근무</span>
                </div>
            </div>"#,
        );
        assert_eq!(job.location, "");
    }

    #[test]
    fn missing_fields_stay_empty_without_affecting_others() {
        let job = first_container(
            r#"<div class="item_recruit">
                <h2 class="job_tit"><a href="/jobs/104">테스트 엔지니어</a></h2>
            </div>"#,
        );
        assert_eq!(job.title, "테스트 엔지니어");
        assert_eq!(job.company, "");
        assert_eq!(job.location, "");
        assert_eq!(job.experience, "");
        assert_eq!(job.deadline, "");
    }

    #[test]
    fn title_candidates_cascade_to_less_specific_selectors() {
        let job = first_container(
            r#"<div class="item_recruit">
                <h3><a href="/jobs/105">데이터 엔지니어</a></h3>
            </div>"#,
        );
        assert_eq!(job.title, "데이터 엔지니어");
        assert_eq!(job.link, format!("{}/jobs/105", SITE_ORIGIN));
    }
}
