use crate::clean;
use crate::dataset::JobListing;

/// Post-process raw records into canonical form: recover a location buried
/// in the experience text, then re-derive every categorical field through
/// its classifier.
pub fn normalize_all(jobs: &mut [JobListing]) {
    for job in jobs.iter_mut() {
        normalize(job);
    }
}

fn normalize(job: &mut JobListing) {
    // The condition blob frequently carries the region where the dedicated
    // location element was missing or stale. A recovered region wins unless
    // the current value already contains it.
    let (recovered, _) = clean::extract_location_from_text(&job.experience);
    if !recovered.is_empty() && (job.location.is_empty() || !job.location.contains(&recovered)) {
        job.location = recovered;
    }

    // Classifiers run over the original field text, not the remainder left
    // by location removal.
    job.experience = clean::clean_experience(&job.experience);
    job.education = clean::clean_education(&job.education);
    job.employment_type = clean::clean_employment_type(&job.employment_type);
    job.salary = clean::clean_salary(&job.salary);
    job.deadline = clean::format_deadline(&job.deadline);
    job.location = clean::format_location(&job.location);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(location: &str, experience: &str) -> JobListing {
        JobListing {
            title: "테스트 공고".to_string(),
            location: location.to_string(),
            experience: experience.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn adopts_location_recovered_from_experience() {
        let mut job = raw("", "서울 강남구 경력 3년");
        normalize(&mut job);
        assert_eq!(job.location, "강남구");
        assert_eq!(job.experience, "경력 3년");
    }

    #[test]
    fn recovered_location_overwrites_mismatching_value() {
        let mut job = raw("재택근무", "부산 해운대구 경력 5년");
        normalize(&mut job);
        assert_eq!(job.location, "해운대구");
    }

    #[test]
    fn containing_location_is_kept_then_formatted() {
        let mut job = raw("서울 강남구", "서울 강남구 경력 3년");
        normalize(&mut job);
        // "서울 강남구" already contains the recovered "강남구"; formatting
        // still reduces it to the canonical district token.
        assert_eq!(job.location, "강남구");
    }

    #[test]
    fn all_fields_are_canonicalized() {
        let mut job = JobListing {
            title: "RPA 개발자".to_string(),
            location: "서울 강남구".to_string(),
            experience: "경력 3~5년 우대".to_string(),
            education: "대졸 이상".to_string(),
            employment_type: "정규직 (수습)".to_string(),
            salary: "연봉 3,000만원".to_string(),
            deadline: "~07/15".to_string(),
            ..Default::default()
        };
        normalize(&mut job);
        assert_eq!(job.location, "강남구");
        assert_eq!(job.experience, "경력 3~5년");
        assert_eq!(job.education, "대졸");
        assert_eq!(job.employment_type, "정규직");
        assert_eq!(job.salary, "3,000만원");
        assert_eq!(job.deadline, "7/15");
    }

    #[test]
    fn unparseable_fields_reduce_to_empty() {
        let mut job = JobListing {
            title: "공고".to_string(),
            experience: "우대사항 없음".to_string(),
            education: "기타".to_string(),
            employment_type: "파견".to_string(),
            deadline: "D-3".to_string(),
            ..Default::default()
        };
        normalize(&mut job);
        assert_eq!(job.experience, "");
        assert_eq!(job.education, "");
        assert_eq!(job.employment_type, "");
        assert_eq!(job.deadline, "");
        assert_eq!(job.location, "");
    }
}
