//! End-to-end assertions on complete serialized URLs.

use liju_builder::build_job_search_url;
use liju_core::JobFilters;

#[test]
fn full_filter_set_serializes_in_declaration_order() {
    let filters = JobFilters {
        keywords: "Python Developer".to_string(),
        location: Some("Karachi".to_string()),
        time_posted: Some(3600),
        job_types: Some(1.into()),
        work_modes: Some(1.into()),
        experience: Some(2.into()),
        sort_by: Some("DD".to_string()),
    };

    assert_eq!(
        build_job_search_url(&filters).unwrap(),
        "https://www.linkedin.com/jobs/search/?keywords=Python+Developer&location=Karachi\
         &f_TPR=r3600&f_WT=1&f_WRA=1&f_E=2&sortBy=DD"
    );
}

#[test]
fn keywords_only_url_is_exactly_base_plus_one_pair() {
    let filters = JobFilters {
        keywords: "Developer".to_string(),
        ..JobFilters::default()
    };

    assert_eq!(
        build_job_search_url(&filters).unwrap(),
        "https://www.linkedin.com/jobs/search/?keywords=Developer"
    );
}

#[test]
fn whitespace_padded_keywords_build_the_same_url() {
    let padded = JobFilters {
        keywords: "  Developer  ".to_string(),
        ..JobFilters::default()
    };
    let trimmed = JobFilters {
        keywords: "Developer".to_string(),
        ..JobFilters::default()
    };

    assert_eq!(
        build_job_search_url(&padded).unwrap(),
        build_job_search_url(&trimmed).unwrap()
    );
}

#[test]
fn wire_named_json_document_builds_the_expected_url() {
    let filters: JobFilters = serde_json::from_str(
        r#"{"keywords": "Developer", "f_WT": [1, 2], "sortBy": "R"}"#,
    )
    .unwrap();

    assert_eq!(
        build_job_search_url(&filters).unwrap(),
        "https://www.linkedin.com/jobs/search/?keywords=Developer&f_WT=1%2C2&sortBy=R"
    );
}
