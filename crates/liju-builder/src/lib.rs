//! Fresh construction of LinkedIn job-search URLs from structured filters.

use liju_core::{FilterValue, JobFilters};
use serde::Serialize;
use thiserror::Error;
use tracing::debug;
use url::form_urlencoded;

pub const CRATE_NAME: &str = "liju-builder";

/// Base of every freshly constructed job-search URL.
pub const JOB_SEARCH_BASE: &str = "https://www.linkedin.com/jobs/search/";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Job designation/keywords are required")]
    MissingKeywords,
}

/// Builds a complete job-search URL from `filters`.
///
/// Parameters are appended in a fixed order (keywords, location, f_TPR,
/// f_WT, f_WRA, f_E, sortBy) and omitted entirely when their source value
/// is absent; an empty value is never emitted. Values are form-encoded:
/// space becomes `+` and reserved characters are percent-escaped, so a
/// comma-joined list serializes with `%2C` between members.
pub fn build_job_search_url(filters: &JobFilters) -> Result<String, BuildError> {
    let keywords = filters.keywords.trim();
    if keywords.is_empty() {
        return Err(BuildError::MissingKeywords);
    }

    let mut query = form_urlencoded::Serializer::new(String::new());
    query.append_pair("keywords", keywords);

    if let Some(location) = filters.location.as_deref() {
        let location = location.trim();
        if !location.is_empty() {
            query.append_pair("location", location);
        }
    }

    // Zero means "no recency filter", not an explicit zero-duration window.
    if let Some(seconds) = filters.time_posted {
        if seconds > 0 {
            query.append_pair("f_TPR", &format!("r{seconds}"));
        }
    }

    if let Some(value) = multi_value_param(filters.job_types.as_ref()) {
        query.append_pair("f_WT", &value);
    }
    if let Some(value) = multi_value_param(filters.work_modes.as_ref()) {
        query.append_pair("f_WRA", &value);
    }
    if let Some(value) = multi_value_param(filters.experience.as_ref()) {
        query.append_pair("f_E", &value);
    }

    // Passed through verbatim; the sort catalog is advisory, not enforced.
    if let Some(sort_by) = filters.sort_by.as_deref() {
        if !sort_by.is_empty() {
            query.append_pair("sortBy", sort_by);
        }
    }

    let url = format!("{JOB_SEARCH_BASE}?{}", query.finish());
    debug!(%url, "built job search url");
    Ok(url)
}

// A scalar is included only when positive; a list is included when non-empty,
// comma-joined with its entries passed through unfiltered.
fn multi_value_param(value: Option<&FilterValue>) -> Option<String> {
    match value? {
        FilterValue::One(v) if *v > 0 => Some(v.to_string()),
        FilterValue::One(_) => None,
        FilterValue::Many(values) if !values.is_empty() => Some(
            values
                .iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join(","),
        ),
        FilterValue::Many(_) => None,
    }
}

/// Outcome of [`validate_filters`]. Always a value, never an error, so
/// front-ends can render inline messages without an exception path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterValidation {
    pub is_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FilterValidation {
    fn invalid(message: &str) -> Self {
        Self {
            is_valid: false,
            error: Some(message.to_string()),
        }
    }
}

/// Checks `filters` before building. First failure wins; only keywords are
/// validated. Running this first makes [`BuildError::MissingKeywords`]
/// unreachable in normal flow, though the builder still enforces it.
pub fn validate_filters(filters: &JobFilters) -> FilterValidation {
    let keywords = filters.keywords.trim();
    if keywords.is_empty() {
        return FilterValidation::invalid("Please enter a job designation or keywords");
    }
    if keywords.chars().count() < 2 {
        return FilterValidation::invalid("Keywords must be at least 2 characters long");
    }
    FilterValidation {
        is_valid: true,
        error: None,
    }
}

/// Label for a recency preset: exact multiples of a day or an hour get a
/// count, everything else reads "Any time".
pub fn format_time_posted(seconds: i64) -> String {
    if seconds > 0 && seconds % 86400 == 0 {
        let days = seconds / 86400;
        return if days == 1 {
            "1 day".to_string()
        } else {
            format!("{days} days")
        };
    }
    if seconds > 0 && seconds % 3600 == 0 {
        let hours = seconds / 3600;
        return if hours == 1 {
            "1 hour".to_string()
        } else {
            format!("{hours} hours")
        };
    }
    "Any time".to_string()
}

/// Short display line for a filter set: quoted keywords, optionally
/// followed by `in <location>`. Falls back to "Job search" when keywords
/// are absent.
pub fn filter_summary(filters: &JobFilters) -> String {
    if filters.keywords.is_empty() {
        return "Job search".to_string();
    }

    let mut summary = format!("\"{}\"", filters.keywords);
    if let Some(location) = filters.location.as_deref() {
        if !location.is_empty() {
            summary.push_str(&format!(" in {location}"));
        }
    }
    summary
}
