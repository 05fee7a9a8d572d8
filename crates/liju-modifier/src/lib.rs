//! In-place rewriting of the recency filter on existing LinkedIn URLs.

use std::borrow::Cow;

use serde::Serialize;
use thiserror::Error;
use tracing::debug;
use url::Url;

pub const CRATE_NAME: &str = "liju-modifier";

/// Query parameter carrying the "posted within" recency filter.
pub const RECENCY_PARAM: &str = "f_TPR";

const JOB_SEARCH_PATH_WARNING: &str =
    "URL doesn't appear to be a job search page. It will still work, but results may vary.";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModifyError {
    #[error("Invalid URL format. Please provide a valid URL.")]
    InvalidUrlFormat,
    #[error("Provided URL is not a LinkedIn URL.")]
    NotLinkedInDomain,
}

/// Returns `original_url` with its recency parameter set to `r<seconds>`.
///
/// The input may omit the scheme (`https://` is assumed). Every other query
/// pair keeps its original key, value, and encoding, and the fragment is
/// preserved verbatim; only the recency parameter is rewritten, collapsing
/// any duplicates into a single occurrence.
pub fn set_time_posted(original_url: &str, seconds: f64) -> Result<String, ModifyError> {
    let fixed_seconds = effective_seconds(seconds);
    let normalized = ensure_scheme(original_url.trim());

    let mut url = Url::parse(&normalized).map_err(|_| ModifyError::InvalidUrlFormat)?;
    if !is_linkedin_host(&url) {
        return Err(ModifyError::NotLinkedInDomain);
    }

    let query = set_recency_pair(url.query(), fixed_seconds);
    url.set_query(Some(&query));
    debug!(url = %url, seconds = fixed_seconds, "set recency filter");
    Ok(url.to_string())
}

/// The seconds value actually written by [`set_time_posted`]: floored,
/// with anything below one second clamped up to 1. There is no upper bound.
pub fn effective_seconds(seconds: f64) -> i64 {
    // NaN casts to 0, so non-numeric input lands on the minimum.
    (seconds.floor() as i64).max(1)
}

// Last-write-wins set: the first existing occurrence is overwritten in place
// and later duplicates are dropped; a missing parameter is appended at the
// end. All other pairs pass through byte-for-byte.
fn set_recency_pair(query: Option<&str>, seconds: i64) -> String {
    let replacement = format!("{RECENCY_PARAM}=r{seconds}");
    let mut pairs: Vec<String> = Vec::new();
    let mut replaced = false;

    for pair in query.unwrap_or_default().split('&') {
        if pair.is_empty() {
            continue;
        }
        let (key, _) = pair.split_once('=').unwrap_or((pair, ""));
        if key == RECENCY_PARAM {
            if !replaced {
                pairs.push(replacement.clone());
                replaced = true;
            }
        } else {
            pairs.push(pair.to_string());
        }
    }

    if !replaced {
        pairs.push(replacement);
    }

    pairs.join("&")
}

fn ensure_scheme(url: &str) -> Cow<'_, str> {
    if has_http_scheme(url) {
        Cow::Borrowed(url)
    } else {
        Cow::Owned(format!("https://{url}"))
    }
}

fn has_http_scheme(url: &str) -> bool {
    let lower = url.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

// Accepts bare linkedin.com and any subdomain containing the substring.
fn is_linkedin_host(url: &Url) -> bool {
    url.host_str().is_some_and(|host| host.contains("linkedin.com"))
}

/// Structured verdict from [`validate_linkedin_url`]. Always a value, never
/// an error, so front-ends can render inline messages without an exception
/// path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlValidation {
    pub is_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_job_search_path: Option<bool>,
}

impl UrlValidation {
    fn invalid(message: &str) -> Self {
        Self {
            is_valid: false,
            error: Some(message.to_string()),
            warning: None,
            is_job_search_path: None,
        }
    }
}

/// Checks a URL the same way [`set_time_posted`] will treat it, without
/// modifying anything. A LinkedIn URL outside `/jobs/search` stays valid
/// but carries a non-blocking warning.
pub fn validate_linkedin_url(url: &str) -> UrlValidation {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        return UrlValidation::invalid("Please enter a URL");
    }

    let normalized = ensure_scheme(trimmed);
    let Ok(parsed) = Url::parse(&normalized) else {
        return UrlValidation::invalid("Invalid URL format");
    };
    if !is_linkedin_host(&parsed) {
        return UrlValidation::invalid("Not a LinkedIn URL");
    }

    let is_job_search_path = parsed.path().contains("/jobs/search");
    UrlValidation {
        is_valid: true,
        error: None,
        warning: (!is_job_search_path).then(|| JOB_SEARCH_PATH_WARNING.to_string()),
        is_job_search_path: Some(is_job_search_path),
    }
}

/// Live readout for a duration: non-zero days, hours, and minutes in
/// descending order; seconds appear only when no larger unit does.
pub fn format_seconds(total: u64) -> String {
    let days = total / 86400;
    let hours = (total % 86400) / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;

    let mut parts = Vec::new();
    if days > 0 {
        parts.push(pluralize(days, "day"));
    }
    if hours > 0 {
        parts.push(pluralize(hours, "hour"));
    }
    if minutes > 0 {
        parts.push(pluralize(minutes, "minute"));
    }
    if seconds > 0 && parts.is_empty() {
        parts.push(pluralize(seconds, "second"));
    }

    if parts.is_empty() {
        "0 seconds".to_string()
    } else {
        parts.join(", ")
    }
}

fn pluralize(count: u64, unit: &str) -> String {
    if count == 1 {
        format!("1 {unit}")
    } else {
        format!("{count} {unit}s")
    }
}
