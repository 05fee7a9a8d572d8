//! Core domain model and filter catalogs for liju.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const CRATE_NAME: &str = "liju-core";

/// Structured filters for a LinkedIn job-search URL.
///
/// `keywords` is the only required field; every other field maps to one
/// optional query parameter with no cross-field dependency. Serde names
/// follow LinkedIn's wire parameters so a JSON filter document reads like
/// the query string it produces.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobFilters {
    pub keywords: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// "Posted within" window in seconds, encoded as `r<seconds>`.
    #[serde(default, rename = "f_TPR", skip_serializing_if = "Option::is_none")]
    pub time_posted: Option<i64>,
    #[serde(default, rename = "f_WT", skip_serializing_if = "Option::is_none")]
    pub job_types: Option<FilterValue>,
    #[serde(default, rename = "f_WRA", skip_serializing_if = "Option::is_none")]
    pub work_modes: Option<FilterValue>,
    #[serde(default, rename = "f_E", skip_serializing_if = "Option::is_none")]
    pub experience: Option<FilterValue>,
    #[serde(default, rename = "sortBy", skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
}

/// A filter holding either a single catalog value or an ordered list of them.
///
/// Untagged so that `1` and `[1, 2]` both deserialize from JSON, matching
/// the wire shape of multi-select filters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    One(i64),
    Many(Vec<i64>),
}

impl From<i64> for FilterValue {
    fn from(value: i64) -> Self {
        FilterValue::One(value)
    }
}

impl From<Vec<i64>> for FilterValue {
    fn from(values: Vec<i64>) -> Self {
        FilterValue::Many(values)
    }
}

/// Employment-category catalog for the `f_WT` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobType {
    FullTime,
    PartTime,
    Contract,
    Temporary,
    Internship,
    Volunteer,
}

impl JobType {
    pub const ALL: [JobType; 6] = [
        JobType::FullTime,
        JobType::PartTime,
        JobType::Contract,
        JobType::Temporary,
        JobType::Internship,
        JobType::Volunteer,
    ];

    pub fn value(self) -> i64 {
        match self {
            JobType::FullTime => 1,
            JobType::PartTime => 2,
            JobType::Contract => 3,
            JobType::Temporary => 4,
            JobType::Internship => 5,
            JobType::Volunteer => 6,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            JobType::FullTime => "Full-time",
            JobType::PartTime => "Part-time",
            JobType::Contract => "Contract",
            JobType::Temporary => "Temporary",
            JobType::Internship => "Internship",
            JobType::Volunteer => "Volunteer",
        }
    }
}

/// Remote/on-site/hybrid catalog for the `f_WRA` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkMode {
    Remote,
    OnSite,
    Hybrid,
}

impl WorkMode {
    pub const ALL: [WorkMode; 3] = [WorkMode::Remote, WorkMode::OnSite, WorkMode::Hybrid];

    pub fn value(self) -> i64 {
        match self {
            WorkMode::Remote => 1,
            WorkMode::OnSite => 2,
            WorkMode::Hybrid => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            WorkMode::Remote => "Remote",
            WorkMode::OnSite => "On-site",
            WorkMode::Hybrid => "Hybrid",
        }
    }
}

/// Seniority catalog for the `f_E` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExperienceLevel {
    Internship,
    EntryLevel,
    Associate,
    MidSenior,
    Director,
    Executive,
}

impl ExperienceLevel {
    pub const ALL: [ExperienceLevel; 6] = [
        ExperienceLevel::Internship,
        ExperienceLevel::EntryLevel,
        ExperienceLevel::Associate,
        ExperienceLevel::MidSenior,
        ExperienceLevel::Director,
        ExperienceLevel::Executive,
    ];

    pub fn value(self) -> i64 {
        match self {
            ExperienceLevel::Internship => 1,
            ExperienceLevel::EntryLevel => 2,
            ExperienceLevel::Associate => 3,
            ExperienceLevel::MidSenior => 4,
            ExperienceLevel::Director => 5,
            ExperienceLevel::Executive => 6,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ExperienceLevel::Internship => "Internship",
            ExperienceLevel::EntryLevel => "Entry level",
            ExperienceLevel::Associate => "Associate",
            ExperienceLevel::MidSenior => "Mid-Senior level",
            ExperienceLevel::Director => "Director",
            ExperienceLevel::Executive => "Executive",
        }
    }
}

/// Sort catalog for the `sortBy` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    MostRecent,
    MostRelevant,
}

impl SortOrder {
    pub const ALL: [SortOrder; 2] = [SortOrder::MostRecent, SortOrder::MostRelevant];

    pub fn as_param(self) -> &'static str {
        match self {
            SortOrder::MostRecent => "DD",
            SortOrder::MostRelevant => "R",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortOrder::MostRecent => "Most recent",
            SortOrder::MostRelevant => "Most relevant",
        }
    }
}

/// Quick-pick recency choice offered by front-ends.
///
/// The encoder itself accepts any positive number of seconds; presets are
/// a convenience table, not a closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimePreset {
    pub label: &'static str,
    pub seconds: i64,
}

pub const TIME_PRESETS: [TimePreset; 9] = [
    TimePreset { label: "15m", seconds: 900 },
    TimePreset { label: "30m", seconds: 1800 },
    TimePreset { label: "1h", seconds: 3600 },
    TimePreset { label: "2h", seconds: 7200 },
    TimePreset { label: "6h", seconds: 21600 },
    TimePreset { label: "12h", seconds: 43200 },
    TimePreset { label: "24h", seconds: 86400 },
    TimePreset { label: "3d", seconds: 259200 },
    TimePreset { label: "7d", seconds: 604800 },
];

/// Units accepted when a recency amount is entered as value + unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeUnit {
    Seconds,
    Minutes,
    Hours,
    Days,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown time unit: {0}")]
pub struct UnknownTimeUnit(pub String);

impl TimeUnit {
    pub const ALL: [TimeUnit; 4] = [
        TimeUnit::Seconds,
        TimeUnit::Minutes,
        TimeUnit::Hours,
        TimeUnit::Days,
    ];

    pub fn multiplier(self) -> i64 {
        match self {
            TimeUnit::Seconds => 1,
            TimeUnit::Minutes => 60,
            TimeUnit::Hours => 3600,
            TimeUnit::Days => 86400,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TimeUnit::Seconds => "seconds",
            TimeUnit::Minutes => "minutes",
            TimeUnit::Hours => "hours",
            TimeUnit::Days => "days",
        }
    }
}

impl std::str::FromStr for TimeUnit {
    type Err = UnknownTimeUnit;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim().to_ascii_lowercase().as_str() {
            "s" | "sec" | "secs" | "second" | "seconds" => Ok(TimeUnit::Seconds),
            "m" | "min" | "mins" | "minute" | "minutes" => Ok(TimeUnit::Minutes),
            "h" | "hr" | "hrs" | "hour" | "hours" => Ok(TimeUnit::Hours),
            "d" | "day" | "days" => Ok(TimeUnit::Days),
            _ => Err(UnknownTimeUnit(input.to_string())),
        }
    }
}

/// Converts a value expressed in `unit` to whole-ish seconds; fractional
/// amounts are allowed and resolved by the caller's clamping rules.
pub fn to_seconds(value: f64, unit: TimeUnit) -> f64 {
    value * unit.multiplier() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn job_type_catalog_matches_linkedin_values() {
        let expected = [
            (1, "Full-time"),
            (2, "Part-time"),
            (3, "Contract"),
            (4, "Temporary"),
            (5, "Internship"),
            (6, "Volunteer"),
        ];
        for (job_type, (value, label)) in JobType::ALL.iter().zip(expected) {
            assert_eq!(job_type.value(), value);
            assert_eq!(job_type.label(), label);
        }
    }

    #[test]
    fn work_mode_catalog_matches_linkedin_values() {
        let expected = [(1, "Remote"), (2, "On-site"), (3, "Hybrid")];
        for (mode, (value, label)) in WorkMode::ALL.iter().zip(expected) {
            assert_eq!(mode.value(), value);
            assert_eq!(mode.label(), label);
        }
    }

    #[test]
    fn experience_catalog_matches_linkedin_values() {
        let expected = [
            (1, "Internship"),
            (2, "Entry level"),
            (3, "Associate"),
            (4, "Mid-Senior level"),
            (5, "Director"),
            (6, "Executive"),
        ];
        for (level, (value, label)) in ExperienceLevel::ALL.iter().zip(expected) {
            assert_eq!(level.value(), value);
            assert_eq!(level.label(), label);
        }
    }

    #[test]
    fn sort_catalog_matches_linkedin_params() {
        assert_eq!(SortOrder::MostRecent.as_param(), "DD");
        assert_eq!(SortOrder::MostRecent.label(), "Most recent");
        assert_eq!(SortOrder::MostRelevant.as_param(), "R");
        assert_eq!(SortOrder::MostRelevant.label(), "Most relevant");
    }

    #[test]
    fn time_presets_span_fifteen_minutes_to_seven_days_ascending() {
        assert_eq!(TIME_PRESETS.first().map(|p| p.seconds), Some(900));
        assert_eq!(TIME_PRESETS.last().map(|p| p.seconds), Some(604800));
        for pair in TIME_PRESETS.windows(2) {
            assert!(pair[0].seconds < pair[1].seconds);
        }
    }

    #[test]
    fn time_units_convert_to_seconds() {
        assert_eq!(to_seconds(2.0, TimeUnit::Hours), 7200.0);
        assert_eq!(to_seconds(1.5, TimeUnit::Minutes), 90.0);
        assert_eq!(to_seconds(3.0, TimeUnit::Days), 259200.0);
        assert_eq!(to_seconds(45.0, TimeUnit::Seconds), 45.0);
    }

    #[test]
    fn time_units_parse_from_short_and_long_names() {
        assert_eq!("h".parse(), Ok(TimeUnit::Hours));
        assert_eq!("Minutes".parse(), Ok(TimeUnit::Minutes));
        assert_eq!("day".parse(), Ok(TimeUnit::Days));
        assert_eq!("sec".parse(), Ok(TimeUnit::Seconds));
        assert!("fortnight".parse::<TimeUnit>().is_err());
    }

    #[test]
    fn filter_values_deserialize_from_scalar_or_list() {
        let one: FilterValue = serde_json::from_str("1").unwrap();
        assert_eq!(one, FilterValue::One(1));

        let many: FilterValue = serde_json::from_str("[1, 2]").unwrap();
        assert_eq!(many, FilterValue::Many(vec![1, 2]));
    }

    #[test]
    fn filters_use_wire_parameter_names_in_json() {
        let filters: JobFilters = serde_json::from_str(
            r#"{
                "keywords": "Developer",
                "location": "Karachi",
                "f_TPR": 3600,
                "f_WT": [1, 2],
                "f_WRA": 1,
                "f_E": 2,
                "sortBy": "DD"
            }"#,
        )
        .unwrap();

        assert_eq!(filters.keywords, "Developer");
        assert_eq!(filters.time_posted, Some(3600));
        assert_eq!(filters.job_types, Some(FilterValue::Many(vec![1, 2])));
        assert_eq!(filters.work_modes, Some(FilterValue::One(1)));
        assert_eq!(filters.experience, Some(FilterValue::One(2)));
        assert_eq!(filters.sort_by.as_deref(), Some("DD"));

        let round_trip = serde_json::to_string(&filters).unwrap();
        assert!(round_trip.contains("\"f_TPR\":3600"));
        assert!(round_trip.contains("\"sortBy\":\"DD\""));
    }
}
