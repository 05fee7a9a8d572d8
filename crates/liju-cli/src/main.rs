use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use liju_builder::{build_job_search_url, filter_summary, format_time_posted, validate_filters};
use liju_core::{
    to_seconds, ExperienceLevel, FilterValue, JobFilters, JobType, SortOrder, TimeUnit, WorkMode,
    TIME_PRESETS,
};
use liju_modifier::{effective_seconds, format_seconds, set_time_posted, validate_linkedin_url};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "liju")]
#[command(about = "LinkedIn job-search URL toolkit")]
struct Cli {
    /// Emit machine-readable JSON instead of plain text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Build a fresh job-search URL from filters.
    Build(BuildArgs),
    /// Rewrite the "posted within" filter on an existing URL.
    Retime(RetimeArgs),
    /// Validate a LinkedIn URL without changing it.
    Check { url: String },
    /// List the quick-pick time presets.
    Presets,
}

#[derive(Debug, Args)]
struct BuildArgs {
    /// Job designation or keywords.
    #[arg(long)]
    keywords: Option<String>,
    #[arg(long)]
    location: Option<String>,
    /// "Posted within" window in seconds.
    #[arg(long)]
    time_posted: Option<i64>,
    /// Job type by name (e.g. full-time) or catalog value; repeatable.
    #[arg(long = "job-type")]
    job_types: Vec<String>,
    /// Work mode by name (e.g. remote) or catalog value; repeatable.
    #[arg(long = "work-mode")]
    work_modes: Vec<String>,
    /// Experience level by name (e.g. entry-level) or catalog value; repeatable.
    #[arg(long)]
    experience: Vec<String>,
    /// Sort order: recent (DD) or relevant (R); unknown values pass through.
    #[arg(long)]
    sort: Option<String>,
    /// Read a JobFilters JSON document instead of using flags.
    #[arg(
        long,
        conflicts_with_all = [
            "keywords", "location", "time_posted", "job_types",
            "work_modes", "experience", "sort",
        ]
    )]
    filters: Option<PathBuf>,
}

#[derive(Debug, Args)]
struct RetimeArgs {
    url: String,
    /// Recency window in seconds.
    #[arg(long, conflicts_with_all = ["value", "unit"])]
    seconds: Option<f64>,
    /// Recency amount, combined with --unit.
    #[arg(long, requires = "unit")]
    value: Option<f64>,
    /// Unit for --value: seconds, minutes, hours, or days.
    #[arg(long, requires = "value")]
    unit: Option<TimeUnit>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Build(args) => run_build(args, cli.json),
        Commands::Retime(args) => run_retime(args, cli.json),
        Commands::Check { url } => run_check(&url, cli.json),
        Commands::Presets => run_presets(cli.json),
    }
}

fn run_build(args: BuildArgs, json: bool) -> Result<()> {
    let filters = if let Some(path) = &args.filters {
        let data =
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_str(&data).with_context(|| format!("parsing {}", path.display()))?
    } else {
        filters_from_flags(&args)?
    };

    let verdict = validate_filters(&filters);
    if !verdict.is_valid {
        bail!(verdict.error.unwrap_or_else(|| "invalid filters".to_string()));
    }

    let url = build_job_search_url(&filters)?;
    if json {
        println!(
            "{}",
            serde_json::json!({ "url": url, "summary": filter_summary(&filters) })
        );
    } else {
        eprintln!("{}", filter_summary(&filters));
        println!("{url}");
    }
    Ok(())
}

fn run_retime(args: RetimeArgs, json: bool) -> Result<()> {
    let seconds = match (args.seconds, args.value, args.unit) {
        (Some(seconds), None, None) => seconds,
        (None, Some(value), Some(unit)) => to_seconds(value, unit),
        _ => bail!("pass either --seconds or --value with --unit"),
    };

    let verdict = validate_linkedin_url(&args.url);
    if !verdict.is_valid {
        bail!(verdict.error.unwrap_or_else(|| "invalid URL".to_string()));
    }
    if let Some(warning) = &verdict.warning {
        eprintln!("warning: {warning}");
    }

    let url = set_time_posted(&args.url, seconds)?;
    let window = format_seconds(effective_seconds(seconds) as u64);
    if json {
        println!(
            "{}",
            serde_json::json!({ "url": url, "timePosted": window })
        );
    } else {
        eprintln!("posted within: {window}");
        println!("{url}");
    }
    Ok(())
}

fn run_check(url: &str, json: bool) -> Result<()> {
    let verdict = validate_linkedin_url(url);
    if json {
        println!("{}", serde_json::to_string_pretty(&verdict)?);
        return Ok(());
    }

    if verdict.is_valid {
        match verdict.is_job_search_path {
            Some(true) => println!("ok: LinkedIn job-search URL"),
            _ => println!("ok: LinkedIn URL"),
        }
        if let Some(warning) = &verdict.warning {
            println!("warning: {warning}");
        }
    } else {
        println!(
            "invalid: {}",
            verdict.error.as_deref().unwrap_or("unknown error")
        );
    }
    Ok(())
}

fn run_presets(json: bool) -> Result<()> {
    if json {
        let rows: Vec<_> = TIME_PRESETS
            .iter()
            .map(|preset| {
                serde_json::json!({
                    "label": preset.label,
                    "seconds": preset.seconds,
                    "timePosted": format_time_posted(preset.seconds),
                    "duration": format_seconds(preset.seconds as u64),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    for preset in TIME_PRESETS {
        println!(
            "{:>4}  {:>7}s  {:<9} {}",
            preset.label,
            preset.seconds,
            format_time_posted(preset.seconds),
            format_seconds(preset.seconds as u64)
        );
    }
    Ok(())
}

fn filters_from_flags(args: &BuildArgs) -> Result<JobFilters> {
    Ok(JobFilters {
        keywords: args.keywords.clone().unwrap_or_default(),
        location: args.location.clone(),
        time_posted: args.time_posted,
        job_types: filter_values(&args.job_types, &job_type_catalog())?,
        work_modes: filter_values(&args.work_modes, &work_mode_catalog())?,
        experience: filter_values(&args.experience, &experience_catalog())?,
        sort_by: args.sort.as_deref().map(sort_param),
    })
}

fn filter_values(inputs: &[String], catalog: &[(i64, &'static str)]) -> Result<Option<FilterValue>> {
    if inputs.is_empty() {
        return Ok(None);
    }
    let mut values = Vec::with_capacity(inputs.len());
    for input in inputs {
        values.push(catalog_value(input, catalog)?);
    }
    Ok(Some(if values.len() == 1 {
        FilterValue::One(values[0])
    } else {
        FilterValue::Many(values)
    }))
}

fn catalog_value(input: &str, catalog: &[(i64, &'static str)]) -> Result<i64> {
    if let Ok(value) = input.parse::<i64>() {
        return Ok(value);
    }
    let slug = slugify(input);
    for (value, label) in catalog {
        if slugify(label) == slug {
            return Ok(*value);
        }
    }
    bail!("unknown filter option: {input}");
}

fn job_type_catalog() -> Vec<(i64, &'static str)> {
    JobType::ALL.iter().map(|j| (j.value(), j.label())).collect()
}

fn work_mode_catalog() -> Vec<(i64, &'static str)> {
    WorkMode::ALL.iter().map(|m| (m.value(), m.label())).collect()
}

fn experience_catalog() -> Vec<(i64, &'static str)> {
    ExperienceLevel::ALL
        .iter()
        .map(|level| (level.value(), level.label()))
        .collect()
}

fn sort_param(input: &str) -> String {
    let slug = slugify(input);
    for order in SortOrder::ALL {
        if slugify(order.label()) == slug || slug == order.as_param().to_ascii_lowercase() {
            return order.as_param().to_string();
        }
    }
    match slug.as_str() {
        "recent" | "date" => SortOrder::MostRecent.as_param().to_string(),
        "relevant" | "relevance" => SortOrder::MostRelevant.as_param().to_string(),
        _ => input.to_string(),
    }
}

fn slugify(input: &str) -> String {
    input
        .trim()
        .to_ascii_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_names_resolve_case_insensitively() {
        let catalog = job_type_catalog();
        assert_eq!(catalog_value("Full-time", &catalog).unwrap(), 1);
        assert_eq!(catalog_value("full time", &catalog).unwrap(), 1);
        assert_eq!(catalog_value("VOLUNTEER", &catalog).unwrap(), 6);
    }

    #[test]
    fn numeric_catalog_values_pass_through() {
        assert_eq!(catalog_value("4", &experience_catalog()).unwrap(), 4);
    }

    #[test]
    fn unknown_catalog_names_are_rejected() {
        assert!(catalog_value("freelance", &job_type_catalog()).is_err());
    }

    #[test]
    fn single_and_multiple_inputs_map_to_scalar_and_list() {
        let catalog = work_mode_catalog();
        assert_eq!(
            filter_values(&["remote".to_string()], &catalog).unwrap(),
            Some(FilterValue::One(1))
        );
        assert_eq!(
            filter_values(&["remote".to_string(), "hybrid".to_string()], &catalog).unwrap(),
            Some(FilterValue::Many(vec![1, 3]))
        );
        assert_eq!(filter_values(&[], &catalog).unwrap(), None);
    }

    #[test]
    fn sort_names_resolve_to_catalog_params() {
        assert_eq!(sort_param("recent"), "DD");
        assert_eq!(sort_param("Most relevant"), "R");
        assert_eq!(sort_param("dd"), "DD");
        assert_eq!(sort_param("custom"), "custom");
    }
}
