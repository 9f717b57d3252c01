//! Command handlers

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use chrono::NaiveDateTime;
use serde::Serialize;
use shared::{
    validate_task_schedule, Advisor, Catalog, DurationType, Language, Season, TaskSchedule,
    WeatherSnapshot,
};
use validator::Validate;

use crate::cli::{Cli, Command, OutputFormat};
use crate::config::Config;

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Effective settings once CLI flags are layered over the configuration
#[derive(Debug, Clone)]
pub struct Settings {
    pub language: Language,
    pub format: OutputFormat,
    pub catalog_path: Option<PathBuf>,
}

impl Settings {
    pub fn resolve(cli: &Cli, config: &Config) -> Self {
        Self {
            language: cli.language.unwrap_or(config.language),
            format: cli.format.unwrap_or(config.output.format),
            catalog_path: cli
                .catalog
                .clone()
                .or_else(|| config.catalog.path.as_ref().map(PathBuf::from)),
        }
    }
}

pub fn run(command: &Command, settings: &Settings, out: &mut impl Write) -> anyhow::Result<()> {
    let loaded;
    let catalog = match &settings.catalog_path {
        Some(path) => {
            loaded = Catalog::from_path(path)
                .with_context(|| format!("Failed to load catalog {}", path.display()))?;
            &loaded
        }
        None => Catalog::builtin(),
    };
    let advisor = Advisor::new(catalog).with_language(settings.language);

    match command {
        Command::Advise {
            snapshot,
            plant_type,
        } => {
            let snapshot = read_snapshot(snapshot)?;
            let advice = advisor.generate_advice(&snapshot, plant_type.as_deref());
            tracing::info!("Generated {} advice line(s)", advice.len());
            write_lines(out, settings.format, &advice)
        }
        Command::Seasonal { season } => {
            let tips = advisor.season_advice(*season);
            write_lines(out, settings.format, &tips)
        }
        Command::NextTask {
            duration,
            interval,
            start,
            end,
            once,
        } => {
            let schedule = TaskSchedule {
                duration_type: *duration,
                interval_days: *interval,
                start_date: *start,
                end_date: *end,
                once_date: *once,
            };
            next_task(out, settings.format, &schedule)
        }
        Command::Catalog => list_catalog(out, settings, catalog),
    }
}

fn read_snapshot(path: &Path) -> anyhow::Result<WeatherSnapshot> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read snapshot {}", path.display()))?;
    let snapshot: WeatherSnapshot = serde_json::from_str(&raw)
        .with_context(|| format!("Malformed snapshot {}", path.display()))?;
    snapshot
        .validate()
        .with_context(|| format!("Snapshot {} has out-of-range readings", path.display()))?;
    tracing::debug!(
        "Snapshot for {} with {} forecast day(s)",
        snapshot.date,
        snapshot.forecast.len()
    );
    Ok(snapshot)
}

fn write_lines(out: &mut impl Write, format: OutputFormat, lines: &[String]) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            for line in lines {
                writeln!(out, "{}", line)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, lines)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

#[derive(Serialize)]
struct NextTaskOutput {
    duration_type: DurationType,
    next: NaiveDateTime,
}

fn next_task(out: &mut impl Write, format: OutputFormat, schedule: &TaskSchedule) -> anyhow::Result<()> {
    let Some(next) = schedule.next_occurrence() else {
        let reason = validate_task_schedule(schedule)
            .err()
            .unwrap_or("The task has no upcoming occurrence");
        bail!("Cannot schedule {} task: {}", schedule.duration_type.as_str(), reason);
    };

    match format {
        OutputFormat::Text => writeln!(out, "{}", next.format(DATE_FORMAT))?,
        OutputFormat::Json => {
            let output = NextTaskOutput {
                duration_type: schedule.duration_type,
                next,
            };
            serde_json::to_writer_pretty(&mut *out, &output)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

#[derive(Serialize)]
struct CatalogRow<'a> {
    plant_type: &'a str,
    label: String,
    min_temp: f64,
    max_temp: f64,
    min_humidity: f64,
    max_humidity: f64,
    seasons: Vec<Season>,
}

fn list_catalog(out: &mut impl Write, settings: &Settings, catalog: &Catalog) -> anyhow::Result<()> {
    let rows: Vec<CatalogRow> = catalog
        .entries()
        .iter()
        .map(|entry| CatalogRow {
            plant_type: entry.plant_type.key(),
            label: entry.label(settings.language),
            min_temp: entry.tolerance_limits.min_temp,
            max_temp: entry.tolerance_limits.max_temp,
            min_humidity: entry.tolerance_limits.min_humidity,
            max_humidity: entry.tolerance_limits.max_humidity,
            seasons: entry.care_rules.seasonal.iter().map(|s| s.season).collect(),
        })
        .collect();

    match settings.format {
        OutputFormat::Text => {
            for row in &rows {
                writeln!(
                    out,
                    "{:<10} {}  {}..{}°C  {}..{}%",
                    row.plant_type,
                    row.label,
                    row.min_temp,
                    row.max_temp,
                    row.min_humidity,
                    row.max_humidity
                )?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &rows)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(format: OutputFormat) -> Settings {
        Settings {
            language: Language::Chinese,
            format,
            catalog_path: None,
        }
    }

    fn run_to_string(command: Command, settings: &Settings) -> anyhow::Result<String> {
        let mut out = Vec::new();
        run(&command, settings, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    fn write_temp(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("pca-{}-{}", std::process::id(), name));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_advise_from_snapshot_file() {
        let path = write_temp(
            "cold.json",
            r#"{"temperature": 2, "humidity": 45, "date": "2024-07-10T10:00:00"}"#,
        );
        let output = run_to_string(
            Command::Advise {
                snapshot: path.clone(),
                plant_type: Some("succulent".to_string()),
            },
            &settings(OutputFormat::Text),
        )
        .unwrap();
        std::fs::remove_file(path).ok();

        assert_eq!(output.lines().next(), Some("立即移至室内或温室"));
    }

    #[test]
    fn test_advise_rejects_out_of_range_snapshot() {
        let path = write_temp(
            "humid.json",
            r#"{"humidity": 140, "date": "2024-07-10T10:00:00"}"#,
        );
        let result = run_to_string(
            Command::Advise {
                snapshot: path.clone(),
                plant_type: None,
            },
            &settings(OutputFormat::Text),
        );
        std::fs::remove_file(path).ok();
        assert!(result.is_err());
    }

    #[test]
    fn test_advise_rejects_inverted_forecast() {
        let path = write_temp(
            "forecast.json",
            r#"{"date": "2024-07-10T10:00:00", "forecast": [{"condition": "晴", "min_temp": 30, "max_temp": 18}]}"#,
        );
        let result = run_to_string(
            Command::Advise {
                snapshot: path.clone(),
                plant_type: None,
            },
            &settings(OutputFormat::Text),
        );
        std::fs::remove_file(path).ok();
        let err = result.unwrap_err();
        assert!(err.to_string().contains("out-of-range readings"));
    }

    #[test]
    fn test_seasonal_json_output() {
        let output = run_to_string(
            Command::Seasonal {
                season: Some(Season::Winter),
            },
            &settings(OutputFormat::Json),
        )
        .unwrap();
        let tips: Vec<String> = serde_json::from_str(&output).unwrap();
        assert_eq!(tips.len(), 4);
    }

    #[test]
    fn test_next_task_once() {
        let output = run_to_string(
            Command::NextTask {
                duration: DurationType::Once,
                interval: None,
                start: None,
                end: None,
                once: crate::cli::parse_datetime("2030-01-02T08:00").ok(),
            },
            &settings(OutputFormat::Text),
        )
        .unwrap();
        assert_eq!(output.trim(), "2030-01-02 08:00");
    }

    #[test]
    fn test_next_task_reports_invalid_interval() {
        let err = run_to_string(
            Command::NextTask {
                duration: DurationType::Continuous,
                interval: Some(0),
                start: None,
                end: None,
                once: None,
            },
            &settings(OutputFormat::Text),
        )
        .unwrap_err();
        assert!(err.to_string().contains("Interval must be a positive number of days"));
    }

    #[test]
    fn test_catalog_listing() {
        let output = run_to_string(Command::Catalog, &settings(OutputFormat::Text)).unwrap();
        assert_eq!(output.lines().count(), 5);
        assert!(output.starts_with("succulent"));
    }

    #[test]
    fn test_missing_catalog_file() {
        let mut s = settings(OutputFormat::Text);
        s.catalog_path = Some(PathBuf::from("/nonexistent/catalog.json"));
        assert!(run_to_string(Command::Catalog, &s).is_err());
    }

    #[test]
    fn test_flags_override_config() {
        use clap::Parser;

        let cli = Cli::try_parse_from(["pca", "catalog", "--language", "en"]).unwrap();
        let config = Config::default();
        let resolved = Settings::resolve(&cli, &config);
        assert_eq!(resolved.language, Language::English);
        assert_eq!(resolved.format, OutputFormat::Text);
        assert!(resolved.catalog_path.is_none());
    }
}
