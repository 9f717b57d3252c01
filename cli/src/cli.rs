//! Command-line interface definition

use std::path::PathBuf;

use chrono::{NaiveDate, NaiveDateTime};
use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use shared::{DurationType, Language, Season};

/// Output format for all commands
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Plant care advice from weather observations
#[derive(Parser, Debug)]
#[command(name = "pca", about = "Plant Care Advisor - weather-driven plant care tips", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Advice language (zh, en); overrides the configured one
    #[arg(short, long, global = true)]
    pub language: Option<Language>,

    /// Output format; overrides the configured one
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// JSON rule catalog to use instead of the built-in one
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Log debug information to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Ranked care advice for a weather snapshot
    Advise {
        /// JSON file holding the weather snapshot
        #[arg(short, long)]
        snapshot: PathBuf,
        /// Only advise this plant type (key or Chinese group name)
        #[arg(short, long)]
        plant_type: Option<String>,
    },

    /// Seasonal tips for every plant type
    Seasonal {
        /// Season to list (defaults to the current one)
        #[arg(long)]
        season: Option<Season>,
    },

    /// Next due date of a recurring care task
    #[command(name = "next-task")]
    NextTask {
        /// How the task repeats (stage, continuous, once)
        #[arg(short, long)]
        duration: DurationType,
        /// Days between occurrences
        #[arg(short, long, allow_negative_numbers = true)]
        interval: Option<i64>,
        /// First occurrence of a stage task
        #[arg(long, value_parser = parse_datetime)]
        start: Option<NaiveDateTime>,
        /// Last day of a stage task
        #[arg(long, value_parser = parse_datetime)]
        end: Option<NaiveDateTime>,
        /// Date of a one-off task
        #[arg(long, value_parser = parse_datetime)]
        once: Option<NaiveDateTime>,
    },

    /// List the plant types in the catalog
    Catalog,
}

/// Accepts `2024-03-15T09:30:00`, `2024-03-15 09:30` or a bare date (midnight)
pub fn parse_datetime(value: &str) -> Result<NaiveDateTime, String> {
    let value = value.trim();
    ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
        .ok_or_else(|| format!("invalid date '{}', expected YYYY-MM-DD[THH:MM[:SS]]", value))
}
