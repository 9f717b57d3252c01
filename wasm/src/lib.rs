//! WebAssembly module for the Plant Care Advisor
//!
//! Provides client-side computation for:
//! - Weather-driven care advice
//! - Seasonal fallback tips
//! - Next due date of care tasks
//! - Weather icon selection and offline task validation
//!
//! Structured values cross the boundary as JSON strings.

use chrono::{DateTime, Local, NaiveDateTime};
use serde::Serialize;
use wasm_bindgen::prelude::*;

use shared::{
    condition_text, lookup_code, Advisor, Catalog, DurationType, Language, Season, TaskSchedule,
    WeatherIcon, WeatherSnapshot,
};

const DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

fn parse_language(language: &str) -> Result<Language, String> {
    language.parse::<Language>().map_err(|e| e.to_string())
}

/// Accepts local ISO timestamps (`2024-03-15T09:00:00`) and RFC 3339 with an offset
fn parse_timestamp(value: &str) -> Result<NaiveDateTime, String> {
    value
        .parse::<NaiveDateTime>()
        .or_else(|_| {
            DateTime::parse_from_rfc3339(value).map(|dt| dt.with_timezone(&Local).naive_local())
        })
        .map_err(|e| format!("Invalid timestamp '{}': {}", value, e))
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| e.to_string())
}

fn advice_json(snapshot_json: &str, plant_type: Option<&str>, language: &str) -> Result<String, String> {
    let snapshot: WeatherSnapshot =
        serde_json::from_str(snapshot_json).map_err(|e| format!("Invalid snapshot JSON: {}", e))?;
    let advice = Advisor::new(Catalog::builtin())
        .with_language(parse_language(language)?)
        .generate_advice(&snapshot, plant_type);
    to_json(&advice)
}

fn season_json(season: Option<&str>, language: &str) -> Result<String, String> {
    let season = season
        .map(|s| s.parse::<Season>().map_err(|e| e.to_string()))
        .transpose()?;
    let tips = Advisor::new(Catalog::builtin())
        .with_language(parse_language(language)?)
        .season_advice(season);
    to_json(&tips)
}

fn next_date(
    interval_days: Option<i32>,
    duration_type: &str,
    start_date: Option<&str>,
    once_date: Option<&str>,
) -> Result<Option<String>, String> {
    let schedule = TaskSchedule {
        duration_type: duration_type.parse::<DurationType>().map_err(|e| e.to_string())?,
        interval_days: interval_days.map(i64::from),
        start_date: start_date.map(parse_timestamp).transpose()?,
        end_date: None,
        once_date: once_date.map(parse_timestamp).transpose()?,
    };
    Ok(schedule
        .next_occurrence()
        .map(|next| next.format(DATE_FORMAT).to_string()))
}

fn check_schedule(schedule_json: &str) -> Result<(), String> {
    let schedule: TaskSchedule =
        serde_json::from_str(schedule_json).map_err(|e| format!("Invalid task JSON: {}", e))?;
    shared::validate_task_schedule(&schedule).map_err(String::from)
}

#[derive(Serialize)]
struct WeatherDescription {
    code: u8,
    icon: WeatherIcon,
    asset: &'static str,
    text: &'static str,
}

fn describe(code: &str, is_day: bool, language: &str) -> Result<String, String> {
    let icon = WeatherIcon::for_code(code, is_day);
    to_json(&WeatherDescription {
        code: lookup_code(code).code,
        icon,
        asset: icon.asset(),
        text: condition_text(code, parse_language(language)?),
    })
}

/// Ranked care advice as a JSON array of strings
///
/// `plant_type` restricts the advice to one plant type; without it every
/// type is advised and each line is prefixed with its plant group.
#[wasm_bindgen]
pub fn generate_plant_advice(
    snapshot_json: &str,
    plant_type: Option<String>,
    language: &str,
) -> Result<String, JsValue> {
    advice_json(snapshot_json, plant_type.as_deref(), language).map_err(|e| JsValue::from_str(&e))
}

/// Seasonal tips for every plant type as a JSON array of strings
#[wasm_bindgen]
pub fn season_advice(season: Option<String>, language: &str) -> Result<String, JsValue> {
    season_json(season.as_deref(), language).map_err(|e| JsValue::from_str(&e))
}

/// Next due date of a task (`YYYY-MM-DDTHH:MM:SS`), or `undefined` when the
/// inputs do not describe a schedulable task
#[wasm_bindgen]
pub fn next_task_date(
    interval_days: Option<i32>,
    duration_type: &str,
    start_date: Option<String>,
    once_date: Option<String>,
) -> Result<Option<String>, JsValue> {
    next_date(
        interval_days,
        duration_type,
        start_date.as_deref(),
        once_date.as_deref(),
    )
    .map_err(|e| JsValue::from_str(&e))
}

/// Season of the device clock
#[wasm_bindgen]
pub fn current_season() -> String {
    Season::current().to_string()
}

#[wasm_bindgen]
pub fn is_daytime(timestamp: &str) -> Result<bool, JsValue> {
    parse_timestamp(timestamp)
        .map(shared::is_daytime)
        .map_err(|e| JsValue::from_str(&e))
}

/// Icon asset for a provider weather code
#[wasm_bindgen]
pub fn weather_icon(code: &str, is_day: bool) -> String {
    WeatherIcon::for_code(code, is_day).asset().to_string()
}

/// Icon, asset and condition text for a weather code as JSON
#[wasm_bindgen]
pub fn describe_weather(code: &str, is_day: bool, language: &str) -> Result<String, JsValue> {
    describe(code, is_day, language).map_err(|e| JsValue::from_str(&e))
}

/// Validate the scheduling fields of the task form before saving offline
#[wasm_bindgen]
pub fn validate_task_schedule(schedule_json: &str) -> Result<(), JsValue> {
    check_schedule(schedule_json).map_err(|e| JsValue::from_str(&e))
}
