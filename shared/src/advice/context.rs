//! Facts a single advisory pass evaluates rules against

use crate::models::{PlantRule, PlantType, WeatherSnapshot};
use crate::types::Season;

/// Precipitation (mm) above which rain counts as heavy
pub const HEAVY_RAIN_MM: f64 = 20.0;

/// UV index above which sun protection is advised
pub const HIGH_UV_INDEX: f64 = 8.0;

/// Everything a condition may look at, derived once per plant entry
#[derive(Debug, Clone, PartialEq)]
pub struct RuleContext {
    pub plant_type: PlantType,
    pub season: Season,

    pub temp: Option<f64>,
    pub min_temp: f64,
    pub max_temp: f64,

    pub humidity: Option<f64>,
    pub min_humidity: f64,
    pub max_humidity: f64,

    pub precipitation: Option<f64>,
    pub sunny_days: usize,
    pub topsoil_dry: bool,
    pub fruiting: bool,
    pub flowering: bool,

    pub wind_speed: Option<f64>,
    pub uv_index: Option<f64>,
    pub sunlight_hours: Option<f64>,
    pub heavy_rain: bool,
    pub frost_warning: bool,
    pub high_uv: bool,
    pub pest_alert: bool,
    pub frequent_harvest: bool,
}

impl RuleContext {
    pub fn new(rule: &PlantRule, snapshot: &WeatherSnapshot) -> Self {
        let season = Season::of(snapshot.date.date());
        let limits = &rule.tolerance_limits;
        let sunny_days = snapshot.sunny_days();

        Self {
            plant_type: rule.plant_type,
            season,
            temp: snapshot.temperature,
            min_temp: limits.min_temp,
            max_temp: limits.max_temp,
            humidity: snapshot.humidity,
            min_humidity: limits.min_humidity,
            max_humidity: limits.max_humidity,
            precipitation: snapshot.precipitation,
            sunny_days,
            topsoil_dry: snapshot.topsoil_dry(),
            // The snapshot carries no bloom or fruit-set signal.
            fruiting: false,
            flowering: false,
            wind_speed: snapshot.wind_speed,
            uv_index: snapshot.uv_index,
            sunlight_hours: snapshot.sunlight_hours,
            heavy_rain: exceeds(snapshot.precipitation, HEAVY_RAIN_MM),
            frost_warning: snapshot.frost_warning(),
            high_uv: exceeds(snapshot.uv_index, HIGH_UV_INDEX),
            pest_alert: pest_alert(snapshot, sunny_days),
            frequent_harvest: rule.plant_type == PlantType::Herb && season == Season::Summer,
        }
    }
}

/// Warm and humid, or wet with little sun
pub fn pest_alert(snapshot: &WeatherSnapshot, sunny_days: usize) -> bool {
    let muggy = exceeds(snapshot.temperature, 25.0) && exceeds(snapshot.humidity, 70.0);
    let overcast_rain = exceeds(snapshot.precipitation, 5.0) && sunny_days < 2;
    muggy || overcast_rain
}

/// `value > threshold`, false when the value is unknown
pub(crate) fn exceeds(value: Option<f64>, threshold: f64) -> bool {
    value.is_some_and(|v| v > threshold)
}

/// `value < threshold`, false when the value is unknown
pub(crate) fn falls_below(value: Option<f64>, threshold: f64) -> bool {
    value.is_some_and(|v| v < threshold)
}
