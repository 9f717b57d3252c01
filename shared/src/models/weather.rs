//! Weather data models

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::types::Language;

/// Soil moisture (%) under which the topsoil counts as dry
pub const DRY_SOIL_THRESHOLD: f64 = 30.0;

/// A weather snapshot handed to one advisory pass
///
/// Every measurement except the timestamp is optional. A missing value makes
/// the rules that read it stay silent, except soil moisture: when it is
/// missing the topsoil is assumed to be dry.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct WeatherSnapshot {
    /// Air temperature in °C
    #[serde(default)]
    pub temperature: Option<f64>,
    /// Relative humidity in %
    #[serde(default)]
    #[validate(range(min = 0.0, max = 100.0))]
    pub humidity: Option<f64>,
    /// Precipitation in mm
    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub precipitation: Option<f64>,
    /// Wind speed in m/s
    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub wind_speed: Option<f64>,
    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub uv_index: Option<f64>,
    /// Soil moisture in %
    #[serde(default)]
    #[validate(range(min = 0.0, max = 100.0))]
    pub soil_moisture: Option<f64>,
    #[serde(default)]
    #[validate(range(min = 0.0, max = 24.0))]
    pub sunlight_hours: Option<f64>,
    #[serde(default)]
    #[validate(custom = "validate_forecast")]
    pub forecast: Vec<ForecastDay>,
    /// Local wall-clock time of the observation
    pub date: NaiveDateTime,
}

impl WeatherSnapshot {
    /// Snapshot with no measurements at all
    pub fn new(date: NaiveDateTime) -> Self {
        Self {
            temperature: None,
            humidity: None,
            precipitation: None,
            wind_speed: None,
            uv_index: None,
            soil_moisture: None,
            sunlight_hours: None,
            forecast: Vec::new(),
            date,
        }
    }

    pub fn with_temperature(mut self, celsius: f64) -> Self {
        self.temperature = Some(celsius);
        self
    }

    pub fn with_humidity(mut self, percent: f64) -> Self {
        self.humidity = Some(percent);
        self
    }

    pub fn with_precipitation(mut self, mm: f64) -> Self {
        self.precipitation = Some(mm);
        self
    }

    pub fn with_wind_speed(mut self, mps: f64) -> Self {
        self.wind_speed = Some(mps);
        self
    }

    pub fn with_uv_index(mut self, index: f64) -> Self {
        self.uv_index = Some(index);
        self
    }

    pub fn with_soil_moisture(mut self, percent: f64) -> Self {
        self.soil_moisture = Some(percent);
        self
    }

    pub fn with_sunlight_hours(mut self, hours: f64) -> Self {
        self.sunlight_hours = Some(hours);
        self
    }

    pub fn with_forecast(mut self, forecast: Vec<ForecastDay>) -> Self {
        self.forecast = forecast;
        self
    }

    /// Number of forecast days that are clear or mostly clear
    pub fn sunny_days(&self) -> usize {
        self.forecast.iter().filter(|day| day.sky().is_sunny()).count()
    }

    /// Topsoil is dry below 30% moisture; an unknown reading counts as 0.
    pub fn topsoil_dry(&self) -> bool {
        // Product has not confirmed whether a missing sensor should read as dry.
        self.soil_moisture.unwrap_or(0.0) < DRY_SOIL_THRESHOLD
    }

    /// Any of the next two forecast days drops below 2°C
    pub fn frost_warning(&self) -> bool {
        self.forecast.iter().take(2).any(|day| day.min_temp < 2.0)
    }
}

/// One day of forecast
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ForecastDay {
    /// Condition label as delivered by the provider (`晴`, `少云`, `CLEAR`, ...)
    pub condition: String,
    pub min_temp: f64,
    pub max_temp: f64,
}

/// Each forecast day needs finite temperatures with `min_temp <= max_temp`
fn validate_forecast(forecast: &[ForecastDay]) -> Result<(), ValidationError> {
    let valid = forecast.iter().all(|day| {
        day.min_temp.is_finite() && day.max_temp.is_finite() && day.min_temp <= day.max_temp
    });
    if valid {
        Ok(())
    } else {
        Err(ValidationError::new("forecast_range"))
    }
}

impl ForecastDay {
    pub fn new(condition: impl Into<String>, min_temp: f64, max_temp: f64) -> Self {
        Self {
            condition: condition.into(),
            min_temp,
            max_temp,
        }
    }

    pub fn sky(&self) -> SkyCondition {
        SkyCondition::from_label(&self.condition)
    }
}

/// Sky classification used for counting sunny days
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SkyCondition {
    Clear,
    MostlyClear,
    Other,
}

impl SkyCondition {
    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            "晴" => SkyCondition::Clear,
            "少云" => SkyCondition::MostlyClear,
            other if other.eq_ignore_ascii_case("clear") => SkyCondition::Clear,
            other if other.eq_ignore_ascii_case("mostly_clear") => SkyCondition::MostlyClear,
            _ => SkyCondition::Other,
        }
    }

    pub fn is_sunny(&self) -> bool {
        matches!(self, SkyCondition::Clear | SkyCondition::MostlyClear)
    }
}

/// Icon shown next to a weather condition
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WeatherIcon {
    Cloud,
    MostlyCloud,
    CloudyNight,
    RainyDay,
    Thunder,
    Thunderstorm,
    Rain,
    HeavyRain,
    Drop,
    Snow,
    HeavySnowfall,
    HeavyWind,
}

impl WeatherIcon {
    /// Asset file bundled with the UI
    pub fn asset(&self) -> &'static str {
        match self {
            WeatherIcon::Cloud => "cloud.svg",
            WeatherIcon::MostlyCloud => "mostly-cloud.svg",
            WeatherIcon::CloudyNight => "cloudy-night.svg",
            WeatherIcon::RainyDay => "rainyday.svg",
            WeatherIcon::Thunder => "thunder.svg",
            WeatherIcon::Thunderstorm => "thunderstorm.svg",
            WeatherIcon::Rain => "rain.svg",
            WeatherIcon::HeavyRain => "heavy-rain.svg",
            WeatherIcon::Drop => "drop.svg",
            WeatherIcon::Snow => "snow.svg",
            WeatherIcon::HeavySnowfall => "heavy-snowfall.svg",
            WeatherIcon::HeavyWind => "heavy-wind.svg",
        }
    }

    /// Icon for a provider condition code; partly cloudy codes switch to
    /// the cloudy night icon outside daytime.
    pub fn for_code(code: &str, is_day: bool) -> Self {
        let entry = lookup_code(code);
        match (entry.icon, is_day) {
            (WeatherIcon::MostlyCloud, false) => WeatherIcon::CloudyNight,
            (icon, _) => icon,
        }
    }
}

/// One row of the provider weather code table
#[derive(Debug, Clone, Copy)]
pub struct WeatherCode {
    pub code: u8,
    pub zh: &'static str,
    pub en: &'static str,
    pub icon: WeatherIcon,
}

const UNKNOWN_CODE: WeatherCode = WeatherCode {
    code: 99,
    zh: "未知",
    en: "Unknown",
    icon: WeatherIcon::Cloud,
};

/// Provider condition codes
pub const WEATHER_CODES: &[WeatherCode] = &[
    WeatherCode { code: 0, zh: "晴", en: "Sunny", icon: WeatherIcon::Cloud },
    WeatherCode { code: 1, zh: "晴", en: "Clear", icon: WeatherIcon::Cloud },
    WeatherCode { code: 2, zh: "晴", en: "Fair", icon: WeatherIcon::Cloud },
    WeatherCode { code: 3, zh: "晴", en: "Fair", icon: WeatherIcon::Cloud },
    WeatherCode { code: 4, zh: "多云", en: "Cloudy", icon: WeatherIcon::MostlyCloud },
    WeatherCode { code: 5, zh: "晴间多云", en: "Partly Cloudy", icon: WeatherIcon::MostlyCloud },
    WeatherCode { code: 6, zh: "晴间多云", en: "Partly Cloudy", icon: WeatherIcon::MostlyCloud },
    WeatherCode { code: 7, zh: "大部多云", en: "Mostly Cloudy", icon: WeatherIcon::MostlyCloud },
    WeatherCode { code: 8, zh: "大部多云", en: "Mostly Cloudy", icon: WeatherIcon::MostlyCloud },
    WeatherCode { code: 9, zh: "阴", en: "Overcast", icon: WeatherIcon::CloudyNight },
    WeatherCode { code: 10, zh: "阵雨", en: "Shower", icon: WeatherIcon::RainyDay },
    WeatherCode { code: 11, zh: "雷阵雨", en: "Thundershower", icon: WeatherIcon::Thunder },
    WeatherCode { code: 12, zh: "雷阵雨伴有冰雹", en: "Thundershower with Hail", icon: WeatherIcon::Thunderstorm },
    WeatherCode { code: 13, zh: "小雨", en: "Light Rain", icon: WeatherIcon::Rain },
    WeatherCode { code: 14, zh: "中雨", en: "Moderate Rain", icon: WeatherIcon::Rain },
    WeatherCode { code: 15, zh: "大雨", en: "Heavy Rain", icon: WeatherIcon::HeavyRain },
    WeatherCode { code: 16, zh: "暴雨", en: "Storm", icon: WeatherIcon::HeavyRain },
    WeatherCode { code: 17, zh: "大暴雨", en: "Heavy Storm", icon: WeatherIcon::HeavyRain },
    WeatherCode { code: 18, zh: "特大暴雨", en: "Severe Storm", icon: WeatherIcon::HeavyRain },
    WeatherCode { code: 19, zh: "冻雨", en: "Ice Rain", icon: WeatherIcon::Drop },
    WeatherCode { code: 20, zh: "雨夹雪", en: "Sleet", icon: WeatherIcon::Snow },
    WeatherCode { code: 21, zh: "阵雪", en: "Snow Flurry", icon: WeatherIcon::Snow },
    WeatherCode { code: 22, zh: "小雪", en: "Light Snow", icon: WeatherIcon::Snow },
    WeatherCode { code: 23, zh: "中雪", en: "Moderate Snow", icon: WeatherIcon::Snow },
    WeatherCode { code: 24, zh: "大雪", en: "Heavy Snow", icon: WeatherIcon::HeavySnowfall },
    WeatherCode { code: 25, zh: "暴雪", en: "Snowstorm", icon: WeatherIcon::HeavySnowfall },
    WeatherCode { code: 26, zh: "浮尘", en: "Dust", icon: WeatherIcon::Cloud },
    WeatherCode { code: 27, zh: "扬沙", en: "Sand", icon: WeatherIcon::Cloud },
    WeatherCode { code: 28, zh: "沙尘暴", en: "Duststorm", icon: WeatherIcon::Cloud },
    WeatherCode { code: 29, zh: "强沙尘暴", en: "Sandstorm", icon: WeatherIcon::Cloud },
    WeatherCode { code: 30, zh: "雾", en: "Foggy", icon: WeatherIcon::Cloud },
    WeatherCode { code: 31, zh: "霾", en: "Haze", icon: WeatherIcon::Cloud },
    WeatherCode { code: 32, zh: "风", en: "Windy", icon: WeatherIcon::HeavyWind },
    WeatherCode { code: 33, zh: "大风", en: "Blustery", icon: WeatherIcon::HeavyWind },
    WeatherCode { code: 34, zh: "飓风", en: "Hurricane", icon: WeatherIcon::Thunderstorm },
    WeatherCode { code: 35, zh: "热带风暴", en: "Tropical Storm", icon: WeatherIcon::Thunderstorm },
    WeatherCode { code: 36, zh: "龙卷风", en: "Tornado", icon: WeatherIcon::Thunderstorm },
    WeatherCode { code: 37, zh: "冷", en: "Cold", icon: WeatherIcon::Cloud },
    WeatherCode { code: 38, zh: "热", en: "Hot", icon: WeatherIcon::Cloud },
    UNKNOWN_CODE,
];

/// Table row for a code string; unknown or malformed codes map to `99`
pub fn lookup_code(code: &str) -> &'static WeatherCode {
    code.trim()
        .parse::<u8>()
        .ok()
        .and_then(|n| WEATHER_CODES.iter().find(|entry| entry.code == n))
        .unwrap_or(&UNKNOWN_CODE)
}

/// Human-readable condition name for a provider code
pub fn condition_text(code: &str, language: Language) -> &'static str {
    let entry = lookup_code(code);
    match language {
        Language::Chinese => entry.zh,
        Language::English => entry.en,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 7, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_sky_labels() {
        assert_eq!(SkyCondition::from_label("晴"), SkyCondition::Clear);
        assert_eq!(SkyCondition::from_label("少云"), SkyCondition::MostlyClear);
        assert_eq!(SkyCondition::from_label("CLEAR"), SkyCondition::Clear);
        assert_eq!(SkyCondition::from_label("mostly_clear"), SkyCondition::MostlyClear);
        assert_eq!(SkyCondition::from_label("多云"), SkyCondition::Other);
        assert_eq!(SkyCondition::from_label("晴间多云"), SkyCondition::Other);
    }

    #[test]
    fn test_forecast_temperatures_validated() {
        let ok = WeatherSnapshot::new(noon()).with_forecast(vec![
            ForecastDay::new("晴", 18.0, 30.0),
            ForecastDay::new("阴", 20.0, 20.0),
        ]);
        assert!(ok.validate().is_ok());

        let inverted = WeatherSnapshot::new(noon()).with_forecast(vec![ForecastDay::new("晴", 30.0, 18.0)]);
        let errors = inverted.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("forecast"));

        let nan = WeatherSnapshot::new(noon()).with_forecast(vec![ForecastDay::new("晴", f64::NAN, 25.0)]);
        assert!(nan.validate().is_err());
        let infinite = WeatherSnapshot::new(noon()).with_forecast(vec![ForecastDay::new("晴", 10.0, f64::INFINITY)]);
        assert!(infinite.validate().is_err());
    }

    #[test]
    fn test_sunny_days_count() {
        let snapshot = WeatherSnapshot::new(noon()).with_forecast(vec![
            ForecastDay::new("晴", 18.0, 30.0),
            ForecastDay::new("小雨", 17.0, 24.0),
            ForecastDay::new("CLEAR", 16.0, 27.0),
        ]);
        assert_eq!(snapshot.sunny_days(), 2);
    }

    #[test]
    fn test_missing_soil_moisture_is_dry() {
        let snapshot = WeatherSnapshot::new(noon());
        assert!(snapshot.topsoil_dry());
        assert!(snapshot.clone().with_soil_moisture(29.9).topsoil_dry());
        assert!(!snapshot.with_soil_moisture(30.0).topsoil_dry());
    }

    #[test]
    fn test_frost_warning_only_looks_two_days_ahead() {
        let snapshot = WeatherSnapshot::new(noon()).with_forecast(vec![
            ForecastDay::new("晴", 5.0, 12.0),
            ForecastDay::new("晴", 3.0, 10.0),
            ForecastDay::new("晴", -4.0, 2.0),
        ]);
        assert!(!snapshot.frost_warning());

        let snapshot = snapshot.with_forecast(vec![
            ForecastDay::new("晴", 5.0, 12.0),
            ForecastDay::new("晴", 1.5, 10.0),
        ]);
        assert!(snapshot.frost_warning());
    }

    #[test]
    fn test_snapshot_validation() {
        let ok = WeatherSnapshot::new(noon())
            .with_humidity(55.0)
            .with_soil_moisture(40.0);
        assert!(ok.validate().is_ok());

        let bad = WeatherSnapshot::new(noon()).with_humidity(120.0);
        assert!(bad.validate().is_err());

        let bad = WeatherSnapshot::new(noon()).with_precipitation(-1.0);
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_snapshot_json_defaults() {
        let snapshot: WeatherSnapshot =
            serde_json::from_str(r#"{"temperature": 21.5, "date": "2024-07-01T08:30:00"}"#)
                .unwrap();
        assert_eq!(snapshot.temperature, Some(21.5));
        assert_eq!(snapshot.humidity, None);
        assert!(snapshot.forecast.is_empty());
    }

    #[test]
    fn test_condition_text() {
        assert_eq!(condition_text("0", Language::Chinese), "晴");
        assert_eq!(condition_text("15", Language::English), "Heavy Rain");
        assert_eq!(condition_text("abc", Language::Chinese), "未知");
        assert_eq!(condition_text("77", Language::English), "Unknown");
    }

    #[test]
    fn test_icon_day_night() {
        assert_eq!(WeatherIcon::for_code("0", true), WeatherIcon::Cloud);
        assert_eq!(WeatherIcon::for_code("0", false), WeatherIcon::Cloud);
        assert_eq!(WeatherIcon::for_code("9", true), WeatherIcon::CloudyNight);
        assert_eq!(WeatherIcon::for_code("5", false), WeatherIcon::CloudyNight);
        assert_eq!(WeatherIcon::for_code("13", false), WeatherIcon::Rain);
        assert_eq!(WeatherIcon::for_code("33", true).asset(), "heavy-wind.svg");
        assert_eq!(WeatherIcon::for_code("nope", true), WeatherIcon::Cloud);
    }
}
