//! Common types used across the advisor: languages, seasons and
//! calendar-derived helpers

use std::str::FromStr;

use chrono::{Datelike, Local, NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Supported output languages
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    #[serde(alias = "zh")]
    Chinese,
    #[serde(alias = "en")]
    English,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::Chinese => "zh",
            Language::English => "en",
        }
    }
}

impl FromStr for Language {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "zh" | "chinese" | "zh-cn" => Ok(Language::Chinese),
            "en" | "english" | "en-us" => Ok(Language::English),
            _ => Err(ParseError::UnknownLanguage(s.to_string())),
        }
    }
}

/// Text carried in both supported languages
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LocalizedText {
    pub zh: String,
    pub en: String,
}

impl LocalizedText {
    pub fn new(zh: impl Into<String>, en: impl Into<String>) -> Self {
        Self {
            zh: zh.into(),
            en: en.into(),
        }
    }

    pub fn get(&self, language: Language) -> &str {
        match language {
            Language::Chinese => &self.zh,
            Language::English => &self.en,
        }
    }

    pub fn is_blank(&self) -> bool {
        self.zh.trim().is_empty() || self.en.trim().is_empty()
    }
}

/// Northern-hemisphere season
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    /// Season for a 1-indexed month: March-May spring, June-August summer,
    /// September-October autumn, everything else winter.
    pub fn from_month(month: u32) -> Self {
        match month {
            3..=5 => Season::Spring,
            6..=8 => Season::Summer,
            9..=10 => Season::Autumn,
            _ => Season::Winter,
        }
    }

    pub fn of(date: NaiveDate) -> Self {
        Self::from_month(date.month())
    }

    /// Season of the local wall clock
    pub fn current() -> Self {
        Self::of(Local::now().date_naive())
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Autumn => "autumn",
            Season::Winter => "winter",
        }
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Season {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "spring" | "春" | "春季" => Ok(Season::Spring),
            "summer" | "夏" | "夏季" => Ok(Season::Summer),
            "autumn" | "fall" | "秋" | "秋季" => Ok(Season::Autumn),
            "winter" | "冬" | "冬季" => Ok(Season::Winter),
            _ => Err(ParseError::UnknownSeason(s.to_string())),
        }
    }
}

/// Daytime is 06:00 up to (not including) 18:00
pub fn is_daytime(at: NaiveDateTime) -> bool {
    (6..18).contains(&at.hour())
}

/// Coarse part of the day
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    Dawn,
    Morning,
    Noon,
    Afternoon,
    Evening,
    Night,
}

impl TimeOfDay {
    pub fn of(at: NaiveDateTime) -> Self {
        match at.hour() {
            5 => TimeOfDay::Dawn,
            6..=11 => TimeOfDay::Morning,
            12 => TimeOfDay::Noon,
            13..=17 => TimeOfDay::Afternoon,
            18..=19 => TimeOfDay::Evening,
            _ => TimeOfDay::Night,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(month: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, month, 15)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_season_boundaries() {
        assert_eq!(Season::from_month(2), Season::Winter);
        assert_eq!(Season::from_month(3), Season::Spring);
        assert_eq!(Season::from_month(5), Season::Spring);
        assert_eq!(Season::from_month(6), Season::Summer);
        assert_eq!(Season::from_month(8), Season::Summer);
        assert_eq!(Season::from_month(9), Season::Autumn);
        assert_eq!(Season::from_month(10), Season::Autumn);
        assert_eq!(Season::from_month(11), Season::Winter);
        assert_eq!(Season::from_month(12), Season::Winter);
        assert_eq!(Season::from_month(1), Season::Winter);
    }

    #[test]
    fn test_season_parse() {
        assert_eq!("Summer".parse::<Season>().unwrap(), Season::Summer);
        assert_eq!("fall".parse::<Season>().unwrap(), Season::Autumn);
        assert_eq!("冬季".parse::<Season>().unwrap(), Season::Winter);
        assert!("monsoon".parse::<Season>().is_err());
    }

    #[test]
    fn test_daytime_window() {
        assert!(!is_daytime(at(7, 5)));
        assert!(is_daytime(at(7, 6)));
        assert!(is_daytime(at(7, 17)));
        assert!(!is_daytime(at(7, 18)));
        assert!(!is_daytime(at(7, 0)));
    }

    #[test]
    fn test_time_of_day() {
        assert_eq!(TimeOfDay::of(at(1, 5)), TimeOfDay::Dawn);
        assert_eq!(TimeOfDay::of(at(1, 9)), TimeOfDay::Morning);
        assert_eq!(TimeOfDay::of(at(1, 12)), TimeOfDay::Noon);
        assert_eq!(TimeOfDay::of(at(1, 15)), TimeOfDay::Afternoon);
        assert_eq!(TimeOfDay::of(at(1, 19)), TimeOfDay::Evening);
        assert_eq!(TimeOfDay::of(at(1, 23)), TimeOfDay::Night);
        assert_eq!(TimeOfDay::of(at(1, 3)), TimeOfDay::Night);
    }

    #[test]
    fn test_language_codes() {
        assert_eq!(Language::default(), Language::Chinese);
        assert_eq!(Language::English.code(), "en");
        assert_eq!("EN".parse::<Language>().unwrap(), Language::English);
        assert_eq!("zh".parse::<Language>().unwrap(), Language::Chinese);
        assert!("fr".parse::<Language>().is_err());
    }

    #[test]
    fn test_localized_text() {
        let text = LocalizedText::new("浇透水", "Water thoroughly");
        assert_eq!(text.get(Language::Chinese), "浇透水");
        assert_eq!(text.get(Language::English), "Water thoroughly");
        assert!(!text.is_blank());
        assert!(LocalizedText::new("", "x").is_blank());
    }
}
