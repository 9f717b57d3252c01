//! Rule conditions
//!
//! A catalog never stores executable expressions. Each rule names one of the
//! variants below, and every variant is evaluated by a plain predicate
//! function over the [`RuleContext`] of the current pass.

use serde::{Deserialize, Serialize};

use super::context::{exceeds, falls_below, RuleContext};

/// When a care rule fires
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Condition {
    /// Temperature below the plant's tolerance minimum
    BelowMinTemp,
    /// Temperature above the plant's tolerance maximum
    AboveMaxTemp,
    TempBelow { value: f64 },
    TempAbove { value: f64 },
    BelowMinHumidity,
    AboveMaxHumidity,
    HumidityBelow { value: f64 },
    HumidityAbove { value: f64 },
    /// Precipitation measured as exactly zero
    NoPrecipitation,
    PrecipitationBelow { value: f64 },
    PrecipitationAbove { value: f64 },
    SunnyDaysAbove { days: usize },
    TopsoilDry,
    Fruiting,
    Flowering,
    WindAbove { value: f64 },
    UvAbove { value: f64 },
    SunlightBelow { hours: f64 },
    HeavyRain,
    FrostWarning,
    HighUv,
    PestAlert,
    FrequentHarvest,
    /// Every nested condition holds
    All { of: Vec<Condition> },
}

impl Condition {
    pub fn all(of: Vec<Condition>) -> Self {
        Condition::All { of }
    }

    pub fn holds(&self, ctx: &RuleContext) -> bool {
        match self {
            Condition::BelowMinTemp => below_min_temp(ctx),
            Condition::AboveMaxTemp => above_max_temp(ctx),
            Condition::TempBelow { value } => temp_below(ctx, *value),
            Condition::TempAbove { value } => temp_above(ctx, *value),
            Condition::BelowMinHumidity => below_min_humidity(ctx),
            Condition::AboveMaxHumidity => above_max_humidity(ctx),
            Condition::HumidityBelow { value } => humidity_below(ctx, *value),
            Condition::HumidityAbove { value } => humidity_above(ctx, *value),
            Condition::NoPrecipitation => no_precipitation(ctx),
            Condition::PrecipitationBelow { value } => precipitation_below(ctx, *value),
            Condition::PrecipitationAbove { value } => precipitation_above(ctx, *value),
            Condition::SunnyDaysAbove { days } => ctx.sunny_days > *days,
            Condition::TopsoilDry => ctx.topsoil_dry,
            Condition::Fruiting => ctx.fruiting,
            Condition::Flowering => ctx.flowering,
            Condition::WindAbove { value } => wind_above(ctx, *value),
            Condition::UvAbove { value } => uv_above(ctx, *value),
            Condition::SunlightBelow { hours } => sunlight_below(ctx, *hours),
            Condition::HeavyRain => ctx.heavy_rain,
            Condition::FrostWarning => ctx.frost_warning,
            Condition::HighUv => ctx.high_uv,
            Condition::PestAlert => ctx.pest_alert,
            Condition::FrequentHarvest => ctx.frequent_harvest,
            Condition::All { of } => of.iter().all(|c| c.holds(ctx)),
        }
    }

    /// Structural check used when loading a catalog
    pub fn is_well_formed(&self) -> bool {
        match self {
            Condition::All { of } => !of.is_empty() && of.iter().all(Condition::is_well_formed),
            Condition::TempBelow { value }
            | Condition::TempAbove { value }
            | Condition::HumidityBelow { value }
            | Condition::HumidityAbove { value }
            | Condition::PrecipitationBelow { value }
            | Condition::PrecipitationAbove { value }
            | Condition::WindAbove { value }
            | Condition::UvAbove { value } => value.is_finite(),
            Condition::SunlightBelow { hours } => hours.is_finite(),
            _ => true,
        }
    }
}

/// Strictly below the tolerance minimum; equality does not fire
pub fn below_min_temp(ctx: &RuleContext) -> bool {
    falls_below(ctx.temp, ctx.min_temp)
}

pub fn above_max_temp(ctx: &RuleContext) -> bool {
    exceeds(ctx.temp, ctx.max_temp)
}

pub fn temp_below(ctx: &RuleContext, value: f64) -> bool {
    falls_below(ctx.temp, value)
}

pub fn temp_above(ctx: &RuleContext, value: f64) -> bool {
    exceeds(ctx.temp, value)
}

pub fn below_min_humidity(ctx: &RuleContext) -> bool {
    falls_below(ctx.humidity, ctx.min_humidity)
}

pub fn above_max_humidity(ctx: &RuleContext) -> bool {
    exceeds(ctx.humidity, ctx.max_humidity)
}

pub fn humidity_below(ctx: &RuleContext, value: f64) -> bool {
    falls_below(ctx.humidity, value)
}

pub fn humidity_above(ctx: &RuleContext, value: f64) -> bool {
    exceeds(ctx.humidity, value)
}

pub fn no_precipitation(ctx: &RuleContext) -> bool {
    ctx.precipitation == Some(0.0)
}

pub fn precipitation_below(ctx: &RuleContext, value: f64) -> bool {
    falls_below(ctx.precipitation, value)
}

pub fn precipitation_above(ctx: &RuleContext, value: f64) -> bool {
    exceeds(ctx.precipitation, value)
}

pub fn wind_above(ctx: &RuleContext, value: f64) -> bool {
    exceeds(ctx.wind_speed, value)
}

pub fn uv_above(ctx: &RuleContext, value: f64) -> bool {
    exceeds(ctx.uv_index, value)
}

pub fn sunlight_below(ctx: &RuleContext, hours: f64) -> bool {
    falls_below(ctx.sunlight_hours, hours)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PlantType;
    use crate::types::Season;

    fn ctx() -> RuleContext {
        RuleContext {
            plant_type: PlantType::Succulent,
            season: Season::Summer,
            temp: Some(20.0),
            min_temp: 5.0,
            max_temp: 35.0,
            humidity: Some(50.0),
            min_humidity: 20.0,
            max_humidity: 60.0,
            precipitation: Some(0.0),
            sunny_days: 3,
            topsoil_dry: true,
            fruiting: false,
            flowering: false,
            wind_speed: None,
            uv_index: None,
            sunlight_hours: None,
            heavy_rain: false,
            frost_warning: false,
            high_uv: false,
            pest_alert: false,
            frequent_harvest: false,
        }
    }

    #[test]
    fn test_tolerance_edge_is_strict() {
        let mut c = ctx();
        c.temp = Some(5.0);
        assert!(!below_min_temp(&c));
        assert!(temp_below(&c, 10.0));
        c.temp = Some(4.9);
        assert!(below_min_temp(&c));
        c.temp = Some(35.0);
        assert!(!above_max_temp(&c));
    }

    #[test]
    fn test_missing_readings_disable_rules() {
        let mut c = ctx();
        c.temp = None;
        c.humidity = None;
        c.precipitation = None;
        assert!(!Condition::TempBelow { value: 100.0 }.holds(&c));
        assert!(!Condition::BelowMinHumidity.holds(&c));
        assert!(!Condition::NoPrecipitation.holds(&c));
        assert!(!Condition::WindAbove { value: -1.0 }.holds(&c));
        assert!(!Condition::SunlightBelow { hours: 24.0 }.holds(&c));
    }

    #[test]
    fn test_all_requires_every_part() {
        let rule = Condition::all(vec![
            Condition::NoPrecipitation,
            Condition::SunnyDaysAbove { days: 2 },
        ]);
        assert!(rule.holds(&ctx()));

        let mut c = ctx();
        c.sunny_days = 2;
        assert!(!rule.holds(&c));
    }

    #[test]
    fn test_flags_pass_through() {
        let mut c = ctx();
        assert!(Condition::TopsoilDry.holds(&c));
        assert!(!Condition::Flowering.holds(&c));
        c.frequent_harvest = true;
        c.high_uv = true;
        assert!(Condition::FrequentHarvest.holds(&c));
        assert!(Condition::HighUv.holds(&c));
    }

    #[test]
    fn test_well_formed() {
        assert!(Condition::TopsoilDry.is_well_formed());
        assert!(!Condition::all(vec![]).is_well_formed());
        assert!(!Condition::TempAbove { value: f64::NAN }.is_well_formed());
    }

    #[test]
    fn test_condition_json_shape() {
        let parsed: Condition =
            serde_json::from_str(r#"{"kind": "temp_below", "value": 10}"#).unwrap();
        assert_eq!(parsed, Condition::TempBelow { value: 10.0 });

        let parsed: Condition = serde_json::from_str(
            r#"{"kind": "all", "of": [{"kind": "topsoil_dry"}, {"kind": "humidity_below", "value": 50}]}"#,
        )
        .unwrap();
        assert_eq!(
            parsed,
            Condition::all(vec![
                Condition::TopsoilDry,
                Condition::HumidityBelow { value: 50.0 }
            ])
        );

        assert!(serde_json::from_str::<Condition>(r#"{"kind": "moon_phase"}"#).is_err());
    }
}
