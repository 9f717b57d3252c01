//! Plant care rule models

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::advice::Condition;
use crate::error::ParseError;
use crate::types::{Language, LocalizedText, Season};

/// Plant groups covered by the catalog
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum PlantType {
    Succulent,
    Leafy,
    Flowering,
    Vegetable,
    Herb,
}

impl PlantType {
    pub const ALL: [PlantType; 5] = [
        PlantType::Succulent,
        PlantType::Leafy,
        PlantType::Flowering,
        PlantType::Vegetable,
        PlantType::Herb,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            PlantType::Succulent => "succulent",
            PlantType::Leafy => "leafy",
            PlantType::Flowering => "flowering",
            PlantType::Vegetable => "vegetable",
            PlantType::Herb => "herb",
        }
    }

    /// Group name as shown in the Chinese UI
    pub fn zh_name(&self) -> &'static str {
        match self {
            PlantType::Succulent => "多肉植物",
            PlantType::Leafy => "观叶植物",
            PlantType::Flowering => "开花植物",
            PlantType::Vegetable => "蔬菜类",
            PlantType::Herb => "草本香草",
        }
    }
}

impl std::fmt::Display for PlantType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for PlantType {
    type Err = ParseError;

    /// Accepts the keys (any ASCII case) and the Chinese group names
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        PlantType::ALL
            .into_iter()
            .find(|t| t.key().eq_ignore_ascii_case(needle) || t.zh_name() == needle)
            .ok_or_else(|| ParseError::UnknownPlantType(s.to_string()))
    }
}

/// A `min..max` range with its sweet spot
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct IdealRange {
    pub min: f64,
    pub max: f64,
    pub ideal: f64,
}

impl IdealRange {
    pub const fn new(min: f64, max: f64, ideal: f64) -> Self {
        Self { min, max, ideal }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Watering rhythm: days the soil may stay dry, days it may stay wet
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct WateringRhythm {
    pub dry_days: u32,
    pub wet_days: u32,
}

/// Conditions a plant group thrives in
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IdealConditions {
    pub temperature: IdealRange,
    pub humidity: IdealRange,
    pub light_hours: IdealRange,
    pub watering: WateringRhythm,
}

/// Survival bounds, wider than the ideal ranges
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ToleranceLimits {
    pub min_temp: f64,
    pub max_temp: f64,
    pub min_humidity: f64,
    pub max_humidity: f64,
}

/// A condition paired with the advice it triggers
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConditionRule {
    pub when: Condition,
    pub advice: LocalizedText,
    /// 1 is most urgent; categories supply a default when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<u8>,
}

impl ConditionRule {
    pub fn new(when: Condition, advice: LocalizedText, priority: u8) -> Self {
        Self {
            when,
            advice,
            priority: Some(priority),
        }
    }

    pub fn unranked(when: Condition, advice: LocalizedText) -> Self {
        Self {
            when,
            advice,
            priority: None,
        }
    }
}

/// Advice that applies for a whole season
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SeasonalRule {
    pub season: Season,
    pub advice: LocalizedText,
}

/// Care rules grouped by the weather aspect they react to
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CareRules {
    pub temperature: Vec<ConditionRule>,
    #[serde(default)]
    pub humidity: Vec<ConditionRule>,
    #[serde(default)]
    pub watering: Vec<ConditionRule>,
    #[serde(default)]
    pub seasonal: Vec<SeasonalRule>,
    #[serde(default)]
    pub special: Vec<ConditionRule>,
}

/// Stage-specific watering and fertilizing hints
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StageCare {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub watering: Option<LocalizedText>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fertilizing: Option<LocalizedText>,
}

/// One catalog entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlantRule {
    pub plant_type: PlantType,
    pub name: LocalizedText,
    #[serde(default)]
    pub examples: Vec<LocalizedText>,
    pub ideal_conditions: IdealConditions,
    pub tolerance_limits: ToleranceLimits,
    pub care_rules: CareRules,
    #[serde(default)]
    pub growth_stages: BTreeMap<String, StageCare>,
}

impl PlantRule {
    /// Display label such as `多肉植物（仙人掌、景天）` or `Succulents (cactus, sedum)`
    pub fn label(&self, language: Language) -> String {
        let examples: Vec<&str> = self.examples.iter().map(|e| e.get(language)).collect();
        match (language, examples.is_empty()) {
            (_, true) => self.name.get(language).to_string(),
            (Language::Chinese, false) => format!("{}（{}）", self.name.zh, examples.join("、")),
            (Language::English, false) => format!("{} ({})", self.name.en, examples.join(", ")),
        }
    }

    pub fn stage_care(&self, stage: GrowthStage) -> Option<&StageCare> {
        self.growth_stages.get(stage.as_str())
    }
}

/// Coarse lifecycle bucket
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GrowthStage {
    Dormant,
    Growing,
    Flowering,
}

impl GrowthStage {
    /// Winter is dormant, flowering plants bloom in spring, the rest grow
    pub fn determine(plant_type: PlantType, season: Season) -> Self {
        match (plant_type, season) {
            (_, Season::Winter) => GrowthStage::Dormant,
            (PlantType::Flowering, Season::Spring) => GrowthStage::Flowering,
            _ => GrowthStage::Growing,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GrowthStage::Dormant => "dormant",
            GrowthStage::Growing => "growing",
            GrowthStage::Flowering => "flowering",
        }
    }
}

/// Rule category an advice item came from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Temperature,
    Humidity,
    Watering,
    Seasonal,
    Special,
    GrowthStage,
}

impl Category {
    /// Name used as the secondary sort key
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Temperature => "temperature",
            Category::Humidity => "humidity",
            Category::Watering => "watering",
            Category::Seasonal => "seasonal",
            Category::Special => "special",
            Category::GrowthStage => "growth_stage",
        }
    }

    /// Priority for rules that do not state one
    pub fn default_priority(&self) -> u8 {
        match self {
            Category::Humidity | Category::Seasonal => 3,
            _ => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plant_type_parse() {
        assert_eq!("succulent".parse::<PlantType>().unwrap(), PlantType::Succulent);
        assert_eq!("HERB".parse::<PlantType>().unwrap(), PlantType::Herb);
        assert_eq!("开花植物".parse::<PlantType>().unwrap(), PlantType::Flowering);
        assert_eq!(
            "nonexistent".parse::<PlantType>(),
            Err(ParseError::UnknownPlantType("nonexistent".to_string()))
        );
    }

    #[test]
    fn test_growth_stage_detection() {
        assert_eq!(
            GrowthStage::determine(PlantType::Flowering, Season::Winter),
            GrowthStage::Dormant
        );
        assert_eq!(
            GrowthStage::determine(PlantType::Flowering, Season::Spring),
            GrowthStage::Flowering
        );
        assert_eq!(
            GrowthStage::determine(PlantType::Leafy, Season::Spring),
            GrowthStage::Growing
        );
        assert_eq!(
            GrowthStage::determine(PlantType::Flowering, Season::Summer),
            GrowthStage::Growing
        );
    }

    #[test]
    fn test_category_defaults_and_names() {
        assert_eq!(Category::Humidity.default_priority(), 3);
        assert_eq!(Category::Special.default_priority(), 2);
        assert_eq!(Category::Watering.default_priority(), 2);
        assert!(Category::GrowthStage.as_str() < Category::Humidity.as_str());
        assert!(Category::Seasonal.as_str() < Category::Special.as_str());
    }

    #[test]
    fn test_ideal_range_contains() {
        let range = IdealRange::new(10.0, 30.0, 22.0);
        assert!(range.contains(10.0));
        assert!(range.contains(30.0));
        assert!(!range.contains(30.5));
    }
}
