//! Advisory engine: turns a weather snapshot into ranked care advice

use std::collections::HashSet;

use serde::Serialize;

use super::context::RuleContext;
use crate::catalog::Catalog;
use crate::models::{Category, ConditionRule, GrowthStage, PlantRule, PlantType, WeatherSnapshot};
use crate::types::{Language, Season};

/// Priority of every seasonal tip
pub const SEASONAL_PRIORITY: u8 = 3;

/// Priority of growth-stage watering advice
pub const STAGE_WATERING_PRIORITY: u8 = 2;

/// Priority of growth-stage fertilizing advice
pub const STAGE_FERTILIZING_PRIORITY: u8 = 3;

/// One piece of advice produced during a pass
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AdviceItem {
    pub advice: String,
    pub priority: u8,
    pub category: Category,
}

/// Evaluates snapshots against a catalog in one output language
#[derive(Debug, Clone, Copy)]
pub struct Advisor<'a> {
    catalog: &'a Catalog,
    language: Language,
}

impl<'a> Advisor<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            language: Language::default(),
        }
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Ranked advice for one plant type, or for every type when `plant_type`
    /// is `None`. In the all-types mode each line is labeled with the plant
    /// group and its examples.
    pub fn generate_advice(&self, snapshot: &WeatherSnapshot, plant_type: Option<&str>) -> Vec<String> {
        let language = self.language;
        let Some(filter) = plant_type else {
            return self
                .catalog
                .entries()
                .iter()
                .flat_map(|rule| {
                    let label = rule.label(language);
                    self.advise_entry(rule, snapshot)
                        .into_iter()
                        .map(move |item| labeled(language, &label, &item.advice))
                })
                .collect();
        };

        match filter.parse::<PlantType>().ok().and_then(|t| self.catalog.get(t)) {
            Some(rule) => self
                .advise_entry(rule, snapshot)
                .into_iter()
                .map(|item| item.advice)
                .collect(),
            None => {
                tracing::debug!("No care rules for plant type {:?}", filter);
                vec![no_rule_message(language).to_string()]
            }
        }
    }

    /// Ranked advice items for a single catalog entry
    pub fn advise_entry(&self, rule: &PlantRule, snapshot: &WeatherSnapshot) -> Vec<AdviceItem> {
        let items = self.collect(rule, snapshot);
        let ranked = rank(items);
        tracing::debug!(
            "Advisory pass for {}: {} item(s) after ranking",
            rule.plant_type,
            ranked.len()
        );
        ranked
    }

    /// Every triggered item in evaluation order: temperature, humidity,
    /// watering, seasonal, special, growth stage
    pub fn collect(&self, rule: &PlantRule, snapshot: &WeatherSnapshot) -> Vec<AdviceItem> {
        let ctx = RuleContext::new(rule, snapshot);
        let care = &rule.care_rules;
        let mut items = Vec::new();

        self.push_matching(&mut items, &care.temperature, Category::Temperature, &ctx);
        self.push_matching(&mut items, &care.humidity, Category::Humidity, &ctx);
        self.push_matching(&mut items, &care.watering, Category::Watering, &ctx);

        items.extend(
            care.seasonal
                .iter()
                .filter(|tip| tip.season == ctx.season)
                .map(|tip| AdviceItem {
                    advice: tip.advice.get(self.language).to_string(),
                    priority: SEASONAL_PRIORITY,
                    category: Category::Seasonal,
                }),
        );

        self.push_matching(&mut items, &care.special, Category::Special, &ctx);

        let stage = GrowthStage::determine(rule.plant_type, ctx.season);
        if let Some(stage_care) = rule.stage_care(stage) {
            if let Some(watering) = &stage_care.watering {
                items.push(AdviceItem {
                    advice: stage_line(self.language, stage, StageTopic::Watering, watering.get(self.language)),
                    priority: STAGE_WATERING_PRIORITY,
                    category: Category::GrowthStage,
                });
            }
            if let Some(fertilizing) = &stage_care.fertilizing {
                items.push(AdviceItem {
                    advice: stage_line(
                        self.language,
                        stage,
                        StageTopic::Fertilizing,
                        fertilizing.get(self.language),
                    ),
                    priority: STAGE_FERTILIZING_PRIORITY,
                    category: Category::GrowthStage,
                });
            }
        }

        items
    }

    fn push_matching(
        &self,
        items: &mut Vec<AdviceItem>,
        rules: &[ConditionRule],
        category: Category,
        ctx: &RuleContext,
    ) {
        items.extend(rules.iter().filter(|rule| rule.when.holds(ctx)).map(|rule| AdviceItem {
            advice: rule.advice.get(self.language).to_string(),
            priority: rule.priority.unwrap_or_else(|| category.default_priority()),
            category,
        }));
    }

    /// Seasonal tips of every plant type, for when no weather is available.
    /// Uses the current local season when `season` is `None`. Every tip ranks
    /// at `SEASONAL_PRIORITY`, so lines keep catalog order with repeats dropped.
    pub fn season_advice(&self, season: Option<Season>) -> Vec<String> {
        let season = season.unwrap_or_else(Season::current);
        let language = self.language;
        let tips = self.catalog.entries().iter().flat_map(|rule| {
            let label = rule.label(language);
            rule.care_rules
                .seasonal
                .iter()
                .filter(move |tip| tip.season == season)
                .map(move |tip| labeled(language, &label, tip.advice.get(language)))
        });

        let mut seen = HashSet::new();
        let lines: Vec<String> = tips.filter(|line| seen.insert(line.clone())).collect();

        tracing::debug!("Seasonal fallback for {}: {} tip(s)", season, lines.len());
        lines
    }
}

/// Drops repeated advice text keeping the first one evaluated, then orders
/// by priority and category name. The sort is stable, so equal keys keep
/// their evaluation order.
pub fn rank(items: Vec<AdviceItem>) -> Vec<AdviceItem> {
    let mut seen = HashSet::new();
    let mut unique: Vec<AdviceItem> = items
        .into_iter()
        .filter(|item| seen.insert(item.advice.clone()))
        .collect();
    unique.sort_by(|a, b| {
        a.priority
            .cmp(&b.priority)
            .then_with(|| a.category.as_str().cmp(b.category.as_str()))
    });
    unique
}

/// Returned in place of advice when the requested plant type is unknown
pub fn no_rule_message(language: Language) -> &'static str {
    match language {
        Language::Chinese => "未找到该植物类型的养护规则",
        Language::English => "No care rules found for this plant type",
    }
}

fn labeled(language: Language, label: &str, advice: &str) -> String {
    match language {
        Language::Chinese => format!("【{}】{}", label, advice),
        Language::English => format!("[{}] {}", label, advice),
    }
}

#[derive(Clone, Copy)]
enum StageTopic {
    Watering,
    Fertilizing,
}

fn stage_line(language: Language, stage: GrowthStage, topic: StageTopic, text: &str) -> String {
    match (language, topic) {
        (Language::Chinese, StageTopic::Watering) => {
            format!("生长阶段({}): 浇水建议 - {}", stage.as_str(), text)
        }
        (Language::Chinese, StageTopic::Fertilizing) => {
            format!("生长阶段({}): 施肥建议 - {}", stage.as_str(), text)
        }
        (Language::English, StageTopic::Watering) => {
            format!("Growth stage ({}): watering - {}", stage.as_str(), text)
        }
        (Language::English, StageTopic::Fertilizing) => {
            format!("Growth stage ({}): fertilizing - {}", stage.as_str(), text)
        }
    }
}

/// Advice from the built-in catalog in the default language
pub fn generate_advice(snapshot: &WeatherSnapshot, plant_type: Option<&str>) -> Vec<String> {
    Advisor::new(Catalog::builtin()).generate_advice(snapshot, plant_type)
}

/// Seasonal fallback from the built-in catalog in the default language
pub fn get_season_advice(season: Option<Season>) -> Vec<String> {
    Advisor::new(Catalog::builtin()).season_advice(season)
}
