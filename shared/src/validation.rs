//! Validation utilities for the Plant Care Advisor
//!
//! Catalog entries are checked once when a catalog is loaded; task schedules
//! are checked before a next due date is computed.

use crate::models::{
    CareRules, ConditionRule, DurationType, IdealConditions, IdealRange, PlantRule, TaskSchedule,
    ToleranceLimits,
};

// ============================================================================
// Catalog Validations
// ============================================================================

/// Validate that tolerance ranges are ordered and humidity is a percentage
pub fn validate_tolerance_limits(limits: &ToleranceLimits) -> Result<(), &'static str> {
    let values = [
        limits.min_temp,
        limits.max_temp,
        limits.min_humidity,
        limits.max_humidity,
    ];
    if values.iter().any(|v| !v.is_finite()) {
        return Err("Tolerance limits must be finite numbers");
    }
    if limits.min_temp >= limits.max_temp {
        return Err("Minimum tolerated temperature must be below the maximum");
    }
    if limits.min_humidity >= limits.max_humidity {
        return Err("Minimum tolerated humidity must be below the maximum");
    }
    if limits.min_humidity < 0.0 || limits.max_humidity > 100.0 {
        return Err("Tolerated humidity must lie between 0 and 100%");
    }
    Ok(())
}

fn validate_ideal_range(range: &IdealRange) -> Result<(), &'static str> {
    if !(range.min.is_finite() && range.max.is_finite() && range.ideal.is_finite()) {
        return Err("Ideal ranges must be finite numbers");
    }
    if range.min > range.max || !range.contains(range.ideal) {
        return Err("Ideal value must lie inside its range");
    }
    Ok(())
}

/// Validate ideal ranges: each ordered, each ideal value inside its range
pub fn validate_ideal_conditions(ideal: &IdealConditions) -> Result<(), &'static str> {
    validate_ideal_range(&ideal.temperature)?;
    validate_ideal_range(&ideal.humidity)?;
    validate_ideal_range(&ideal.light_hours)?;
    if ideal.humidity.min < 0.0 || ideal.humidity.max > 100.0 {
        return Err("Ideal humidity must lie between 0 and 100%");
    }
    if ideal.light_hours.max > 24.0 {
        return Err("Ideal light exposure cannot exceed 24 hours");
    }
    Ok(())
}

fn validate_condition_rules(rules: &[ConditionRule]) -> Result<(), &'static str> {
    for rule in rules {
        if rule.priority == Some(0) {
            return Err("Rule priority must be at least 1");
        }
        if rule.advice.is_blank() {
            return Err("Rule advice cannot be empty");
        }
        if !rule.when.is_well_formed() {
            return Err("Rule condition is malformed");
        }
    }
    Ok(())
}

/// Validate every rule list of an entry
pub fn validate_care_rules(rules: &CareRules) -> Result<(), &'static str> {
    validate_condition_rules(&rules.temperature)?;
    validate_condition_rules(&rules.humidity)?;
    validate_condition_rules(&rules.watering)?;
    validate_condition_rules(&rules.special)?;
    if rules.seasonal.iter().any(|tip| tip.advice.is_blank()) {
        return Err("Seasonal advice cannot be empty");
    }
    Ok(())
}

/// Validate a complete catalog entry
pub fn validate_plant_rule(rule: &PlantRule) -> Result<(), &'static str> {
    if rule.name.is_blank() {
        return Err("Plant group name cannot be empty");
    }
    validate_tolerance_limits(&rule.tolerance_limits)?;
    validate_ideal_conditions(&rule.ideal_conditions)?;
    validate_care_rules(&rule.care_rules)?;
    let stage_texts = rule
        .growth_stages
        .values()
        .flat_map(|stage| stage.watering.iter().chain(stage.fertilizing.iter()));
    for text in stage_texts {
        if text.is_blank() {
            return Err("Growth stage advice cannot be empty");
        }
    }
    Ok(())
}

// ============================================================================
// Task Validations
// ============================================================================

/// Validate the scheduling fields of the task form
pub fn validate_task_schedule(schedule: &TaskSchedule) -> Result<(), &'static str> {
    match schedule.duration_type {
        DurationType::Stage => {
            let Some(start) = schedule.start_date else {
                return Err("Please choose a start date");
            };
            let Some(end) = schedule.end_date else {
                return Err("Please choose an end date");
            };
            if end < start {
                return Err("End date cannot be earlier than start date");
            }
            validate_interval(schedule.interval_days)
        }
        DurationType::Continuous => validate_interval(schedule.interval_days),
        DurationType::Once => {
            if schedule.once_date.is_none() {
                return Err("Please choose a date for the one-off task");
            }
            Ok(())
        }
    }
}

fn validate_interval(interval_days: Option<i64>) -> Result<(), &'static str> {
    match interval_days {
        None => Err("Please enter the interval in days"),
        Some(days) if days <= 0 => Err("Interval must be a positive number of days"),
        Some(_) => Ok(()),
    }
}
