//! Normalised underwriting risk scores
//!
//! Each scorer combines its inputs into a `base_score` in [0, 1] and records
//! the individual contributions in `factors` for reporting.

use crate::policy::RiskFactors;
use serde::{Deserialize, Serialize};

/// Confidence assigned to a score before data-completeness adjustments
pub const BASE_CONFIDENCE: f64 = 0.95;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskScore {
    pub base_score: f64,
    pub confidence: f64,
    pub factors: RiskFactors,
}

impl RiskScore {
    pub fn new(base_score: f64) -> Self {
        Self {
            base_score,
            confidence: BASE_CONFIDENCE,
            factors: RiskFactors::new(),
        }
    }

    pub fn add_factor(&mut self, name: &str, value: f64) {
        self.factors.insert(name, value);
    }
}

/// Car risk from driver age, vehicle score, accident count and location
pub fn car_risk_score(driver_age: u32, vehicle_score: f64, accidents: usize, location_risk: f64) -> RiskScore {
    let mut base_score = 0.0;

    if driver_age < 25 || driver_age > 70 {
        base_score += 0.3;
    } else if driver_age < 30 || driver_age > 60 {
        base_score += 0.2;
    }

    base_score += vehicle_score;
    base_score += accidents as f64 * 0.2;
    base_score += location_risk;

    let mut score = RiskScore::new(base_score.min(1.0));
    score.add_factor("age", driver_age as f64);
    score.add_factor("vehicle", vehicle_score);
    score.add_factor("accidents", accidents as f64);
    score.add_factor("location", location_risk);
    score
}

/// Health risk averaged over age, medical condition, lifestyle and occupation
pub fn health_risk_score(age: u32, current_health: f64, lifestyle_score: f64, occupation_risk: f64) -> RiskScore {
    let age_factor = age as f64 * 0.01;
    let total = age_factor + current_health + lifestyle_score + occupation_risk;

    let mut score = RiskScore::new((total / 4.0).min(1.0));
    score.add_factor("age", age_factor);
    score.add_factor("medical", current_health);
    score.add_factor("lifestyle", lifestyle_score);
    score.add_factor("occupation", occupation_risk);
    score
}

/// Site and building inputs for property scoring
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PropertyRiskInputs {
    pub natural_disaster: f64,
    pub crime_rate: f64,
    pub construction_quality: f64,
    pub maintenance: f64,
    pub utilities_condition: f64,
    pub security_score: f64,
    pub building_age: u32,
}

impl Default for PropertyRiskInputs {
    fn default() -> Self {
        Self {
            natural_disaster: 0.0,
            crime_rate: 0.0,
            construction_quality: 0.5,
            maintenance: 0.5,
            utilities_condition: 0.5,
            security_score: 0.0,
            building_age: 0,
        }
    }
}

/// Property risk; security reduces the score, the result is clamped to [0, 1]
pub fn property_risk_score(inputs: &PropertyRiskInputs) -> RiskScore {
    let age_factor = (inputs.building_age as f64 * 0.02).min(1.0);
    let condition = (inputs.construction_quality + inputs.maintenance + inputs.utilities_condition) / 3.0;

    let base_score = inputs.natural_disaster + inputs.crime_rate + age_factor - inputs.security_score + condition;

    let mut score = RiskScore::new(base_score.clamp(0.0, 1.0));
    score.add_factor("location", (inputs.natural_disaster + inputs.crime_rate) / 2.0);
    score.add_factor("age", age_factor);
    score.add_factor("security", inputs.security_score);
    score.add_factor("condition", condition);
    score
}

/// Life risk from age, health, lifestyle factors and family history
///
/// Confidence drops when lifestyle data (×0.9) or family history (×0.95) is
/// missing.
pub fn life_risk_score(
    age: u32,
    health_score: f64,
    lifestyle_factors: &RiskFactors,
    family_history: &[String],
) -> RiskScore {
    let age_factor = 0.01 * age as f64;
    let lifestyle_risk: f64 = lifestyle_factors.values().sum();
    let family_risk = 0.1 * family_history.len() as f64;

    let total = age_factor + health_score + lifestyle_risk + family_risk;
    let mut score = RiskScore::new((total / 4.0).min(1.0));
    score.add_factor("age", age_factor);
    score.add_factor("health", health_score);
    score.add_factor("lifestyle", lifestyle_risk);
    score.add_factor("family_history", family_risk);

    if lifestyle_factors.is_empty() {
        score.confidence *= 0.9;
    }
    if family_history.is_empty() {
        score.confidence *= 0.95;
    }

    score
}
