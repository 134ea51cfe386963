//! Term premiums from annual base rates
//!
//! premium = coverage × annual_rate × (term_months / 12) × risk_multiplier

use super::profile::UnderwritingProfile;
use crate::calculator::round_to_cents;
use crate::error::{FinanceError, Result};
use crate::policy::PolicyType;
use chrono::{Datelike, NaiveDate};

/// Annual rate for labels outside the known policy types
pub const DEFAULT_ANNUAL_BASE_RATE: f64 = 0.03;

/// Annual premium rate as a fraction of coverage
pub fn annual_base_rate(policy_type: &str) -> f64 {
    match PolicyType::from_label(policy_type) {
        Some(PolicyType::Life) => 0.005,
        Some(PolicyType::Car) => 0.04,
        Some(PolicyType::Health) => 0.06,
        Some(PolicyType::Property) => 0.02,
        None => DEFAULT_ANNUAL_BASE_RATE,
    }
}

/// Combined multiplier for an underwriting profile
pub fn risk_multiplier(profile: &UnderwritingProfile) -> f64 {
    let mut multiplier = 1.0;

    match profile {
        UnderwritingProfile::Car(car) => {
            if car.vehicle_age > 10.0 {
                multiplier *= 1.4;
            } else if car.vehicle_age > 5.0 {
                multiplier *= 1.2;
            }

            if car.annual_mileage > 20_000.0 {
                multiplier *= 1.3;
            } else if car.annual_mileage > 15_000.0 {
                multiplier *= 1.2;
            }

            multiplier *= car.driving_history.multiplier();
            multiplier *= car.parking_location.multiplier();
        }
        UnderwritingProfile::Life { age } => {
            if *age > 60.0 {
                multiplier *= 1.5;
            } else if *age > 40.0 {
                multiplier *= 1.2;
            }
        }
        UnderwritingProfile::Health { pre_conditions } => {
            multiplier *= 1.0 + 0.1 * pre_conditions;
        }
        UnderwritingProfile::Property { location_risk } => {
            multiplier *= location_risk.multiplier();
        }
    }

    multiplier
}

/// Premium for a policy term in months
///
/// The profile only adjusts the premium when it describes the same policy
/// type as `policy_type`; a mismatched or absent profile leaves it at 1.0.
pub fn calculate_term_premium(
    policy_type: &str,
    coverage_amount: f64,
    term_months: u32,
    profile: Option<&UnderwritingProfile>,
) -> Result<f64> {
    if coverage_amount <= 0.0 || term_months == 0 {
        return Err(FinanceError::InvalidTerm {
            coverage: coverage_amount,
            term_months,
        });
    }

    let base_premium = coverage_amount * annual_base_rate(policy_type);
    let term_years = term_months as f64 / 12.0;
    let mut premium = base_premium * term_years;

    if let Some(profile) = profile {
        if PolicyType::from_label(policy_type) == Some(profile.policy_type()) {
            premium *= risk_multiplier(profile);
        } else {
            log::debug!(
                "Ignoring {} profile for {} policy",
                profile.policy_type(),
                policy_type
            );
        }
    }

    Ok(round_to_cents(premium))
}

/// Whole months between two dates, minimum 1; 0 if `end` is not after `start`
pub fn calculate_policy_term(start: NaiveDate, end: NaiveDate) -> u32 {
    if end <= start {
        return 0;
    }

    let mut months = (end.year() - start.year()) * 12 + end.month() as i32 - start.month() as i32;
    // Partial final month does not count
    if end.day() < start.day() {
        months -= 1;
    }

    months.max(1) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::underwriting::{CarProfile, DrivingHistory, LocationRisk, ParkingLocation};
    use approx::assert_relative_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_base_rates() {
        assert_eq!(annual_base_rate("LIFE"), 0.005);
        assert_eq!(annual_base_rate("CAR"), 0.04);
        assert_eq!(annual_base_rate("HEALTH"), 0.06);
        assert_eq!(annual_base_rate("PROPERTY"), 0.02);
        assert_eq!(annual_base_rate("BOAT"), DEFAULT_ANNUAL_BASE_RATE);
    }

    #[test]
    fn test_term_premium_without_profile() {
        // 200000 * 0.005 * 2 years
        assert_eq!(calculate_term_premium("LIFE", 200_000.0, 24, None).unwrap(), 2000.0);
        // 10000 * 0.03 * 0.5 years
        assert_eq!(calculate_term_premium("BOAT", 10_000.0, 6, None).unwrap(), 150.0);
    }

    #[test]
    fn test_term_premium_rejects_non_positive_inputs() {
        assert!(matches!(
            calculate_term_premium("CAR", 0.0, 12, None),
            Err(FinanceError::InvalidTerm { .. })
        ));
        assert!(calculate_term_premium("CAR", 1000.0, 0, None).is_err());
        assert!(calculate_term_premium("CAR", -5.0, 12, None).is_err());
    }

    #[test]
    fn test_car_multiplier() {
        let profile = UnderwritingProfile::Car(CarProfile {
            vehicle_age: 12.0,
            annual_mileage: 18_000.0,
            driving_history: DrivingHistory::MinorViolations,
            parking_location: ParkingLocation::Street,
        });
        assert_relative_eq!(risk_multiplier(&profile), 1.4 * 1.2 * 1.2 * 1.3, epsilon = 1e-12);

        // 20000 * 0.04 * 1 year * multiplier
        let premium = calculate_term_premium("CAR", 20_000.0, 12, Some(&profile)).unwrap();
        assert_relative_eq!(premium, 2096.64, epsilon = 1e-9);
    }

    #[test]
    fn test_default_car_profile_is_neutral() {
        let profile = UnderwritingProfile::Car(CarProfile::default());
        assert_eq!(risk_multiplier(&profile), 1.0);
    }

    #[test]
    fn test_life_health_property_multipliers() {
        assert_eq!(risk_multiplier(&UnderwritingProfile::Life { age: 65.0 }), 1.5);
        assert_eq!(risk_multiplier(&UnderwritingProfile::Life { age: 45.0 }), 1.2);
        assert_eq!(risk_multiplier(&UnderwritingProfile::Life { age: 40.0 }), 1.0);
        assert_relative_eq!(
            risk_multiplier(&UnderwritingProfile::Health { pre_conditions: 3.0 }),
            1.3,
            epsilon = 1e-12
        );
        assert_eq!(
            risk_multiplier(&UnderwritingProfile::Property { location_risk: LocationRisk::High }),
            1.6
        );
    }

    #[test]
    fn test_mismatched_profile_is_ignored() {
        let profile = UnderwritingProfile::Life { age: 70.0 };
        let with = calculate_term_premium("CAR", 10_000.0, 12, Some(&profile)).unwrap();
        let without = calculate_term_premium("CAR", 10_000.0, 12, None).unwrap();
        assert_eq!(with, without);
    }

    #[test]
    fn test_policy_term_months() {
        assert_eq!(calculate_policy_term(date(2024, 1, 15), date(2025, 1, 15)), 12);
        assert_eq!(calculate_policy_term(date(2024, 1, 15), date(2025, 1, 14)), 11);
        assert_eq!(calculate_policy_term(date(2024, 3, 31), date(2024, 4, 30)), 1);
        // Less than a month still counts as one
        assert_eq!(calculate_policy_term(date(2024, 1, 1), date(2024, 1, 10)), 1);
    }

    #[test]
    fn test_policy_term_invalid_range() {
        assert_eq!(calculate_policy_term(date(2024, 1, 1), date(2024, 1, 1)), 0);
        assert_eq!(calculate_policy_term(date(2024, 6, 1), date(2024, 1, 1)), 0);
    }
}
