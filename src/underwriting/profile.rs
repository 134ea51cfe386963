//! Typed underwriting inputs per policy type

use crate::error::FinanceError;
use crate::policy::PolicyType;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Prior driving record of the insured driver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DrivingHistory {
    #[default]
    Clean,
    MinorViolations,
    MajorViolations,
    Accidents,
}

impl DrivingHistory {
    pub fn multiplier(&self) -> f64 {
        match self {
            DrivingHistory::Clean => 1.0,
            DrivingHistory::MinorViolations => 1.2,
            DrivingHistory::MajorViolations => 1.5,
            DrivingHistory::Accidents => 1.8,
        }
    }
}

impl FromStr for DrivingHistory {
    type Err = FinanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "CLEAN" => Ok(DrivingHistory::Clean),
            "MINOR_VIOLATIONS" => Ok(DrivingHistory::MinorViolations),
            "MAJOR_VIOLATIONS" => Ok(DrivingHistory::MajorViolations),
            "ACCIDENTS" => Ok(DrivingHistory::Accidents),
            _ => Err(FinanceError::unknown("driving history", s)),
        }
    }
}

/// Where the vehicle is usually parked overnight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ParkingLocation {
    #[default]
    Garage,
    Driveway,
    Street,
    PublicParking,
}

impl ParkingLocation {
    pub fn multiplier(&self) -> f64 {
        match self {
            ParkingLocation::Garage => 1.0,
            ParkingLocation::Driveway => 1.1,
            ParkingLocation::Street => 1.3,
            ParkingLocation::PublicParking => 1.4,
        }
    }
}

impl FromStr for ParkingLocation {
    type Err = FinanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "GARAGE" => Ok(ParkingLocation::Garage),
            "DRIVEWAY" => Ok(ParkingLocation::Driveway),
            "STREET" => Ok(ParkingLocation::Street),
            "PUBLIC_PARKING" => Ok(ParkingLocation::PublicParking),
            _ => Err(FinanceError::unknown("parking location", s)),
        }
    }
}

/// Hazard rating of an insured property's location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LocationRisk {
    #[default]
    Low,
    Medium,
    High,
}

impl LocationRisk {
    pub fn multiplier(&self) -> f64 {
        match self {
            LocationRisk::Low => 1.0,
            LocationRisk::Medium => 1.3,
            LocationRisk::High => 1.6,
        }
    }
}

impl FromStr for LocationRisk {
    type Err = FinanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "LOW" => Ok(LocationRisk::Low),
            "MEDIUM" => Ok(LocationRisk::Medium),
            "HIGH" => Ok(LocationRisk::High),
            _ => Err(FinanceError::unknown("location risk", s)),
        }
    }
}

/// Vehicle and driver details for car policies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarProfile {
    /// Vehicle age in years
    #[serde(default)]
    pub vehicle_age: f64,

    #[serde(default = "default_annual_mileage")]
    pub annual_mileage: f64,

    #[serde(default)]
    pub driving_history: DrivingHistory,

    #[serde(default)]
    pub parking_location: ParkingLocation,
}

fn default_annual_mileage() -> f64 {
    12_000.0
}

impl Default for CarProfile {
    fn default() -> Self {
        Self {
            vehicle_age: 0.0,
            annual_mileage: default_annual_mileage(),
            driving_history: DrivingHistory::default(),
            parking_location: ParkingLocation::default(),
        }
    }
}

/// Risk inputs for a term premium, one shape per policy type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "UPPERCASE")]
pub enum UnderwritingProfile {
    Life { age: f64 },
    Car(CarProfile),
    Health { pre_conditions: f64 },
    Property { location_risk: LocationRisk },
}

impl UnderwritingProfile {
    /// The policy type this profile describes
    pub fn policy_type(&self) -> PolicyType {
        match self {
            UnderwritingProfile::Life { .. } => PolicyType::Life,
            UnderwritingProfile::Car(_) => PolicyType::Car,
            UnderwritingProfile::Health { .. } => PolicyType::Health,
            UnderwritingProfile::Property { .. } => PolicyType::Property,
        }
    }

    /// Profile used when only the policy type is known
    pub fn default_for(policy_type: PolicyType) -> Self {
        match policy_type {
            PolicyType::Life => UnderwritingProfile::Life { age: 30.0 },
            PolicyType::Car => UnderwritingProfile::Car(CarProfile::default()),
            PolicyType::Health => UnderwritingProfile::Health { pre_conditions: 0.0 },
            PolicyType::Property => UnderwritingProfile::Property {
                location_risk: LocationRisk::Low,
            },
        }
    }
}
