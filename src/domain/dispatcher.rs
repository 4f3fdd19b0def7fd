//! Sensor package dispatch. Maps a workout code to its record and checks the
//! positional data against the fields that workout needs.

use super::errors::DomainError;
use super::training::Training;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Workout codes understood by the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkoutKind {
    Swimming,
    Running,
    SportsWalking,
}

impl WorkoutKind {
    pub const ALL: [WorkoutKind; 3] = [
        WorkoutKind::Swimming,
        WorkoutKind::Running,
        WorkoutKind::SportsWalking,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            WorkoutKind::Swimming => "SWM",
            WorkoutKind::Running => "RUN",
            WorkoutKind::SportsWalking => "WLK",
        }
    }

    /// Positional field names, in package order.
    pub fn fields(&self) -> &'static [Field] {
        const BASE_RUN: &[Field] = &[Field::Action, Field::Duration, Field::Weight];
        const WALK: &[Field] = &[Field::Action, Field::Duration, Field::Weight, Field::Height];
        const SWIM: &[Field] = &[
            Field::Action,
            Field::Duration,
            Field::Weight,
            Field::PoolLength,
            Field::PoolLaps,
        ];
        match self {
            WorkoutKind::Swimming => SWIM,
            WorkoutKind::Running => BASE_RUN,
            WorkoutKind::SportsWalking => WALK,
        }
    }

    pub fn arity(&self) -> usize {
        self.fields().len()
    }
}

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for WorkoutKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WorkoutKind::ALL
            .into_iter()
            .find(|k| k.code() == s)
            .ok_or_else(|| DomainError::UnknownActivityCode(s.to_string()))
    }
}

/// One positional slot of a sensor package.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Action,
    Duration,
    Weight,
    Height,
    PoolLength,
    PoolLaps,
}

impl Field {
    pub fn name(&self) -> &'static str {
        match self {
            Field::Action => "action count",
            Field::Duration => "duration (h)",
            Field::Weight => "weight (kg)",
            Field::Height => "height (cm)",
            Field::PoolLength => "pool length (m)",
            Field::PoolLaps => "pool laps",
        }
    }

    /// Counted slots take non-negative whole numbers only.
    pub fn is_count(&self) -> bool {
        matches!(self, Field::Action | Field::PoolLaps)
    }
}

/// Raw sensor sample: workout code plus positional readings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorPackage {
    pub workout_type: String,
    pub data: Vec<f64>,
}

impl SensorPackage {
    pub fn new(workout_type: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            workout_type: workout_type.into(),
            data,
        }
    }

    pub fn to_training(&self) -> Result<Training, DomainError> {
        read_package(&self.workout_type, &self.data)
    }
}

/// Build the training record for `workout_type` from positional `data`.
///
/// The data must match the workout's field list exactly: no truncation, no padding.
pub fn read_package(workout_type: &str, data: &[f64]) -> Result<Training, DomainError> {
    let kind: WorkoutKind = workout_type.parse()?;
    let fields = kind.fields();
    if data.len() != fields.len() {
        return Err(mismatch(
            kind,
            format!("expected {} values, got {}", fields.len(), data.len()),
        ));
    }
    for (field, &value) in fields.iter().zip(data) {
        check_value(kind, *field, value)?;
    }

    match kind {
        WorkoutKind::Swimming => {
            Training::swimming(data[0] as u64, data[1], data[2], data[3], data[4] as u64)
        }
        WorkoutKind::Running => Training::running(data[0] as u64, data[1], data[2]),
        WorkoutKind::SportsWalking => {
            Training::sports_walking(data[0] as u64, data[1], data[2], data[3])
        }
    }
}

fn check_value(kind: WorkoutKind, field: Field, value: f64) -> Result<(), DomainError> {
    if !value.is_finite() {
        return Err(mismatch(kind, format!("{} is not a finite number", field.name())));
    }
    if field.is_count() && (value < 0.0 || value.fract() != 0.0) {
        return Err(mismatch(
            kind,
            format!("{} must be a non-negative integer, got {}", field.name(), value),
        ));
    }
    // 2^64 is the first whole f64 a u64 cannot hold
    if field.is_count() && value >= u64::MAX as f64 {
        return Err(mismatch(
            kind,
            format!("{} is out of range, got {}", field.name(), value),
        ));
    }
    Ok(())
}

fn mismatch(kind: WorkoutKind, reason: String) -> DomainError {
    DomainError::ArgumentMismatch {
        code: kind.code().to_string(),
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Activity;

    #[test]
    fn test_parse_codes() {
        assert_eq!("SWM".parse::<WorkoutKind>().unwrap(), WorkoutKind::Swimming);
        assert_eq!("RUN".parse::<WorkoutKind>().unwrap(), WorkoutKind::Running);
        assert_eq!(
            "WLK".parse::<WorkoutKind>().unwrap(),
            WorkoutKind::SportsWalking
        );
        assert!(matches!(
            "run".parse::<WorkoutKind>(),
            Err(DomainError::UnknownActivityCode(_))
        ));
    }

    #[test]
    fn test_read_package_selects_variant() {
        let swim = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();
        assert_eq!(
            *swim.activity(),
            Activity::Swimming {
                pool_length_m: 25.0,
                pool_laps: 40
            }
        );
        let walk = read_package("WLK", &[9000.0, 1.0, 75.0, 180.0]).unwrap();
        assert_eq!(*walk.activity(), Activity::SportsWalking { height_cm: 180.0 });
        let run = read_package("RUN", &[15000.0, 1.0, 75.0]).unwrap();
        assert_eq!(*run.activity(), Activity::Running);
        assert_eq!(run.action(), 15000);
    }

    #[test]
    fn test_running_round_trip_matches_formula() {
        let summary = read_package("RUN", &[15000.0, 1.0, 75.0]).unwrap().summary();
        let speed = 15000.0 * 0.65 / 1000.0 / 1.0;
        let expected = (18.0 * speed - 20.0) * 75.0 / 1000.0 * 1.0 * 60.0;
        assert!((summary.calories_kcal - expected).abs() < 1e-9);
    }

    #[test]
    fn test_walking_package_values() {
        let summary = read_package("WLK", &[9000.0, 1.0, 75.0, 180.0])
            .unwrap()
            .summary();
        assert!((summary.distance_km - 5.85).abs() < 1e-9);
        assert!((summary.mean_speed_kmh - 5.85).abs() < 1e-9);
        let floor = (5.85_f64 * 5.85 / 180.0).floor();
        let expected = (0.035 * 75.0 + floor * 0.029 * 75.0) * 60.0;
        assert!((summary.calories_kcal - expected).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_code() {
        assert_eq!(
            read_package("XYZ", &[1.0, 2.0, 3.0]),
            Err(DomainError::UnknownActivityCode("XYZ".to_string()))
        );
    }

    #[test]
    fn test_missing_argument() {
        assert!(matches!(
            read_package("RUN", &[1.0, 2.0]),
            Err(DomainError::ArgumentMismatch { ref code, .. }) if code == "RUN"
        ));
    }

    #[test]
    fn test_extra_argument_not_truncated() {
        assert!(matches!(
            read_package("RUN", &[15000.0, 1.0, 75.0, 180.0]),
            Err(DomainError::ArgumentMismatch { .. })
        ));
        assert!(matches!(
            read_package("SWM", &[720.0, 1.0, 80.0, 25.0]),
            Err(DomainError::ArgumentMismatch { .. })
        ));
    }

    #[test]
    fn test_count_fields_must_be_whole() {
        assert!(matches!(
            read_package("RUN", &[150.5, 1.0, 75.0]),
            Err(DomainError::ArgumentMismatch { .. })
        ));
        assert!(matches!(
            read_package("SWM", &[720.0, 1.0, 80.0, 25.0, -3.0]),
            Err(DomainError::ArgumentMismatch { .. })
        ));
        assert!(matches!(
            read_package("WLK", &[9000.0, 1.0, f64::INFINITY, 180.0]),
            Err(DomainError::ArgumentMismatch { .. })
        ));
    }

    #[test]
    fn test_count_fields_out_of_range() {
        assert!(matches!(
            read_package("RUN", &[1e20, 1.0, 75.0]),
            Err(DomainError::ArgumentMismatch { ref code, .. }) if code == "RUN"
        ));
        assert!(matches!(
            read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 1e30]),
            Err(DomainError::ArgumentMismatch { ref code, .. }) if code == "SWM"
        ));
        assert!(matches!(
            read_package("WLK", &[2f64.powi(64), 1.0, 75.0, 180.0]),
            Err(DomainError::ArgumentMismatch { .. })
        ));
        let run = read_package("RUN", &[2f64.powi(53), 1.0, 75.0]).unwrap();
        assert_eq!(run.action(), 1u64 << 53);
    }

    #[test]
    fn test_zero_duration_package() {
        assert_eq!(
            read_package("RUN", &[15000.0, 0.0, 75.0]),
            Err(DomainError::InvalidDuration(0.0))
        );
    }

    #[test]
    fn test_sensor_package_json() {
        let pkg: SensorPackage =
            serde_json::from_str(r#"{"workout_type":"SWM","data":[720,1,80,25,40]}"#).unwrap();
        assert_eq!(pkg, SensorPackage::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]));
        assert!(pkg.to_training().is_ok());
    }
}
