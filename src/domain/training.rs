//! Training records. Common fields plus a closed set of activity variants.
//!
//! Every variant supplies its own calorie formula through an exhaustive match,
//! so there is no base record without one.

use super::coefficients::{M_IN_KM, MIN_IN_H, RUNNING, SWIMMING, WALKING};
use super::errors::DomainError;
use super::summary::WorkoutSummary;

/// Activity-specific data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Activity {
    Running,
    SportsWalking { height_cm: f64 },
    Swimming { pool_length_m: f64, pool_laps: u64 },
}

impl Activity {
    /// Label shown in the summary.
    pub fn label(&self) -> &'static str {
        match self {
            Activity::Running => "Running",
            Activity::SportsWalking { .. } => "SportsWalking",
            Activity::Swimming { .. } => "Swimming",
        }
    }

    fn step_length_m(&self) -> f64 {
        match self {
            Activity::Running => RUNNING.step_length_m,
            Activity::SportsWalking { .. } => WALKING.step_length_m,
            Activity::Swimming { .. } => SWIMMING.stroke_length_m,
        }
    }
}

/// One workout sample. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Training {
    action: u64,
    duration_h: f64,
    weight_kg: f64,
    activity: Activity,
}

impl Training {
    /// Build a record. Fails with `InvalidDuration` unless `duration_h` is finite and > 0.
    pub fn new(
        action: u64,
        duration_h: f64,
        weight_kg: f64,
        activity: Activity,
    ) -> Result<Self, DomainError> {
        if !duration_h.is_finite() || duration_h <= 0.0 {
            return Err(DomainError::InvalidDuration(duration_h));
        }
        Ok(Self {
            action,
            duration_h,
            weight_kg,
            activity,
        })
    }

    pub fn running(action: u64, duration_h: f64, weight_kg: f64) -> Result<Self, DomainError> {
        Self::new(action, duration_h, weight_kg, Activity::Running)
    }

    pub fn sports_walking(
        action: u64,
        duration_h: f64,
        weight_kg: f64,
        height_cm: f64,
    ) -> Result<Self, DomainError> {
        Self::new(
            action,
            duration_h,
            weight_kg,
            Activity::SportsWalking { height_cm },
        )
    }

    pub fn swimming(
        action: u64,
        duration_h: f64,
        weight_kg: f64,
        pool_length_m: f64,
        pool_laps: u64,
    ) -> Result<Self, DomainError> {
        Self::new(
            action,
            duration_h,
            weight_kg,
            Activity::Swimming {
                pool_length_m,
                pool_laps,
            },
        )
    }

    pub fn action(&self) -> u64 {
        self.action
    }

    pub fn duration_h(&self) -> f64 {
        self.duration_h
    }

    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    pub fn activity(&self) -> &Activity {
        &self.activity
    }

    /// Distance in km from the action count and the variant's step (or stroke) length.
    pub fn distance_km(&self) -> f64 {
        self.action as f64 * self.activity.step_length_m() / M_IN_KM
    }

    /// Mean speed in km/h. Swimming derives it from the pool, not from the action count.
    pub fn mean_speed_kmh(&self) -> f64 {
        match self.activity {
            Activity::Swimming {
                pool_length_m,
                pool_laps,
            } => pool_length_m * pool_laps as f64 / M_IN_KM / self.duration_h,
            _ => self.distance_km() / self.duration_h,
        }
    }

    /// Spent calories in kcal.
    pub fn spent_calories(&self) -> f64 {
        let speed = self.mean_speed_kmh();
        match self.activity {
            Activity::Running => {
                (RUNNING.speed_multiplier * speed - RUNNING.speed_shift) * self.weight_kg / M_IN_KM
                    * self.duration_h
                    * MIN_IN_H
            }
            Activity::SportsWalking { height_cm } => {
                // floor division: only whole multiples of the height count
                let speed_height = (speed * speed / height_cm).floor();
                (WALKING.weight_multiplier * self.weight_kg
                    + speed_height * WALKING.speed_height_multiplier * self.weight_kg)
                    * self.duration_h
                    * MIN_IN_H
            }
            Activity::Swimming { .. } => {
                (speed + SWIMMING.speed_shift) * SWIMMING.weight_multiplier * self.weight_kg
            }
        }
    }

    pub fn summary(&self) -> WorkoutSummary {
        WorkoutSummary {
            training_type: self.activity.label().to_string(),
            duration_h: self.duration_h,
            distance_km: self.distance_km(),
            mean_speed_kmh: self.mean_speed_kmh(),
            calories_kcal: self.spent_calories(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < EPS,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_running_metrics() {
        let t = Training::running(15000, 1.0, 75.0).unwrap();
        assert_close(t.distance_km(), 9.75);
        assert_close(t.mean_speed_kmh(), 9.75);
        let expected = (18.0 * 9.75 - 20.0) * 75.0 / 1000.0 * 1.0 * 60.0;
        assert_close(t.spent_calories(), expected);
        assert_close(t.spent_calories(), 699.75);
    }

    #[test]
    fn test_walking_metrics() {
        let t = Training::sports_walking(9000, 1.0, 75.0, 180.0).unwrap();
        assert_close(t.distance_km(), 5.85);
        assert_close(t.mean_speed_kmh(), 5.85);
        // 5.85^2 / 180 floors to 0, leaving only the weight term
        assert_close(t.spent_calories(), 0.035 * 75.0 * 60.0);
    }

    #[test]
    fn test_walking_floor_term_scales_with_weight() {
        // 20 km in 1 h: 400 / 180 floors to 2
        let t = Training::sports_walking(20_000_000 / 650, 1.0, 80.0, 180.0).unwrap();
        let speed = t.mean_speed_kmh();
        let floor = (speed * speed / 180.0).floor();
        assert_eq!(floor, 2.0);
        let expected = (0.035 * 80.0 + floor * 0.029 * 80.0) * 60.0;
        assert_close(t.spent_calories(), expected);
    }

    #[test]
    fn test_walking_floor_rounds_down_for_negative_height() {
        // 5.85^2 / -180 is about -0.19, which floors to -1
        let t = Training::sports_walking(9000, 1.0, 75.0, -180.0).unwrap();
        let expected = (0.035 * 75.0 - 1.0 * 0.029 * 75.0) * 60.0;
        assert_close(t.spent_calories(), expected);
    }

    #[test]
    fn test_swimming_metrics() {
        let t = Training::swimming(720, 1.0, 80.0, 25.0, 40).unwrap();
        assert_close(t.distance_km(), 720.0 * 1.38 / 1000.0);
        assert_close(t.mean_speed_kmh(), 1.0);
        assert_close(t.spent_calories(), 336.0);
    }

    #[test]
    fn test_swimming_ignores_action_count() {
        let base = Training::swimming(0, 1.5, 70.0, 50.0, 30).unwrap();
        for action in [1, 720, 1_000_000] {
            let t = Training::swimming(action, 1.5, 70.0, 50.0, 30).unwrap();
            assert_eq!(t.mean_speed_kmh(), base.mean_speed_kmh());
            assert_eq!(t.spent_calories(), base.spent_calories());
        }
    }

    #[test]
    fn test_distance_and_speed_non_negative() {
        for action in [0, 1, 500, 123_456] {
            for duration in [0.01, 0.5, 1.0, 3.25] {
                let records = [
                    Training::running(action, duration, 70.0).unwrap(),
                    Training::sports_walking(action, duration, 70.0, 175.0).unwrap(),
                    Training::swimming(action, duration, 70.0, 25.0, action / 10).unwrap(),
                ];
                for t in records {
                    assert!(t.distance_km() >= 0.0, "{:?}", t.activity());
                    assert!(t.mean_speed_kmh() >= 0.0, "{:?}", t.activity());
                }
            }
        }
    }

    #[test]
    fn test_zero_duration_rejected() {
        assert_eq!(
            Training::running(100, 0.0, 70.0),
            Err(DomainError::InvalidDuration(0.0))
        );
        assert!(matches!(
            Training::swimming(100, -1.0, 70.0, 25.0, 4),
            Err(DomainError::InvalidDuration(_))
        ));
        assert!(matches!(
            Training::sports_walking(100, f64::NAN, 70.0, 170.0),
            Err(DomainError::InvalidDuration(_))
        ));
    }

    #[test]
    fn test_summary_carries_label_and_metrics() {
        let t = Training::swimming(720, 1.0, 80.0, 25.0, 40).unwrap();
        let s = t.summary();
        assert_eq!(s.training_type, "Swimming");
        assert_eq!(s.duration_h, 1.0);
        assert_close(s.mean_speed_kmh, 1.0);
        assert_close(s.calories_kcal, 336.0);
    }
}
