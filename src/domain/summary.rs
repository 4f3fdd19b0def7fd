//! Workout summary. Read-only result of one training record.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSummary {
    pub training_type: String,
    pub duration_h: f64,
    pub distance_km: f64,
    pub mean_speed_kmh: f64,
    pub calories_kcal: f64,
}

impl WorkoutSummary {
    /// One-line report, every numeric field with exactly 3 decimals.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for WorkoutSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Training type: {}; Duration: {:.3} h; Distance: {:.3} km; Mean speed: {:.3} km/h; Calories: {:.3}.",
            self.training_type,
            self.duration_h,
            self.distance_km,
            self.mean_speed_kmh,
            self.calories_kcal
        )
    }
}
