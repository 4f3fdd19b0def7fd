//! Formula coefficients. One constant set per activity, no shared mutable state.

/// Meters in one kilometer.
pub const M_IN_KM: f64 = 1000.0;
/// Minutes in one hour.
pub const MIN_IN_H: f64 = 60.0;

/// Step length shared by running and walking, in meters.
pub const STEP_LENGTH_M: f64 = 0.65;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunningCoefficients {
    pub step_length_m: f64,
    pub speed_multiplier: f64,
    pub speed_shift: f64,
}

pub const RUNNING: RunningCoefficients = RunningCoefficients {
    step_length_m: STEP_LENGTH_M,
    speed_multiplier: 18.0,
    speed_shift: 20.0,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WalkingCoefficients {
    pub step_length_m: f64,
    pub weight_multiplier: f64,
    pub speed_height_multiplier: f64,
}

pub const WALKING: WalkingCoefficients = WalkingCoefficients {
    step_length_m: STEP_LENGTH_M,
    weight_multiplier: 0.035,
    speed_height_multiplier: 0.029,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwimmingCoefficients {
    /// Stroke length, used only for distance.
    pub stroke_length_m: f64,
    pub speed_shift: f64,
    pub weight_multiplier: f64,
}

pub const SWIMMING: SwimmingCoefficients = SwimmingCoefficients {
    stroke_length_m: 1.38,
    speed_shift: 1.1,
    weight_multiplier: 2.0,
};
