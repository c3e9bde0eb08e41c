/// Tolerance used for every slope and angle comparison
pub const EPSILON: f64 = 1e-7;

/// Angular bounds of one recursive branch inside an octant.
/// 0 is the primary axis, 1 is the 45° diagonal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlopeInterval {
    pub start: f64,
    pub end: f64,
}

impl SlopeInterval {
    /// The whole octant
    pub const FULL: SlopeInterval = SlopeInterval { start: 0.0, end: 1.0 };

    pub fn new(start: f64, end: f64) -> Self {
        SlopeInterval { start, end }
    }

    /// Restrict only the end bound, keeping the axis
    pub fn up_to(end: f64) -> Self {
        SlopeInterval { start: 0.0, end }
    }

    /// Restrict only the start bound, keeping the diagonal
    pub fn starting_at(start: f64) -> Self {
        SlopeInterval { start, end: 1.0 }
    }

    /// Secondary offsets covered by this interval in column `d`, before any
    /// diagonal or circle clamping
    pub fn column_bounds(&self, d: i32) -> (i32, i32) {
        let d = d as f64;
        (round_half_up(d * self.start), round_half_up(d * self.end))
    }
}

/// Limit `x` to `[lo, hi]`, snapping values within epsilon of a bound onto it
pub fn clamp(x: f64, lo: f64, hi: f64) -> f64 {
    if x - lo < EPSILON {
        lo
    } else if x - hi > EPSILON {
        hi
    } else {
        x
    }
}

/// Clamp into the unit slope range
pub fn clamp_unit(x: f64) -> f64 {
    clamp(x, 0.0, 1.0)
}

/// Slope `dy / dx`, or 0 when `dx` is too close to zero to divide by
pub fn slope(dx: f64, dy: f64) -> f64 {
    if dx <= -EPSILON || dx >= EPSILON {
        dy / dx
    } else {
        0.0
    }
}

/// `a > b` with tolerance
pub fn exceeds(a: f64, b: f64) -> bool {
    a - b > EPSILON
}

pub fn round_half_up(value: f64) -> i32 {
    (0.5 + value).floor() as i32
}
