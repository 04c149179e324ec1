use std::fmt;

use nalgebra::Complex;
use serde::{
    Deserialize,
    Serialize
};

use crate::math::complexformat::{
    infinity,
    neg_infinity,
    representative
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MonotonicType {
    Ascending,
    Descending,
    Stable
}

impl MonotonicType {
    /// Trend of a line whose trend is decided by the sign of `sign_term`.
    pub fn from_sign(sign_term: f64) -> MonotonicType {
        if sign_term < 0.0 {
            MonotonicType::Descending
        } else {
            MonotonicType::Ascending
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            MonotonicType::Ascending => "ascending",
            MonotonicType::Descending => "descending",
            MonotonicType::Stable => "stable"
        }
    }
}

impl fmt::Display for MonotonicType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// MonotonicInterval
// ─────────────────────────────────────────────────────────────────────────────
//
// Bounds are complex so that ±∞ and the roots share one numeric type; in
// practice the imaginary part is always zero. Infinite bounds are open.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonotonicInterval {
    left_bound: Complex<f64>,
    include_left_bound: bool,
    right_bound: Complex<f64>,
    include_right_bound: bool,
    trend: MonotonicType
}

impl MonotonicInterval {
    pub fn new(left_bound: Complex<f64>,
               include_left_bound: bool,
               right_bound: Complex<f64>,
               include_right_bound: bool,
               trend: MonotonicType) -> MonotonicInterval {
        MonotonicInterval {
            left_bound,
            include_left_bound: include_left_bound && left_bound.re.is_finite(),
            right_bound,
            include_right_bound: include_right_bound && right_bound.re.is_finite(),
            trend
        }
    }

    /// `(-∞; +∞)` with the given trend.
    pub fn whole_line(trend: MonotonicType) -> MonotonicInterval {
        MonotonicInterval::new(neg_infinity(), false, infinity(), false, trend)
    }

    /// `(-∞; vertex]`
    pub fn ending_at(vertex: Complex<f64>, trend: MonotonicType) -> MonotonicInterval {
        MonotonicInterval::new(neg_infinity(), false, vertex, true, trend)
    }

    /// `[vertex; +∞)`
    pub fn starting_at(vertex: Complex<f64>, trend: MonotonicType) -> MonotonicInterval {
        MonotonicInterval::new(vertex, true, infinity(), false, trend)
    }

    pub fn left_bound(&self) -> Complex<f64> {
        self.left_bound
    }

    pub fn include_left_bound(&self) -> bool {
        self.include_left_bound
    }

    pub fn right_bound(&self) -> Complex<f64> {
        self.right_bound
    }

    pub fn include_right_bound(&self) -> bool {
        self.include_right_bound
    }

    pub fn trend(&self) -> MonotonicType {
        self.trend
    }

    pub fn contains(&self, x: f64) -> bool {
        let above_left = if self.include_left_bound {
            x >= self.left_bound.re
        } else {
            x > self.left_bound.re
        };
        let below_right = if self.include_right_bound {
            x <= self.right_bound.re
        } else {
            x < self.right_bound.re
        };
        above_left && below_right
    }
}

impl fmt::Display for MonotonicInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let left_delimiter = if self.include_left_bound { "[" } else { "(" };
        let right_delimiter = if self.include_right_bound { "]" } else { ")" };
        write!(f, "{}{}; {}{} - {}",
               left_delimiter,
               representative(self.left_bound),
               representative(self.right_bound),
               right_delimiter,
               self.trend)
    }
}
