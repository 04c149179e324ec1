use std::fmt;

use nalgebra::Complex;
use serde::{
    Deserialize,
    Serialize
};

use crate::equation::monotonicinterval::{
    MonotonicInterval,
    MonotonicType
};
use crate::equation::univariateequation::{
    Extremum,
    UnivariateEquation
};
use crate::math::complexformat::{
    infinity,
    nan,
    neg_infinity,
    real
};

/// `k * x + b = 0`
///
/// `k == 0` is accepted here and treated as the constant equation `b = 0`;
/// the factory never produces it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearEquation {
    k: f64,
    b: f64
}

impl LinearEquation {
    pub fn new(k: f64, b: f64) -> LinearEquation {
        LinearEquation { k, b }
    }

    pub fn k(&self) -> f64 {
        self.k
    }

    pub fn b(&self) -> f64 {
        self.b
    }
}

impl UnivariateEquation for LinearEquation {
    fn solve(&self) -> Vec<Complex<f64>> {
        if self.k == 0.0 {
            if self.b != 0.0 {
                return vec![nan()];
            }
            return vec![neg_infinity(), infinity()];
        }
        vec![real(-self.b / self.k)]
    }

    fn evaluate(&self, x: Complex<f64>) -> Complex<f64> {
        real(self.k) * x + real(self.b)
    }

    fn minimum(&self) -> Extremum {
        if self.k == 0.0 {
            Extremum::new(neg_infinity(), real(self.b))
        } else if self.k > 0.0 {
            Extremum::new(neg_infinity(), neg_infinity())
        } else {
            Extremum::new(infinity(), neg_infinity())
        }
    }

    fn maximum(&self) -> Extremum {
        if self.k == 0.0 {
            Extremum::new(infinity(), real(self.b))
        } else if self.k > 0.0 {
            Extremum::new(infinity(), infinity())
        } else {
            Extremum::new(neg_infinity(), infinity())
        }
    }

    // Trend follows the sign of the offset `b`, not of the slope.
    fn monotonic_intervals(&self) -> Vec<MonotonicInterval> {
        vec![MonotonicInterval::whole_line(MonotonicType::from_sign(self.b))]
    }

    fn describe(&self) -> String {
        let mut parts: Vec<String> = Vec::with_capacity(2);
        if self.k != 0.0 {
            parts.push(format!("{:+.6} * x", self.k));
        }
        if self.b != 0.0 {
            parts.push(format!("{:+.6}", self.b));
        }
        if parts.is_empty() {
            parts.push("0".to_owned());
        }
        format!("{} = 0", parts.join(" "))
    }

    fn type_label(&self) -> &'static str {
        if self.k == 0.0 {
            "constant"
        } else {
            "linear"
        }
    }
}

impl fmt::Display for LinearEquation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.describe())
    }
}
