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

/// `a = 0`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConstantEquation {
    a: f64
}

impl ConstantEquation {
    pub fn new(a: f64) -> ConstantEquation {
        ConstantEquation { a }
    }

    pub fn a(&self) -> f64 {
        self.a
    }
}

impl UnivariateEquation for ConstantEquation {
    fn solve(&self) -> Vec<Complex<f64>> {
        if self.a != 0.0 {
            return vec![nan()];
        }
        vec![neg_infinity(), infinity()]
    }

    fn evaluate(&self, _x: Complex<f64>) -> Complex<f64> {
        real(self.a)
    }

    fn minimum(&self) -> Extremum {
        Extremum::new(neg_infinity(), real(self.a))
    }

    fn maximum(&self) -> Extremum {
        Extremum::new(infinity(), real(self.a))
    }

    fn monotonic_intervals(&self) -> Vec<MonotonicInterval> {
        vec![MonotonicInterval::whole_line(MonotonicType::Stable)]
    }

    fn describe(&self) -> String {
        if self.a != 0.0 {
            format!("{:.6} != 0", self.a)
        } else {
            format!("{:.6} = 0", self.a)
        }
    }

    fn type_label(&self) -> &'static str {
        "constant"
    }
}

impl fmt::Display for ConstantEquation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.describe())
    }
}
