use std::fmt;

use nalgebra::Complex;
use serde::{
    Deserialize,
    Serialize
};

use crate::equation::linearequation::LinearEquation;
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
    neg_infinity,
    real,
    representative
};

// ─────────────────────────────────────────────────────────────────────────────
// ComplexRootConstruction
// ─────────────────────────────────────────────────────────────────────────────
//
// How the offset from the vertex is built when the discriminant D < 0:
//
//   Literal  : (√|D| + 1i) / 2a   (historical output, real part is not zero)
//   Standard : (i·√|D|) / 2a      (textbook conjugate pair)

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ComplexRootConstruction {
    #[default]
    Literal,
    Standard
}

impl ComplexRootConstruction {
    fn offset(&self, abs_discriminant_sqrt: f64) -> Complex<f64> {
        match self {
            ComplexRootConstruction::Literal => Complex::new(abs_discriminant_sqrt, 1.0),
            ComplexRootConstruction::Standard => Complex::new(0.0, abs_discriminant_sqrt)
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// QuadraticEquation
// ─────────────────────────────────────────────────────────────────────────────

/// `a * x^2 + b * x + c = 0`
///
/// `a == 0` is accepted and handled as the linear equation `b * x + c = 0`
/// wherever the vertex would need a division by `a`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuadraticEquation {
    a: f64,
    b: f64,
    c: f64
}

impl QuadraticEquation {
    pub fn new(a: f64, b: f64, c: f64) -> QuadraticEquation {
        QuadraticEquation { a, b, c }
    }

    pub fn a(&self) -> f64 {
        self.a
    }

    pub fn b(&self) -> f64 {
        self.b
    }

    pub fn c(&self) -> f64 {
        self.c
    }

    pub fn discriminant(&self) -> f64 {
        self.b.powi(2) - 4.0 * self.a * self.c
    }

    /// `x` of the turning point, `-b / 2a`.
    fn center(&self) -> f64 {
        -self.b / (2.0 * self.a)
    }

    fn vertex(&self) -> Extremum {
        let center = real(self.center());
        Extremum::new(center, self.evaluate(center))
    }

    fn reduced(&self) -> LinearEquation {
        LinearEquation::new(self.b, self.c)
    }

    pub fn solve_with(&self, construction: ComplexRootConstruction) -> Vec<Complex<f64>> {
        if self.a == 0.0 {
            return self.reduced().solve();
        }

        let center = real(self.center());
        let discriminant = self.discriminant();
        if discriminant == 0.0 {
            return vec![center];
        }

        let numerator = if discriminant > 0.0 {
            real(discriminant.sqrt())
        } else {
            construction.offset((-discriminant).sqrt())
        };
        let offset = numerator / (2.0 * self.a);

        vec![center - offset, center + offset]
    }

    pub fn roots_representative_with(&self, construction: ComplexRootConstruction) -> String {
        if self.a == 0.0 {
            return self.reduced().roots_representative();
        }

        match self.solve_with(construction).as_slice() {
            [root] => format!("double root: x = {}", representative(*root)),
            [x1, x2] => format!("roots: x1 = {}, x2 = {}", representative(*x1), representative(*x2)),
            _ => unreachable!("a quadratic with a != 0 has one or two roots")
        }
    }

    pub fn representative_with(&self, construction: ComplexRootConstruction) -> String {
        format!("{}\ncanonical view: {}\n{}\n{}\n{}\n{}",
                self.type_representative(),
                self.describe(),
                self.roots_representative_with(construction),
                self.min_representative(),
                self.max_representative(),
                self.monotonic_intervals_representative())
    }
}

impl UnivariateEquation for QuadraticEquation {
    fn solve(&self) -> Vec<Complex<f64>> {
        self.solve_with(ComplexRootConstruction::default())
    }

    fn evaluate(&self, x: Complex<f64>) -> Complex<f64> {
        real(self.a) * x * x + real(self.b) * x + real(self.c)
    }

    fn minimum(&self) -> Extremum {
        if self.a > 0.0 {
            return self.vertex();
        }
        Extremum::new(neg_infinity(), neg_infinity())
    }

    fn maximum(&self) -> Extremum {
        if self.a < 0.0 {
            return self.vertex();
        }
        Extremum::new(infinity(), infinity())
    }

    fn monotonic_intervals(&self) -> Vec<MonotonicInterval> {
        if self.a == 0.0 {
            if self.b == 0.0 {
                return vec![MonotonicInterval::whole_line(MonotonicType::Stable)];
            }
            return vec![MonotonicInterval::whole_line(MonotonicType::from_sign(self.b))];
        }

        let vertex = real(self.center());
        if self.a > 0.0 {
            // branches point up
            vec![
                MonotonicInterval::ending_at(vertex, MonotonicType::Descending),
                MonotonicInterval::starting_at(vertex, MonotonicType::Ascending)
            ]
        } else {
            vec![
                MonotonicInterval::ending_at(vertex, MonotonicType::Ascending),
                MonotonicInterval::starting_at(vertex, MonotonicType::Descending)
            ]
        }
    }

    fn describe(&self) -> String {
        let mut parts: Vec<String> = Vec::with_capacity(3);
        if self.a != 0.0 {
            parts.push(format!("{:.6} * x^2", self.a));
        }
        if self.b != 0.0 {
            parts.push(format!("{:+.6} * x", self.b));
        }
        if self.c != 0.0 {
            if self.a == 0.0 && self.b == 0.0 {
                return format!("{:.6} != 0", self.c);
            }
            parts.push(format!("{:+.6}", self.c));
        }
        if parts.is_empty() {
            parts.push("0".to_owned());
        }
        format!("{} = 0", parts.join(" "))
    }

    fn type_label(&self) -> &'static str {
        if self.a != 0.0 {
            "quadratic"
        } else if self.b != 0.0 {
            "linear"
        } else {
            "constant"
        }
    }

    fn roots_representative(&self) -> String {
        self.roots_representative_with(ComplexRootConstruction::default())
    }
}

impl fmt::Display for QuadraticEquation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.describe())
    }
}
