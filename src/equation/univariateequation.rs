use nalgebra::Complex;

use crate::equation::monotonicinterval::MonotonicInterval;
use crate::math::complexformat::representative;

// ─────────────────────────────────────────────────────────────────────────────
// Extremum
// ─────────────────────────────────────────────────────────────────────────────

/// Location and value of a global minimum or maximum. Unbounded functions
/// report the infinite end they run off to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extremum {
    x: Complex<f64>,
    y: Complex<f64>
}

impl Extremum {
    pub fn new(x: Complex<f64>, y: Complex<f64>) -> Extremum {
        Extremum { x, y }
    }

    pub fn x(&self) -> Complex<f64> {
        self.x
    }

    pub fn y(&self) -> Complex<f64> {
        self.y
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// UnivariateEquation
// ─────────────────────────────────────────────────────────────────────────────

pub trait UnivariateEquation: Send + Sync {
    /// Roots of the equation. A single NaN root means no solution, the
    /// pair `[-∞, +∞]` means every real number is a solution.
    fn solve(&self) -> Vec<Complex<f64>>;

    fn evaluate(&self, x: Complex<f64>) -> Complex<f64>;

    fn minimum(&self) -> Extremum;

    fn maximum(&self) -> Extremum;

    fn monotonic_intervals(&self) -> Vec<MonotonicInterval>;

    /// Canonical textual form, e.g. `5.000000 * x^2 +9.000000 * x +4.000000 = 0`.
    fn describe(&self) -> String;

    /// `"constant"`, `"linear"` or `"quadratic"`, decided by which
    /// coefficients are zero rather than by the concrete type.
    fn type_label(&self) -> &'static str;

    fn type_representative(&self) -> String {
        format!("type: {}", self.type_label())
    }

    fn roots_representative(&self) -> String {
        let roots = self.solve();
        match roots.as_slice() {
            [root] => format!("root: {}", representative(*root)),
            _ => {
                let rendered: Vec<String> = roots
                    .iter()
                    .map(|root| representative(*root))
                    .collect();
                format!("roots: {}", rendered.join(", "))
            }
        }
    }

    fn min_representative(&self) -> String {
        let min = self.minimum();
        format!("min: ({}; {})", representative(min.x()), representative(min.y()))
    }

    fn max_representative(&self) -> String {
        let max = self.maximum();
        format!("max: ({}; {})", representative(max.x()), representative(max.y()))
    }

    fn monotonic_intervals_representative(&self) -> String {
        let intervals: Vec<String> = self
            .monotonic_intervals()
            .iter()
            .map(|interval| interval.to_string())
            .collect();
        if intervals.len() == 1 {
            format!("monotonic interval: {}", intervals[0])
        } else {
            format!("monotonic intervals: {}", intervals.join("\t"))
        }
    }

    fn representative(&self) -> String {
        format!("{}\ncanonical view: {}\n{}\n{}\n{}\n{}",
                self.type_representative(),
                self.describe(),
                self.roots_representative(),
                self.min_representative(),
                self.max_representative(),
                self.monotonic_intervals_representative())
    }
}
