use std::fmt;

use nalgebra::Complex;
use serde::{
    Deserialize,
    Serialize
};
use tracing::debug;

use crate::equation::constantequation::ConstantEquation;
use crate::equation::equationerror::{
    EquationError,
    EquationResult
};
use crate::equation::linearequation::LinearEquation;
use crate::equation::monotonicinterval::MonotonicInterval;
use crate::equation::quadraticequation::{
    ComplexRootConstruction,
    QuadraticEquation
};
use crate::equation::univariateequation::{
    Extremum,
    UnivariateEquation
};

// ─────────────────────────────────────────────────────────────────────────────
// Equation
// ─────────────────────────────────────────────────────────────────────────────
//
// Coefficients are read positionally as for `a·x² + b·x + c`. Zero leading
// coefficients are collapsed so the variant always matches the true degree:
//
//   [a]        -> Constant(a)
//   [0, b]     -> Constant(b)          [k, b]    -> Linear(k, b)
//   [0, 0, c]  -> Constant(c)          [0, k, b] -> Linear(k, b)
//   [a, b, c]  -> Quadratic(a, b, c)

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Equation {
    Constant(ConstantEquation),
    Linear(LinearEquation),
    Quadratic(QuadraticEquation)
}

impl Equation {
    pub fn construct(a: f64, rest: &[f64]) -> EquationResult<Equation> {
        match *rest {
            [] => Ok(Equation::Constant(ConstantEquation::new(a))),
            [b] => {
                if a == 0.0 {
                    debug!(b, "zero slope, collapsing to constant equation");
                    return Ok(Equation::Constant(ConstantEquation::new(b)));
                }
                Ok(Equation::Linear(LinearEquation::new(a, b)))
            },
            [b, c] => {
                if a == 0.0 {
                    if b == 0.0 {
                        debug!(c, "zero quadratic and linear terms, collapsing to constant equation");
                        return Ok(Equation::Constant(ConstantEquation::new(c)));
                    }
                    debug!(k = b, b = c, "zero quadratic term, collapsing to linear equation");
                    return Ok(Equation::Linear(LinearEquation::new(b, c)));
                }
                Ok(Equation::Quadratic(QuadraticEquation::new(a, b, c)))
            },
            _ => Err(EquationError::UnsupportedDegree { coefficients: rest.len() + 1 })
        }
    }

    /// Same as [`Equation::construct`] with the leading coefficient taken
    /// from the slice; an empty slice is rejected.
    pub fn from_coefficients(coefficients: &[f64]) -> EquationResult<Equation> {
        match coefficients.split_first() {
            Some((a, rest)) => Equation::construct(*a, rest),
            None => Err(EquationError::NoCoefficients)
        }
    }

    fn inner(&self) -> &dyn UnivariateEquation {
        match self {
            Equation::Constant(equation) => equation,
            Equation::Linear(equation) => equation,
            Equation::Quadratic(equation) => equation
        }
    }

    pub fn solve_with(&self, construction: ComplexRootConstruction) -> Vec<Complex<f64>> {
        match self {
            Equation::Quadratic(equation) => equation.solve_with(construction),
            _ => self.solve()
        }
    }

    pub fn representative_with(&self, construction: ComplexRootConstruction) -> String {
        match self {
            Equation::Quadratic(equation) => equation.representative_with(construction),
            _ => self.representative()
        }
    }
}

impl From<ConstantEquation> for Equation {
    fn from(equation: ConstantEquation) -> Self {
        Equation::Constant(equation)
    }
}

impl From<LinearEquation> for Equation {
    fn from(equation: LinearEquation) -> Self {
        Equation::Linear(equation)
    }
}

impl From<QuadraticEquation> for Equation {
    fn from(equation: QuadraticEquation) -> Self {
        Equation::Quadratic(equation)
    }
}

impl UnivariateEquation for Equation {
    fn solve(&self) -> Vec<Complex<f64>> {
        self.inner().solve()
    }

    fn evaluate(&self, x: Complex<f64>) -> Complex<f64> {
        self.inner().evaluate(x)
    }

    fn minimum(&self) -> Extremum {
        self.inner().minimum()
    }

    fn maximum(&self) -> Extremum {
        self.inner().maximum()
    }

    fn monotonic_intervals(&self) -> Vec<MonotonicInterval> {
        self.inner().monotonic_intervals()
    }

    fn describe(&self) -> String {
        self.inner().describe()
    }

    fn type_label(&self) -> &'static str {
        self.inner().type_label()
    }

    fn roots_representative(&self) -> String {
        self.inner().roots_representative()
    }
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.describe())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_zeros_collapse_to_lower_degree() {
        assert_eq!(
            Equation::construct(0.0, &[9.0, 4.0]),
            Ok(Equation::Linear(LinearEquation::new(9.0, 4.0)))
        );
        assert_eq!(
            Equation::construct(0.0, &[0.0, 4.0]),
            Ok(Equation::Constant(ConstantEquation::new(4.0)))
        );
        assert_eq!(
            Equation::construct(0.0, &[3.0]),
            Ok(Equation::Constant(ConstantEquation::new(3.0)))
        );
    }

    #[test]
    fn full_coefficient_sets_keep_their_degree() {
        assert_eq!(
            Equation::construct(5.0, &[]),
            Ok(Equation::Constant(ConstantEquation::new(5.0)))
        );
        assert_eq!(
            Equation::construct(6.0, &[9.0]),
            Ok(Equation::Linear(LinearEquation::new(6.0, 9.0)))
        );
        assert_eq!(
            Equation::construct(5.0, &[9.0, 4.0]),
            Ok(Equation::Quadratic(QuadraticEquation::new(5.0, 9.0, 4.0)))
        );
    }

    #[test]
    fn too_many_coefficients_are_rejected() {
        assert_eq!(
            Equation::construct(1.0, &[2.0, 3.0, 4.0]),
            Err(EquationError::UnsupportedDegree { coefficients: 4 })
        );
    }

    #[test]
    fn empty_slice_is_rejected() {
        assert_eq!(Equation::from_coefficients(&[]), Err(EquationError::NoCoefficients));
        assert_eq!(
            Equation::from_coefficients(&[6.0, 9.0]),
            Equation::construct(6.0, &[9.0])
        );
    }

    #[test]
    fn dispatch_keeps_the_quadratic_roots_format() {
        let equation = Equation::construct(1.0, &[-2.0, 1.0]).unwrap();
        assert_eq!(equation.roots_representative(), "double root: x = 1");
        assert_eq!(equation.to_string(), "1.000000 * x^2 -2.000000 * x +1.000000 = 0");
    }

    #[test]
    fn root_construction_only_affects_quadratics() {
        let quadratic = Equation::from(QuadraticEquation::new(1.0, 2.0, 2.0));
        assert_ne!(
            quadratic.solve_with(ComplexRootConstruction::Standard),
            quadratic.solve_with(ComplexRootConstruction::Literal)
        );

        let linear = Equation::from(LinearEquation::new(2.0, 4.0));
        assert_eq!(linear.solve_with(ComplexRootConstruction::Standard), linear.solve());
    }
}
