use super::problem::{Coefficients, LinearEquation, Triple};
use crate::ga::{GaProblem, GaResult, Status};
use std::fmt;

/// Final answer of a run, ready to report.
///
/// `Display` renders the equation, the best triple, the value it produces
/// and whether it is exact.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    pub coefficients: Coefficients,
    pub best: Triple,
    pub fitness: f64,
    pub generations: usize,
    pub status: Status,
}

impl Solution {
    pub fn from_result(problem: &LinearEquation, result: &GaResult<Triple, f64>) -> Self {
        Self {
            coefficients: problem.coefficients(),
            best: result.best,
            fitness: result.best_fitness,
            generations: result.generations,
            status: result.status,
        }
    }

    pub fn is_exact(&self) -> bool {
        self.coefficients.residual(&self.best) == 0
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Coefficients { a, b, c, .. } = self.coefficients;
        let t = self.best;
        writeln!(f, "Equation: {}", self.coefficients)?;
        writeln!(f, "Best solution: {t}")?;
        writeln!(
            f,
            "Value: {a}×{} + {b}×{} + {c}×{} = {}",
            t.x(),
            t.y(),
            t.z(),
            self.coefficients.lhs(&t)
        )?;
        writeln!(f, "Fitness: {}", self.fitness)?;
        writeln!(f, "Generations: {}", self.generations)?;
        if self.is_exact() {
            write!(f, "Exact solution")
        } else {
            write!(f, "Approximate solution (error {})", self.fitness)
        }
    }
}

impl LinearEquation {
    /// Summarizes a finished run of this problem.
    pub fn summarize(&self, result: &GaResult<Triple, f64>) -> Solution {
        debug_assert_eq!(self.evaluate(&result.best), result.best_fitness);
        Solution::from_result(self, result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solution(best: Triple, fitness: f64) -> Solution {
        Solution {
            coefficients: Coefficients::new(3, 5, 2, 14),
            best,
            fitness,
            generations: 12,
            status: Status::Exhausted,
        }
    }

    #[test]
    fn test_exact_report() {
        let s = solution(Triple::new(0, 2, 2), 0.0);
        assert!(s.is_exact());
        let text = s.to_string();
        assert!(text.contains("Equation: 3x + 5y + 2z = 14"));
        assert!(text.contains("Value: 3×0 + 5×2 + 2×2 = 14"));
        assert!(text.ends_with("Exact solution"));
    }

    #[test]
    fn test_approximate_report() {
        let s = solution(Triple::new(2, 1, 1), 1.0);
        assert!(!s.is_exact());
        assert!(s.to_string().ends_with("Approximate solution (error 1)"));
    }
}
