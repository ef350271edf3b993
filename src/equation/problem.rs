use crate::ga::operators::{bounded_mutation, uniform_crossover};
use crate::ga::{GaProblem, GeneBounds};
use rand::Rng;
use std::fmt;

/// Default largest offset applied by one mutation.
pub const DEFAULT_MUTATION_STEP: u32 = 10;

/// A candidate `(x, y, z)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Triple(pub [i32; 3]);

impl Triple {
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self([x, y, z])
    }

    pub fn x(&self) -> i32 {
        self.0[0]
    }

    pub fn y(&self) -> i32 {
        self.0[1]
    }

    pub fn z(&self) -> i32 {
        self.0[2]
    }

    pub fn genes(&self) -> &[i32; 3] {
        &self.0
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x = {}, y = {}, z = {}", self.x(), self.y(), self.z())
    }
}

/// Coefficients of `a·x + b·y + c·z = d`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coefficients {
    pub a: i64,
    pub b: i64,
    pub c: i64,
    pub d: i64,
}

impl Coefficients {
    pub fn new(a: i64, b: i64, c: i64, d: i64) -> Self {
        Self { a, b, c, d }
    }

    /// Left-hand side `a·x + b·y + c·z`.
    pub fn lhs(&self, t: &Triple) -> i128 {
        self.a as i128 * t.x() as i128 + self.b as i128 * t.y() as i128 + self.c as i128 * t.z() as i128
    }

    /// Signed residual `a·x + b·y + c·z − d`. Cannot overflow.
    pub fn residual(&self, t: &Triple) -> i128 {
        self.lhs(t) - self.d as i128
    }
}

impl fmt::Display for Coefficients {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x + {}y + {}z = {}", self.a, self.b, self.c, self.d)
    }
}

/// The linear equation as a GA problem.
///
/// Fitness is `|a·x + b·y + c·z − d|` as `f64`. The residual is computed
/// exactly in `i128`; only its magnitude is converted, so a fitness of
/// `0.0` always means an exact solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinearEquation {
    coefficients: Coefficients,
    bounds: GeneBounds,
    mutation_step: u32,
}

impl LinearEquation {
    pub fn new(coefficients: Coefficients, bounds: GeneBounds) -> Self {
        Self {
            coefficients,
            bounds,
            mutation_step: DEFAULT_MUTATION_STEP,
        }
    }

    /// Sets the largest offset a mutation may add to a gene.
    pub fn with_mutation_step(mut self, step: u32) -> Self {
        self.mutation_step = step;
        self
    }

    pub fn coefficients(&self) -> Coefficients {
        self.coefficients
    }

    pub fn bounds(&self) -> GeneBounds {
        self.bounds
    }

    pub fn mutation_step(&self) -> u32 {
        self.mutation_step
    }

    /// Whether `t` satisfies the equation exactly.
    pub fn is_exact(&self, t: &Triple) -> bool {
        self.coefficients.residual(t) == 0
    }
}

impl GaProblem for LinearEquation {
    type Individual = Triple;
    type Fitness = f64;

    fn create_individual<R: Rng>(&self, rng: &mut R) -> Triple {
        Triple([
            self.bounds.sample(rng),
            self.bounds.sample(rng),
            self.bounds.sample(rng),
        ])
    }

    fn evaluate(&self, t: &Triple) -> f64 {
        self.coefficients.residual(t).unsigned_abs() as f64
    }

    fn crossover<R: Rng>(
        &self,
        parent1: &Triple,
        parent2: &Triple,
        rate: f64,
        rng: &mut R,
    ) -> (Triple, Triple) {
        let (c1, c2) = uniform_crossover(&parent1.0, &parent2.0, rate, rng);
        (Triple(c1), Triple(c2))
    }

    fn mutate<R: Rng>(&self, t: &Triple, rate: f64, rng: &mut R) -> Triple {
        Triple(bounded_mutation(&t.0, rate, self.mutation_step, self.bounds, rng))
    }

    fn is_solution(&self, fitness: f64) -> bool {
        fitness == 0.0
    }
}
