use std::marker::PhantomData;
use log::trace;

use crate::RealField;
use crate::base::{IntegrableFunction, IntegralCalculator, QuadError, QuadResult};
use super::{Quadrature, UniformGrid};

/// Composite trapezoidal rule:
///     h * (y_0/2 + y_1 + ... + y_{n-1} + y_n/2)
/// Exact for polynomials of degree <= 1.
#[derive(Debug, Copy, Clone, Default)]
pub struct TrapezoidRule;

impl<T: RealField> Quadrature<T> for TrapezoidRule{
    fn check_samples(&self, len: usize) -> QuadResult<()> {
        if len < 2 {
            return Err(QuadError::InvalidArgument(
                format!("trapezoidal rule needs at least 2 samples, got {}", len)));
        }
        Ok(())
    }

    fn weight(&self, i: usize, len: usize) -> T {
        if i == 0 || i + 1 == len { from_f64!(0.5) } else { T::one() }
    }

    fn step_factor(&self, h: T) -> T {
        h
    }
}

/// Integrates a bound function with the composite trapezoidal rule
#[derive(Debug, Clone)]
pub struct TrapezoidalIntegralCalculator<T, F>
where T: RealField, F: IntegrableFunction<T>
{
    f: F,
    _phantom: PhantomData<T>
}

impl<T, F> TrapezoidalIntegralCalculator<T, F>
where T: RealField, F: IntegrableFunction<T>
{
    pub fn new(f: F) -> Self{
        Self{f, _phantom: PhantomData}
    }

    pub fn function(&self) -> &F{
        &self.f
    }
}

impl<T, F> IntegralCalculator for TrapezoidalIntegralCalculator<T, F>
where T: RealField, F: IntegrableFunction<T>
{
    type TField = T;

    fn calculate(&self, a: T, b: T, n: usize) -> QuadResult<T> {
        let grid = UniformGrid::new(a, b, n)?;
        trace!("trapezoidal: [{}, {}] n={} h={}", a, b, n, grid.step());
        TrapezoidRule.integrate_grid(&grid, &self.f)
    }
}
