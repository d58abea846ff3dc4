use std::marker::PhantomData;
use log::{debug, trace};

use crate::RealField;
use crate::base::{IntegrableFunction, IntegralCalculator, QuadError, QuadResult, check_subdivisions};
use super::{Quadrature, UniformGrid};

/// Composite Simpson 1/3 rule over an even number of subdivisions:
///     (h/3) * (y_0 + 4 y_1 + 2 y_2 + 4 y_3 + ... + 4 y_{n-1} + y_n)
/// Exact for polynomials of degree <= 3.
#[derive(Debug, Copy, Clone, Default)]
pub struct SimpsonRule;

impl<T: RealField> Quadrature<T> for SimpsonRule{
    fn check_samples(&self, len: usize) -> QuadResult<()> {
        if len < 3 || len % 2 == 0 {
            return Err(QuadError::InvalidArgument(
                format!("Simpson's rule needs an odd number of samples, at least 3, got {}", len)));
        }
        Ok(())
    }

    fn weight(&self, i: usize, len: usize) -> T {
        if i == 0 || i + 1 == len { T::one() }
        else if i % 2 == 1 { from_f64!(4.0) }
        else { from_f64!(2.0) }
    }

    fn step_factor(&self, h: T) -> T {
        let three: T = from_f64!(3.0);
        h / three
    }
}

/// Integrates a bound function with the composite Simpson rule.
///
/// Simpson's rule pairs up subdivisions, so an odd subdivision count n
/// is silently raised to n + 1.
#[derive(Debug, Clone)]
pub struct SimpsonIntegralCalculator<T, F>
where T: RealField, F: IntegrableFunction<T>
{
    f: F,
    _phantom: PhantomData<T>
}

impl<T, F> SimpsonIntegralCalculator<T, F>
where T: RealField, F: IntegrableFunction<T>
{
    pub fn new(f: F) -> Self{
        Self{f, _phantom: PhantomData}
    }

    pub fn function(&self) -> &F{
        &self.f
    }

    /// The even subdivision count actually used for a requested n
    pub fn effective_subdivisions(n: usize) -> QuadResult<usize>{
        let n = check_subdivisions(n)?;
        if n % 2 == 0 {
            return Ok(n);
        }
        let even = n.checked_add(1)
            .ok_or_else(|| QuadError::invalid("number of subdivisions is too large"))?;
        debug!("Simpson: odd number of subdivisions {} raised to {}", n, even);
        Ok(even)
    }
}

impl<T, F> IntegralCalculator for SimpsonIntegralCalculator<T, F>
where T: RealField, F: IntegrableFunction<T>
{
    type TField = T;

    fn calculate(&self, a: T, b: T, n: usize) -> QuadResult<T> {
        let n = Self::effective_subdivisions(n)?;
        let grid = UniformGrid::new(a, b, n)?;
        trace!("simpson: [{}, {}] n={} h={}", a, b, n, grid.step());
        SimpsonRule.integrate_grid(&grid, &self.f)
    }
}
