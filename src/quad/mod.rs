pub mod trapezoid;
pub mod simpson;

use itertools::zip_eq;
use ndarray::{Array1, ArrayView1};

use crate::RealField;
use crate::base::{IntegrableFunction, QuadError, QuadResult, check_subdivisions};

pub use trapezoid::{TrapezoidRule, TrapezoidalIntegralCalculator};
pub use simpson::{SimpsonRule, SimpsonIntegralCalculator};

/// A composite Newton-Cotes rule applied to samples taken on a uniform grid
pub trait Quadrature<T: RealField>{
    /// Ok if the rule can be applied to this many samples
    fn check_samples(&self, len: usize) -> QuadResult<()>;

    /// Weight of sample i out of len samples
    fn weight(&self, i: usize, len: usize) -> T;

    /// Factor applied to the weighted sum for a grid step h
    fn step_factor(&self, h: T) -> T;

    /// Sum of the samples multiplied by the rule weights
    fn weighted_sum<I: IntoIterator<Item=T>>(&self, len: usize, y: I) -> T{
        zip_eq((0..len).map(|i| self.weight(i, len)), y)
            .fold(T::zero(), |acc, (w, yi)| acc + w * yi)
    }

    /// Integrate samples y_i = f(a + i h)
    fn integrate_samples(&self, y: ArrayView1<T>, h: T) -> QuadResult<T>{
        self.check_samples(y.len())?;
        Ok(self.step_factor(h) * self.weighted_sum(y.len(), y.iter().cloned()))
    }

    /// Integrate f over the grid, evaluating it once per point without storing the samples
    fn integrate_grid<F: IntegrableFunction<T> + ?Sized>(&self, grid: &UniformGrid<T>, f: &F) -> QuadResult<T>{
        self.check_samples(grid.len())?;
        let sum = self.weighted_sum(grid.len(), grid.points().map(|x| f.eval(x)));
        Ok(self.step_factor(grid.step()) * sum)
    }
}

/// The n + 1 points x_i = a + i h, h = (b - a) / n, of an oriented interval
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct UniformGrid<T: RealField>{
    a: T,
    h: T,
    n: usize
}

impl<T: RealField> UniformGrid<T>{
    pub fn new(a: T, b: T, n: usize) -> QuadResult<Self>{
        let n = check_subdivisions(n)?;
        if n.checked_add(1).is_none(){
            return Err(QuadError::InvalidArgument(
                format!("{} subdivisions leave no room for the n + 1 grid points", n)));
        }
        let nf = T::from_usize(n)
            .ok_or_else(|| QuadError::InvalidArgument(
                format!("{} subdivisions cannot be represented as {}", n, std::any::type_name::<T>())))?;
        let h = (b - a) / nf;
        Ok(Self{a, h, n})
    }

    pub fn step(&self) -> T{
        self.h
    }

    pub fn subdivisions(&self) -> usize{
        self.n
    }

    /// Number of sample points, n + 1
    pub fn len(&self) -> usize{
        self.n + 1
    }

    pub fn point(&self, i: usize) -> T{
        let fi = T::from_usize(i).unwrap_or_else(T::nan);
        self.a + fi * self.h
    }

    pub fn points(&self) -> impl Iterator<Item=T> + '_{
        (0..=self.n).map(move |i| self.point(i))
    }

    /// Evaluate f once at every grid point
    pub fn sample<F: IntegrableFunction<T> + ?Sized>(&self, f: &F) -> Array1<T>{
        Array1::from_shape_fn(self.len(), |i| f.eval(self.point(i)))
    }
}
