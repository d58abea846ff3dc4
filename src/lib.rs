use num_traits::{Float, FromPrimitive};
use std::fmt::{Debug, Display};

/// Convert an f64 literal into the inferred RealField type.
/// Values the target type cannot represent become NaN.
macro_rules! from_f64 {
    ($x:expr) => {
        <_ as num_traits::FromPrimitive>::from_f64($x)
            .unwrap_or_else(num_traits::Float::nan)
    };
}

mod base;
pub mod quad;

pub use base::*;
pub use quad::{Quadrature, UniformGrid, TrapezoidRule, SimpsonRule,
               TrapezoidalIntegralCalculator, SimpsonIntegralCalculator};

/// Scalar field the quadrature rules are generic over
pub trait RealField: Float + FromPrimitive + Debug + Display + Send + Sync + 'static {}

impl<T> RealField for T
where T: Float + FromPrimitive + Debug + Display + Send + Sync + 'static {}
