use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::RealField;
use crate::base::func::IntegrableFunction;
use crate::quad::{TrapezoidalIntegralCalculator, SimpsonIntegralCalculator};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum QuadError{
    #[error("invalid argument: {0}")]
    InvalidArgument(String)
}

impl QuadError{
    pub fn invalid(s: &str) -> Self{
        QuadError::InvalidArgument(String::from(s))
    }
}

pub type QuadResult<T> = Result<T, QuadError>;

/// Approximates the definite integral of a bound function
pub trait IntegralCalculator{
    type TField: RealField;

    /// Integrate over [a, b] with n equal-width subdivisions.
    /// The interval is oriented: calculate(b, a, n) is the negation of calculate(a, b, n).
    /// Fails only if n == 0.
    fn calculate(&self, a: Self::TField, b: Self::TField, n: usize) -> QuadResult<Self::TField>;
}

impl<C: IntegralCalculator + ?Sized> IntegralCalculator for Box<C>{
    type TField = C::TField;

    fn calculate(&self, a: Self::TField, b: Self::TField, n: usize) -> QuadResult<Self::TField> {
        (**self).calculate(a, b, n)
    }
}

/// Rejects a zero subdivision count
pub fn check_subdivisions(n: usize) -> QuadResult<usize>{
    if n == 0 {
        return Err(QuadError::invalid("number of subdivisions must be at least 1"));
    }
    Ok(n)
}

/// Selects a composite rule at runtime
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum IntegrationMethod{
    Trapezoidal,
    Simpson
}

impl IntegrationMethod{
    pub const ALL: [IntegrationMethod; 2] = [IntegrationMethod::Trapezoidal, IntegrationMethod::Simpson];

    pub fn name(&self) -> &'static str{
        match self{
            IntegrationMethod::Trapezoidal => "trapezoidal",
            IntegrationMethod::Simpson => "simpson"
        }
    }

    /// Bind f to a calculator for this method
    pub fn calculator<'a, T, F>(&self, f: F) -> Box<dyn IntegralCalculator<TField=T> + Send + Sync + 'a>
    where T: RealField,
          F: IntegrableFunction<T> + Send + Sync + 'a
    {
        match self{
            IntegrationMethod::Trapezoidal => Box::new(TrapezoidalIntegralCalculator::new(f)),
            IntegrationMethod::Simpson => Box::new(SimpsonIntegralCalculator::new(f))
        }
    }
}

impl fmt::Display for IntegrationMethod{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for IntegrationMethod{
    type Err = QuadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str(){
            "trapezoidal" | "trapezoid" => Ok(IntegrationMethod::Trapezoidal),
            "simpson" => Ok(IntegrationMethod::Simpson),
            other => Err(QuadError::InvalidArgument(format!("unknown integration method '{}'", other)))
        }
    }
}
