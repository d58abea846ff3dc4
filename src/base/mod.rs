pub mod func;
pub mod calc;

pub use func::IntegrableFunction;
pub use calc::*;
