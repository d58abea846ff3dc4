use crate::RealField;

/// A real function of one real variable that can be integrated.
///
/// Implemented for every `Fn(T) -> T`, so closures, function pointers,
/// references to either, and `Box<dyn Fn(T) -> T>` can all be handed to a
/// calculator directly.
pub trait IntegrableFunction<T: RealField> {
    fn eval(&self, x: T) -> T;
}

impl<T, F> IntegrableFunction<T> for F
where T: RealField,
      F: Fn(T) -> T
{
    #[inline]
    fn eval(&self, x: T) -> T {
        self(x)
    }
}
