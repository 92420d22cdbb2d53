//! Transform the return value of the original method.

use ride_core::{Decorator, Method};

/// Creates a decorator that passes the original's return value through
/// `transformer`.
///
/// The replacement calls the original, then calls `transformer` with the
/// same receiver and the original's value, and returns the transformer's
/// result. If the original panics, `transformer` is never called.
///
/// # Example
///
/// ```rust,ignore
/// ride(&mut test, GET_NAME, compose(|_: &Test, name: String| name.to_uppercase()))?;
/// ```
pub fn compose<T, V, U, F>(transformer: F) -> Compose<F>
where
    T: ?Sized,
    F: Fn(&T, V) -> U + Send + Sync + 'static,
{
    Compose { transformer }
}

/// Decorator built by [`compose`].
#[derive(Debug, Clone, Copy)]
pub struct Compose<F> {
    transformer: F,
}

impl<M, F> Decorator<M> for Compose<F> {
    type Output = ComposeMethod<M, F>;

    fn decorate(self, original: M) -> Self::Output {
        ComposeMethod {
            original,
            transformer: self.transformer,
        }
    }
}

/// Method produced by [`Compose`].
#[derive(Debug, Clone)]
pub struct ComposeMethod<M, F> {
    original: M,
    transformer: F,
}

impl<T, A, M, F, U> Method<T, A> for ComposeMethod<M, F>
where
    T: ?Sized,
    M: Method<T, A>,
    F: Fn(&T, M::Output) -> U + Send + Sync + 'static,
{
    type Output = U;

    fn invoke(&self, this: &T, args: A) -> Self::Output {
        (self.transformer)(this, self.original.invoke(this, args))
    }
}
