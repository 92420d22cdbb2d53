//! Run extra behavior before the original method.

use ride_core::{Decorator, Method};

/// Creates a decorator that calls `extra` before the original method.
///
/// The replacement calls `extra` with the receiver and a reference to the
/// arguments, drops its return value, then calls the original and returns
/// its value.
///
/// If `extra` panics, the original is never called. See
/// [`try_before`](crate::decorators::try_before) to short-circuit on `Err`.
///
/// # Example
///
/// ```rust,ignore
/// ride(&mut test, EXIT, before(|test: &Test, _: &()| test.capture_screenshot()))?;
/// ```
pub fn before<T, A, X, F>(extra: F) -> Before<F>
where
    T: ?Sized,
    F: Fn(&T, &A) -> X + Send + Sync + 'static,
{
    Before { extra }
}

/// Decorator built by [`before`].
#[derive(Debug, Clone, Copy)]
pub struct Before<F> {
    extra: F,
}

impl<M, F> Decorator<M> for Before<F> {
    type Output = BeforeMethod<M, F>;

    fn decorate(self, original: M) -> Self::Output {
        BeforeMethod {
            original,
            extra: self.extra,
        }
    }
}

/// Method produced by [`Before`].
#[derive(Debug, Clone)]
pub struct BeforeMethod<M, F> {
    original: M,
    extra: F,
}

impl<T, A, M, F, X> Method<T, A> for BeforeMethod<M, F>
where
    T: ?Sized,
    M: Method<T, A>,
    F: Fn(&T, &A) -> X + Send + Sync + 'static,
{
    type Output = M::Output;

    fn invoke(&self, this: &T, args: A) -> Self::Output {
        (self.extra)(this, &args);
        self.original.invoke(this, args)
    }
}
