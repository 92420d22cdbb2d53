//! Run extra behavior after the original method.

use ride_core::{Decorator, Method};

/// Creates a decorator that calls `extra` after the original method.
///
/// The replacement calls the original with the receiver and arguments,
/// then calls `extra` with the same receiver and a reference to the same
/// arguments, and returns the original's value. Whatever `extra` returns is
/// dropped.
///
/// If the original panics, `extra` is never called. For methods returning
/// `Result`, use [`try_after`](crate::decorators::try_after) to also skip
/// `extra` on `Err`.
///
/// # Example
///
/// ```rust,ignore
/// ride(&mut test, SAVE_RESULTS, after(|test: &Test, _: &()| test.save_plan()))?;
/// ```
pub fn after<T, A, X, F>(extra: F) -> After<F>
where
    T: ?Sized,
    F: Fn(&T, &A) -> X + Send + Sync + 'static,
{
    After { extra }
}

/// Decorator built by [`after`].
#[derive(Debug, Clone, Copy)]
pub struct After<F> {
    extra: F,
}

impl<M, F> Decorator<M> for After<F> {
    type Output = AfterMethod<M, F>;

    fn decorate(self, original: M) -> Self::Output {
        AfterMethod {
            original,
            extra: self.extra,
        }
    }
}

/// Method produced by [`After`].
#[derive(Debug, Clone)]
pub struct AfterMethod<M, F> {
    original: M,
    extra: F,
}

impl<T, A, M, F, X> Method<T, A> for AfterMethod<M, F>
where
    T: ?Sized,
    A: Clone,
    M: Method<T, A>,
    F: Fn(&T, &A) -> X + Send + Sync + 'static,
{
    type Output = M::Output;

    fn invoke(&self, this: &T, args: A) -> Self::Output {
        let value = self.original.invoke(this, args.clone());
        (self.extra)(this, &args);
        value
    }
}
