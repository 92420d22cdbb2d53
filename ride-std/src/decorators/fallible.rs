//! Variants of `after`, `before` and `compose` for methods returning `Result`.
//!
//! The plain decorators treat the return value as opaque, so an `Err` from
//! the original does not stop `after` from running its extra behavior. The
//! variants here treat `Err` like a thrown error: it propagates immediately
//! and the remaining steps are skipped.
//!
//! Errors from the extra behavior or transformer are converted into the
//! original's error type with `From`, the same way `?` does.

use ride_core::{Decorator, Method};

/// Like [`after`](crate::decorators::after), but skips `extra` when the
/// original returns `Err`, and propagates an `Err` from `extra`.
pub fn try_after<T, A, X, E, F>(extra: F) -> TryAfter<F>
where
    T: ?Sized,
    F: Fn(&T, &A) -> Result<X, E> + Send + Sync + 'static,
{
    TryAfter { extra }
}

/// Like [`before`](crate::decorators::before), but does not call the
/// original when `extra` returns `Err`.
pub fn try_before<T, A, X, E, F>(extra: F) -> TryBefore<F>
where
    T: ?Sized,
    F: Fn(&T, &A) -> Result<X, E> + Send + Sync + 'static,
{
    TryBefore { extra }
}

/// Like [`compose`](crate::decorators::compose), but only transforms `Ok`
/// values. The transformer may fail too.
pub fn try_compose<T, V, U, E, F>(transformer: F) -> TryCompose<F>
where
    T: ?Sized,
    F: Fn(&T, V) -> Result<U, E> + Send + Sync + 'static,
{
    TryCompose { transformer }
}

/// Decorator built by [`try_after`].
#[derive(Debug, Clone, Copy)]
pub struct TryAfter<F> {
    extra: F,
}

/// Decorator built by [`try_before`].
#[derive(Debug, Clone, Copy)]
pub struct TryBefore<F> {
    extra: F,
}

/// Decorator built by [`try_compose`].
#[derive(Debug, Clone, Copy)]
pub struct TryCompose<F> {
    transformer: F,
}

/// Method produced by [`TryAfter`].
#[derive(Debug, Clone)]
pub struct TryAfterMethod<M, F> {
    original: M,
    extra: F,
}

/// Method produced by [`TryBefore`].
#[derive(Debug, Clone)]
pub struct TryBeforeMethod<M, F> {
    original: M,
    extra: F,
}

/// Method produced by [`TryCompose`].
#[derive(Debug, Clone)]
pub struct TryComposeMethod<M, F> {
    original: M,
    transformer: F,
}

impl<M, F> Decorator<M> for TryAfter<F> {
    type Output = TryAfterMethod<M, F>;

    fn decorate(self, original: M) -> Self::Output {
        TryAfterMethod {
            original,
            extra: self.extra,
        }
    }
}

impl<M, F> Decorator<M> for TryBefore<F> {
    type Output = TryBeforeMethod<M, F>;

    fn decorate(self, original: M) -> Self::Output {
        TryBeforeMethod {
            original,
            extra: self.extra,
        }
    }
}

impl<M, F> Decorator<M> for TryCompose<F> {
    type Output = TryComposeMethod<M, F>;

    fn decorate(self, original: M) -> Self::Output {
        TryComposeMethod {
            original,
            transformer: self.transformer,
        }
    }
}

impl<T, A, M, F, V, E, X, E2> Method<T, A> for TryAfterMethod<M, F>
where
    T: ?Sized,
    A: Clone,
    M: Method<T, A, Output = Result<V, E>>,
    F: Fn(&T, &A) -> Result<X, E2> + Send + Sync + 'static,
    E: From<E2>,
{
    type Output = Result<V, E>;

    fn invoke(&self, this: &T, args: A) -> Self::Output {
        let value = self.original.invoke(this, args.clone())?;
        (self.extra)(this, &args)?;
        Ok(value)
    }
}

impl<T, A, M, F, V, E, X, E2> Method<T, A> for TryBeforeMethod<M, F>
where
    T: ?Sized,
    M: Method<T, A, Output = Result<V, E>>,
    F: Fn(&T, &A) -> Result<X, E2> + Send + Sync + 'static,
    E: From<E2>,
{
    type Output = Result<V, E>;

    fn invoke(&self, this: &T, args: A) -> Self::Output {
        (self.extra)(this, &args)?;
        self.original.invoke(this, args)
    }
}

impl<T, A, M, F, V, E, U, E2> Method<T, A> for TryComposeMethod<M, F>
where
    T: ?Sized,
    M: Method<T, A, Output = Result<V, E>>,
    F: Fn(&T, V) -> Result<U, E2> + Send + Sync + 'static,
    E: From<E2>,
{
    type Output = Result<U, E>;

    fn invoke(&self, this: &T, args: A) -> Self::Output {
        let value = self.original.invoke(this, args)?;
        Ok((self.transformer)(this, value)?)
    }
}
