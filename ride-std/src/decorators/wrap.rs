//! Replace the original method with a wrapper that decides whether to call it.

use ride_core::{Decorator, Method};
use std::fmt;

/// Creates a decorator that calls `wrapper` instead of the original.
///
/// The wrapper receives the receiver, a [`Wrapped`] handle that calls the
/// original with the original receiver and arguments, and the arguments
/// themselves. It may call the handle any number of times (including zero),
/// transform the result, or bail out.
///
/// # Example
///
/// ```rust,ignore
/// type Delete<'a> = Wrapped<'a, Blog, (u64,), Result<(), Error>>;
///
/// ride(&mut blog, DELETE_POST, wrap(|blog: &Blog, wrapped: Delete<'_>, (id,): (u64,)| {
///     if blog.user.owns(id) {
///         wrapped.call()
///     } else {
///         Err(Error::Forbidden)
///     }
/// }))?;
/// ```
pub fn wrap<T, A, R, U, F>(wrapper: F) -> Wrap<F>
where
    T: ?Sized,
    F: Fn(&T, Wrapped<'_, T, A, R>, A) -> U + Send + Sync + 'static,
{
    Wrap { wrapper }
}

/// Decorator built by [`wrap`].
#[derive(Debug, Clone, Copy)]
pub struct Wrap<F> {
    wrapper: F,
}

impl<M, F> Decorator<M> for Wrap<F> {
    type Output = WrapMethod<M, F>;

    fn decorate(self, original: M) -> Self::Output {
        WrapMethod {
            original,
            wrapper: self.wrapper,
        }
    }
}

/// Method produced by [`Wrap`].
#[derive(Debug, Clone)]
pub struct WrapMethod<M, F> {
    original: M,
    wrapper: F,
}

impl<T, A, M, F, U> Method<T, A> for WrapMethod<M, F>
where
    T: ?Sized,
    A: Clone,
    M: Method<T, A>,
    F: Fn(&T, Wrapped<'_, T, A, M::Output>, A) -> U + Send + Sync + 'static,
{
    type Output = U;

    fn invoke(&self, this: &T, args: A) -> Self::Output {
        let wrapped = Wrapped {
            this,
            original: &self.original,
            args: args.clone(),
        };
        (self.wrapper)(this, wrapped, args)
    }
}

/// A zero-argument handle to the original method, bound to the receiver
/// and arguments of the current call.
pub struct Wrapped<'a, T: ?Sized, A, R> {
    this: &'a T,
    original: &'a dyn Method<T, A, Output = R>,
    args: A,
}

impl<'a, T, A, R> Wrapped<'a, T, A, R>
where
    T: ?Sized + 'static,
    A: Clone + 'static,
    R: 'static,
{
    /// Call the original method. Each call gets its own copy of the
    /// arguments.
    pub fn call(&self) -> R {
        self.original.invoke(self.this, self.args.clone())
    }

    /// The receiver of the current call.
    pub fn this(&self) -> &'a T {
        self.this
    }

    /// The arguments of the current call.
    pub fn args(&self) -> &A {
        &self.args
    }
}

impl<T: ?Sized, A: fmt::Debug, R> fmt::Debug for Wrapped<'_, T, A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Wrapped").field("args", &self.args).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{CallCounter, CallLog};
    use ride_core::Slot;

    struct Service {
        calls: CallCounter,
    }

    type Fetch<'a> = Wrapped<'a, Service, (u32,), u32>;

    fn fetch() -> Slot<Service, (u32,), u32> {
        Slot::new(|this: &Service, (n,): (u32,)| {
            this.calls.hit();
            n + 1
        })
    }

    fn service() -> Service {
        Service {
            calls: CallCounter::new(),
        }
    }

    #[test]
    fn test_wrap_can_skip_original() {
        let svc = service();
        let mut slot = fetch();

        slot.ride(wrap(|_: &Service, _wrapped: Fetch<'_>, (n,): (u32,)| {
            n * 100
        }));

        assert_eq!(slot.call(&svc, (2,)), 200);
        assert_eq!(svc.calls.count(), 0);
    }

    #[test]
    fn test_wrap_can_call_original_repeatedly() {
        let svc = service();
        let mut slot = fetch();

        slot.ride(wrap(|_: &Service, wrapped: Fetch<'_>, _: (u32,)| {
            wrapped.call() + wrapped.call() + wrapped.call()
        }));

        assert_eq!(slot.call(&svc, (1,)), 6);
        assert_eq!(svc.calls.count(), 3);
    }

    #[test]
    fn test_wrapped_exposes_call_context() {
        let svc = service();
        let mut slot = fetch();

        slot.ride(wrap(|this: &Service, wrapped: Fetch<'_>, args: (u32,)| {
            assert!(std::ptr::eq(this, wrapped.this()));
            assert_eq!(*wrapped.args(), args);
            wrapped.call()
        }));

        assert_eq!(slot.call(&svc, (9,)), 10);
    }

    fn call_twice<T, A, R>(wrapped: &Wrapped<'_, T, A, R>) -> (R, R)
    where
        T: ?Sized + 'static,
        A: Clone + 'static,
        R: 'static,
    {
        (wrapped.call(), wrapped.call())
    }

    #[test]
    fn test_wrapped_handle_passed_to_generic_helper() {
        let svc = service();
        let mut slot = fetch();

        slot.ride(wrap(|_: &Service, wrapped: Fetch<'_>, _: (u32,)| {
            let (a, b) = call_twice(&wrapped);
            a * b
        }));

        assert_eq!(slot.call(&svc, (4,)), 25);
        assert_eq!(svc.calls.count(), 2);
    }

    #[test]
    fn test_wrapped_debug_shows_args() {
        let svc = service();
        let mut slot = fetch();
        let seen = CallLog::new();
        let log = seen.clone();

        slot.ride(wrap(move |_: &Service, wrapped: Fetch<'_>, _: (u32,)| {
            log.record(format!("{wrapped:?}"));
            wrapped.call()
        }));
        slot.call(&svc, (7,));

        assert_eq!(seen.entries(), vec!["Wrapped { args: (7,) }".to_string()]);
    }
}
