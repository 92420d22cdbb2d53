//! Tracing decorator for method calls.

use ride_core::{Decorator, Method};

/// Creates a decorator that instruments every call with a `tracing` span.
///
/// Each call runs inside a `method_call` span carrying `method = label`,
/// with a `trace` event on entry and on return. Without the `tracing`
/// feature the decorated method behaves exactly like the original.
pub fn traced(label: &'static str) -> Traced {
    Traced { label }
}

/// Decorator built by [`traced`].
#[derive(Debug, Clone, Copy)]
pub struct Traced {
    label: &'static str,
}

impl<M> Decorator<M> for Traced {
    type Output = TracedMethod<M>;

    fn decorate(self, original: M) -> Self::Output {
        TracedMethod {
            inner: original,
            label: self.label,
        }
    }
}

/// Method produced by [`Traced`].
#[derive(Debug, Clone)]
pub struct TracedMethod<M> {
    inner: M,
    label: &'static str,
}

impl<M> TracedMethod<M> {
    /// The label recorded on every span.
    pub fn label(&self) -> &'static str {
        self.label
    }
}

impl<T, A, M> Method<T, A> for TracedMethod<M>
where
    T: ?Sized,
    M: Method<T, A>,
{
    type Output = M::Output;

    #[cfg(feature = "tracing")]
    fn invoke(&self, this: &T, args: A) -> Self::Output {
        let span = tracing::trace_span!("method_call", method = %self.label);
        let _entered = span.enter();
        tracing::trace!("Calling method");
        let output = self.inner.invoke(this, args);
        tracing::trace!("Method returned");
        output
    }

    #[cfg(not(feature = "tracing"))]
    fn invoke(&self, this: &T, args: A) -> Self::Output {
        self.inner.invoke(this, args)
    }
}
