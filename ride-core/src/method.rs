//! # Method Layer
//!
//! A method is anything callable with a receiver and an argument list.
//!
//! Rust has no implicit `this`, so the receiver is passed explicitly as the
//! first parameter. The argument list is a single value, usually a tuple:
//! a JavaScript `run(a)` becomes `Fn(&T, (i32,)) -> R`.
//!
//! Every decorator in Ride consumes a [`Method`] and produces a new one, so
//! closures, [`Slot`]s and decorated methods all plug into each other.
//!
//! [`Slot`]: crate::Slot

/// A callable bound to a receiver type `T` and an argument list `A`.
///
/// Implemented for every `Fn(&T, A) -> R` closure, so plain closures can be
/// installed as methods directly:
///
/// ```rust,ignore
/// let run = |this: &Counter, (step,): (u32,)| this.bump(step);
/// methods.define(RUN, run);
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a `Method` of `{T}` taking `{A}`",
    label = "missing `Method<{T}, {A}>` implementation",
    note = "Methods are `Fn(&{T}, {A}) -> R` closures or decorated methods."
)]
pub trait Method<T: ?Sized, A>: Send + Sync + 'static {
    /// The value returned by the method.
    type Output;

    /// Invokes the method with `this` as the receiver.
    fn invoke(&self, this: &T, args: A) -> Self::Output;
}

// Blanket impl for closures
impl<F, T, A, R> Method<T, A> for F
where
    T: ?Sized,
    F: Fn(&T, A) -> R + Send + Sync + 'static,
{
    type Output = R;

    fn invoke(&self, this: &T, args: A) -> Self::Output {
        (self)(this, args)
    }
}
