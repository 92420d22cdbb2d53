//! # Decorator Layer
//!
//! A decorator turns the original method into its replacement. It is
//! consumed by the operation that applies it, so it runs exactly once per
//! override.
//!
//! Any `FnOnce(M) -> N` closure is a decorator. The builders in `ride-std`
//! (`after`, `before`, `compose`, `wrap`, ...) return named decorator types
//! that can be stacked with [`DecoratorExt::and_then`].

/// Turns an original method `M` into a replacement method.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot decorate `{M}`",
    label = "missing `Decorator<{M}>` implementation",
    note = "Decorators are `FnOnce(original) -> replacement` closures or builder types."
)]
pub trait Decorator<M> {
    /// The replacement produced from the original.
    type Output;

    /// Consumes the decorator, producing the replacement for `original`.
    fn decorate(self, original: M) -> Self::Output;
}

// Blanket impl for closures
impl<F, M, N> Decorator<M> for F
where
    F: FnOnce(M) -> N,
{
    type Output = N;

    fn decorate(self, original: M) -> Self::Output {
        (self)(original)
    }
}

/// Combinators for stacking decorators.
///
/// Implemented for every type so that generic decorators such as
/// [`Identity`], whose input type is only fixed by the method they end up
/// decorating, can be chained without naming that type.
pub trait DecoratorExt: Sized {
    /// Applies `self` first, then `next` to the result.
    ///
    /// Riding a method with `a.and_then(b)` is the same as riding it with
    /// `a` and then with `b`: `b`'s behavior ends up outermost.
    fn and_then<D>(self, next: D) -> AndThen<Self, D> {
        AndThen { first: self, next }
    }
}

impl<D> DecoratorExt for D {}

/// Two decorators applied in sequence. Built by [`DecoratorExt::and_then`].
#[derive(Debug, Clone, Copy)]
pub struct AndThen<D1, D2> {
    first: D1,
    next: D2,
}

impl<M, D1, D2> Decorator<M> for AndThen<D1, D2>
where
    D1: Decorator<M>,
    D2: Decorator<D1::Output>,
{
    type Output = D2::Output;

    fn decorate(self, original: M) -> Self::Output {
        let inner = self.first.decorate(original);
        self.next.decorate(inner)
    }
}

/// A decorator that returns the original unchanged.
#[derive(Default, Clone, Copy, Debug)]
pub struct Identity;

impl<M> Decorator<M> for Identity {
    type Output = M;

    #[inline(always)]
    fn decorate(self, original: M) -> Self::Output {
        original
    }
}
