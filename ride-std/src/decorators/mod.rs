//! Standard decorators.
//!
//! - [`after`], [`before`], [`compose`], [`wrap`]: the four basic combinators
//! - [`try_after`], [`try_before`], [`try_compose`]: short-circuit on `Err`
//! - [`traced`]: instrument calls with `tracing`

mod after;
mod before;
mod compose;
mod fallible;
mod traced;
mod wrap;

pub use after::{After, AfterMethod, after};
pub use before::{Before, BeforeMethod, before};
pub use compose::{Compose, ComposeMethod, compose};
pub use fallible::{
    TryAfter, TryAfterMethod, TryBefore, TryBeforeMethod, TryCompose, TryComposeMethod, try_after,
    try_before, try_compose,
};
pub use traced::{Traced, TracedMethod, traced};
pub use wrap::{Wrap, WrapMethod, Wrapped, wrap};
