//! # ride - Override Methods with Decorators
//!
//! `ride` replaces a named method on an object with a new method derived
//! from the original. Four combinators cover the common cases: run extra
//! behavior [`after`] or [`before`] the original, [`compose`] its return
//! value with a transformer, or [`wrap`] it entirely.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use ride::prelude::*;
//!
//! struct Test {
//!     methods: MethodTable<Test>,
//! }
//!
//! impl Target for Test {
//!     fn methods(&self) -> &MethodTable<Self> { &self.methods }
//!     fn methods_mut(&mut self) -> &mut MethodTable<Self> { &mut self.methods }
//! }
//!
//! const GET_NAME: MethodName<Test, (), String> = MethodName::new("get_name");
//!
//! ride(&mut test, GET_NAME, compose(|_: &Test, name: String| name.to_uppercase()))?;
//! let name = test.invoke(GET_NAME, ())?;
//! ```
//!
//! A method does not have to live in a table: a [`Slot`] held as a plain
//! field can be ridden directly with [`Slot::ride`].
//!
//! ## Failures
//!
//! Ride never catches anything. A panic in the original, an extra
//! behavior, a transformer or a wrapper unwinds straight to the caller,
//! skipping the remaining steps. For methods returning `Result`, the `try_*`
//! combinators skip the remaining steps on `Err` as well.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use ride_core::{
    // Decorators
    AndThen,
    Decorator,
    DecoratorExt,
    Identity,
    // Methods
    Method,
    MethodName,
    MethodTable,
    // Errors
    RideError,
    Slot,
    Target,
    ride,
};

pub use ride_std::decorators::{
    After, AfterMethod, Before, BeforeMethod, Compose, ComposeMethod, Traced, TracedMethod,
    TryAfter, TryAfterMethod, TryBefore, TryBeforeMethod, TryCompose, TryComposeMethod, Wrap,
    WrapMethod, Wrapped, after, before, compose, traced, try_after, try_before, try_compose, wrap,
};

/// Testing utilities.
pub mod testing {
    #![allow(clippy::wildcard_imports)]
    pub use ride_std::testing::*;
}

/// Prelude module - common imports for Ride.
///
/// # Usage
///
/// ```rust,ignore
/// use ride::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        // Core
        Decorator,
        DecoratorExt,
        Method,
        MethodName,
        MethodTable,
        // Errors
        RideError,
        Slot,
        Target,
        // Combinators
        Wrapped,
        after,
        before,
        compose,
        ride,
        traced,
        try_after,
        try_before,
        try_compose,
        wrap,
    };
}
