//! # ride-std
//!
//! Standard decorators for Ride.
//!
//! This crate provides:
//! - **Combinators**: [`after`], [`before`], [`compose`], [`wrap`]
//! - **Fallible combinators**: [`try_after`], [`try_before`], [`try_compose`]
//! - **Instrumentation**: [`traced`]
//! - **Testing utilities**: [`testing::CallLog`], [`testing::CallCounter`]
//!
//! [`after`]: decorators::after
//! [`before`]: decorators::before
//! [`compose`]: decorators::compose
//! [`wrap`]: decorators::wrap
//! [`try_after`]: decorators::try_after
//! [`try_before`]: decorators::try_before
//! [`try_compose`]: decorators::try_compose
//! [`traced`]: decorators::traced

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use ride_core;

// Modules
pub mod decorators;
pub mod testing;
