//! # lambdakit
//!
//! Anonymous function values as building blocks for configurable behaviour.
//!
//! ## Overview
//!
//! Closures in Rust already capture their environment; this crate gives them
//! a shared, clonable shape and a handful of combinators around that shape:
//!
//! - **Functions**: [`Function`](function::Function), partial application
//!   factories, `curry2` / `curry3`
//! - **Composition**: transform chains built from ordered function sequences
//! - **Predicates**: `all`, `any`, `none` over predicate sets, with
//!   short-circuit evaluation
//! - **Dispatch**: event handler tables keyed by event kind
//! - **Deferred execution**: action lists, thunks, retry-until-true loops and
//!   status line updaters
//!
//! ## Feature Flags
//!
//! - `function`: Shared function values and partial application
//! - `compose`: Transform chains and the `pipeline!` macro
//! - `predicate`: Predicate values and quantifier combinators
//! - `dispatch`: Event handler tables
//! - `deferred`: Deferred execution helpers
//! - `arc`: Back function values with `Arc` so they are `Send + Sync`
//! - `serde`: Serialize / deserialize configuration values
//! - `full`: Enable all features except `arc`
//!
//! ## Example
//!
//! ```rust
//! use lambdakit::prelude::*;
//!
//! let tripler = make_multiplier(3);
//! let squarer = power_of(2);
//! let tripler_and_squarer = chain([tripler, squarer]);
//! assert_eq!(tripler_and_squarer.apply(4), 144);
//!
//! let wanted = all([is_even(), greater_than(100), multiple_of(55)]);
//! let found: Vec<i64> = (0..1_000).filter(|n| wanted.test(n)).collect();
//! assert_eq!(found, vec![110, 220, 330, 440, 550, 660, 770, 880, 990]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types, functions and traits.
///
/// # Usage
///
/// ```rust
/// use lambdakit::prelude::*;
/// ```
pub mod prelude {

    pub use crate::error::LambdaError;

    #[cfg(feature = "function")]
    pub use crate::function::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "predicate")]
    pub use crate::predicate::*;

    #[cfg(feature = "dispatch")]
    pub use crate::dispatch::*;

    #[cfg(feature = "deferred")]
    pub use crate::deferred::*;
}

pub mod error;

#[cfg(feature = "function")]
pub mod function;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "predicate")]
pub mod predicate;

#[cfg(feature = "dispatch")]
pub mod dispatch;

#[cfg(feature = "deferred")]
pub mod deferred;

pub use error::LambdaError;
