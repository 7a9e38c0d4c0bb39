//! Transform chains.
//!
//! Function values can be stored in a list like any other value, so a list
//! of transforms can itself be turned into one function that applies each
//! transform in turn.
//!
//! # Overview
//!
//! - [`chain`]: fold an ordered sequence of `Function<T, T>` into one function
//! - [`try_chain`]: the same for fallible stages, stopping at the first `Err`
//! - [`pipeline!`]: left-to-right composition of differently typed functions
//! - [`identity`], [`constant`]: the two trivial building blocks
//!
//! # Examples
//!
//! ## Chain of stored transforms
//!
//! ```
//! use lambdakit::compose::chain;
//! use lambdakit::function::{make_multiplier, power_of};
//!
//! let my_transforms = vec![make_multiplier(3), power_of(2)];
//! let tripler_and_squarer = chain(my_transforms);
//! assert_eq!(tripler_and_squarer.apply(4), 144);
//! ```
//!
//! ## Pipeline of differently typed stages
//!
//! ```
//! use lambdakit::pipeline;
//!
//! let parse_csv = |line: &str| line.split(',').map(str::to_owned).collect::<Vec<_>>();
//! let format_favorite = |fields: Vec<String>| format!("Favorite {} is {}", fields[0], fields[1]);
//!
//! let describe = pipeline!(parse_csv, format_favorite);
//! assert_eq!(describe("fruit,mango"), "Favorite fruit is mango");
//! ```
//!
//! # Laws
//!
//! - **Empty chain**: `chain([]).apply(x) == x`
//! - **Ordering**: `chain([f, g]).apply(x) == g.apply(f.apply(x))`
//! - **Associativity**: `chain([chain([f, g]), h]) == chain([f, chain([g, h])])`

mod pipeline_macro;
mod transform_chain;
mod utils;

pub use transform_chain::{chain, try_chain};
pub use utils::{constant, identity};

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::pipeline;
