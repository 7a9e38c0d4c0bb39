//! Deferred execution.
//!
//! A function value can be handed to another component and called later,
//! when that component decides: after it has initialized an object, at each
//! tick of a status display, or on every attempt of a retry loop. The caller
//! supplies *what* to do; the component owns *when*.
//!
//! # Overview
//!
//! - [`Thunk`], [`run_thunks`]: zero-argument actions run in order
//! - [`ActionList`], [`initialize_with`]: actions injected into object setup
//! - [`RetryPolicy`], [`retry_until_true_or_timeout`]: a predicate polled
//!   until it holds or time runs out
//! - [`StatusUpdater`]: a status line whose text comes from a closure
//!
//! # Examples
//!
//! ```
//! use std::sync::{Arc, Mutex};
//! use lambdakit::deferred::{ActionList, initialize_with};
//!
//! #[derive(Debug)]
//! struct Framework { name: &'static str }
//!
//! let log = Arc::new(Mutex::new(Vec::new()));
//! let actions = ActionList::new().with({
//!     let log = Arc::clone(&log);
//!     move |framework: &Framework| log.lock().unwrap().push(format!("{framework:?}"))
//! });
//!
//! let framework = initialize_with(Framework { name: "demo" }, &actions);
//! assert_eq!(framework.name, "demo");
//! assert_eq!(*log.lock().unwrap(), vec!["Framework { name: \"demo\" }"]);
//! ```

mod actions;
mod retry;
mod status;

pub use actions::{ActionList, Thunk, initialize_with, run_thunks, thunk};
pub use retry::{RetryPolicy, retry_until_true_or_timeout};
pub use status::StatusUpdater;
