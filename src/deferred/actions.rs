//! Thunks and action lists.

use std::fmt;

use crate::function::{Function, ReferenceCounter, Shareable};

#[cfg(feature = "arc")]
type DynAction<C> = dyn Fn(&C) + Send + Sync;

#[cfg(not(feature = "arc"))]
type DynAction<C> = dyn Fn(&C);

/// A shared function taking no input.
pub type Thunk<R> = Function<(), R>;

/// Wraps a zero-argument closure as a [`Thunk`].
///
/// # Examples
///
/// ```
/// use lambdakit::deferred::thunk;
///
/// let always_true = thunk(|| true);
/// assert!(always_true.apply(()));
/// ```
pub fn thunk<R, F>(function: F) -> Thunk<R>
where
    F: Fn() -> R + Shareable + 'static,
{
    Function::new(move |()| function())
}

/// Runs every thunk once, in order.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use lambdakit::deferred::{run_thunks, thunk};
///
/// let counter = Arc::new(AtomicUsize::new(0));
/// let increment = {
///     let counter = Arc::clone(&counter);
///     thunk(move || {
///         counter.fetch_add(1, Ordering::SeqCst);
///     })
/// };
///
/// run_thunks(&[increment.clone(), increment]);
/// assert_eq!(counter.load(Ordering::SeqCst), 2);
/// ```
pub fn run_thunks<'a, I>(thunks: I)
where
    I: IntoIterator<Item = &'a Thunk<()>>,
{
    for thunk in thunks {
        thunk.apply(());
    }
}

/// An ordered list of actions that receive a shared context.
///
/// The actions are configured by one component and run by another, which
/// supplies the context when it is ready.
pub struct ActionList<C: ?Sized> {
    actions: Vec<ReferenceCounter<DynAction<C>>>,
}

impl<C: ?Sized> ActionList<C> {
    /// Creates an empty action list.
    pub const fn new() -> Self {
        Self {
            actions: Vec::new(),
        }
    }

    /// Appends an action.
    pub fn push<F>(&mut self, action: F)
    where
        F: Fn(&C) + Shareable + 'static,
    {
        self.actions.push(ReferenceCounter::new(action));
    }

    /// Appends an action (builder style).
    #[must_use]
    pub fn with<F>(mut self, action: F) -> Self
    where
        F: Fn(&C) + Shareable + 'static,
    {
        self.push(action);
        self
    }

    /// Runs every action with `context`, in insertion order.
    pub fn run(&self, context: &C) {
        tracing::trace!(actions = self.actions.len(), "running deferred actions");
        for action in &self.actions {
            action(context);
        }
    }

    /// Number of actions.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Returns `true` when the list holds no actions.
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

impl<C: ?Sized> Default for ActionList<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: ?Sized> Clone for ActionList<C> {
    fn clone(&self) -> Self {
        Self {
            actions: self.actions.clone(),
        }
    }
}

impl<C: ?Sized> fmt::Debug for ActionList<C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ActionList")
            .field("len", &self.actions.len())
            .finish()
    }
}

/// Hands a freshly built `value` to every action, then returns it.
///
/// Lets callers inject behaviour into the tail of an object's setup without
/// the object knowing what that behaviour is.
///
/// # Arguments
///
/// * `value` - The object whose construction has just finished
/// * `actions` - Actions run in order against `value`
///
/// # Returns
///
/// `value` itself, after every action has seen it.
///
/// # Examples
///
/// ```
/// use std::sync::{Arc, Mutex};
/// use lambdakit::deferred::{ActionList, initialize_with};
///
/// let announced = Arc::new(Mutex::new(Vec::new()));
/// let actions = ActionList::new().with({
///     let announced = Arc::clone(&announced);
///     move |name: &String| announced.lock().unwrap().push(format!("ready: {name}"))
/// });
///
/// let name = initialize_with("lambdas".to_string(), &actions);
/// assert_eq!(name, "lambdas");
/// assert_eq!(*announced.lock().unwrap(), vec!["ready: lambdas".to_string()]);
/// ```
pub fn initialize_with<T>(value: T, actions: &ActionList<T>) -> T {
    actions.run(&value);
    value
}
