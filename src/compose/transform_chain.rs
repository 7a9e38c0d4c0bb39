//! Folding an ordered function sequence into one function.

use crate::function::{Function, TryFunction};

use super::identity;

/// Composes an ordered sequence of transforms into one function.
///
/// The returned function folds its input through the sequence left to
/// right: `chain([f1, f2, f3]).apply(x) == f3(f2(f1(x)))`. Each stage runs at
/// most once per call, strictly in list order. An empty sequence yields the
/// identity function.
///
/// A stage that panics unwinds straight through the chain; later stages do
/// not run. Use [`try_chain`] for stages that report faults as `Err`.
///
/// # Examples
///
/// ```
/// use lambdakit::compose::chain;
/// use lambdakit::function::{Function, make_multiplier, power_of};
///
/// let double_then_square = chain([make_multiplier(2), power_of(2)]);
/// assert_eq!(double_then_square.apply(3), 36);
///
/// let nothing: Vec<Function<i64, i64>> = Vec::new();
/// assert_eq!(chain(nothing).apply(7), 7);
/// ```
pub fn chain<T, I>(functions: I) -> Function<T, T>
where
    T: 'static,
    I: IntoIterator<Item = Function<T, T>>,
{
    let stages: Vec<Function<T, T>> = functions.into_iter().collect();
    tracing::trace!(stages = stages.len(), "building transform chain");

    if stages.is_empty() {
        return Function::new(identity::<T>);
    }

    Function::new(move |input| {
        stages
            .iter()
            .fold(input, |accumulator, stage| stage.apply(accumulator))
    })
}

/// Composes an ordered sequence of fallible transforms into one function.
///
/// Stages run left to right exactly as in [`chain`], except that the first
/// `Err` is returned unchanged and every later stage is skipped. An empty
/// sequence yields `Ok(input)`.
///
/// # Examples
///
/// ```
/// use lambdakit::compose::try_chain;
/// use lambdakit::function::Function;
///
/// let parse = Function::new(|text: String| {
///     text.trim().parse::<i64>().map(|n| n.to_string()).map_err(|error| error.to_string())
/// });
/// let exclaim = Function::new(|text: String| Ok::<_, String>(format!("{text}!")));
///
/// let transform = try_chain([parse, exclaim]);
/// assert_eq!(transform.apply(" 42 ".to_string()), Ok("42!".to_string()));
/// assert!(transform.apply("forty-two".to_string()).is_err());
/// ```
pub fn try_chain<T, E, I>(functions: I) -> TryFunction<T, T, E>
where
    T: 'static,
    E: 'static,
    I: IntoIterator<Item = TryFunction<T, T, E>>,
{
    let stages: Vec<TryFunction<T, T, E>> = functions.into_iter().collect();
    tracing::trace!(stages = stages.len(), "building fallible transform chain");

    Function::new(move |input| {
        stages
            .iter()
            .enumerate()
            .try_fold(input, |accumulator, (index, stage)| {
                stage.apply(accumulator).inspect_err(|_| {
                    tracing::debug!(stage = index, "transform chain aborted by failing stage");
                })
            })
    })
}
