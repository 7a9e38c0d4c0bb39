//! A terminal status line fed by a text generator closure.

use std::fmt;
use std::io::{self, Write};

/// ANSI "erase entire line" followed by a carriage return.
const CLEAR_LINE: &str = "\x1b[2K\r";

/// Rewrites a single status line each time [`print`](StatusUpdater::print)
/// is called.
///
/// The updater knows how to draw the line; the closure it holds knows what
/// the line says. Whoever drives the updater (a timer, a polling loop) never
/// sees either detail.
///
/// # Examples
///
/// ```
/// use lambdakit::deferred::StatusUpdater;
///
/// let mut ticks = 0;
/// let mut updater = StatusUpdater::new(
///     move || {
///         ticks += 1;
///         format!("{ticks:>3} ticks")
///     },
///     Vec::new(),
/// );
///
/// updater.print().unwrap();
/// updater.print().unwrap();
///
/// let written = String::from_utf8(updater.into_inner()).unwrap();
/// assert_eq!(written, "\x1b[2K\r  1 ticks\x1b[2K\r  2 ticks");
/// ```
pub struct StatusUpdater<G, W> {
    text_generator: G,
    output: W,
}

impl<G, W> StatusUpdater<G, W>
where
    G: FnMut() -> String,
    W: Write,
{
    /// Creates an updater writing the generator's text to `output`.
    pub const fn new(text_generator: G, output: W) -> Self {
        Self {
            text_generator,
            output,
        }
    }

    /// Clears the current line and writes freshly generated text.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from writing to or flushing the output.
    pub fn print(&mut self) -> io::Result<()> {
        let text = (self.text_generator)();
        write!(self.output, "{CLEAR_LINE}{text}")?;
        self.output.flush()
    }

    /// Consumes the updater and returns its output stream.
    pub fn into_inner(self) -> W {
        self.output
    }
}

impl<G, W> fmt::Debug for StatusUpdater<G, W> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("StatusUpdater").finish_non_exhaustive()
    }
}
