//! The printer: formatting state plus an output sink.

use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::error::PrintError;
use crate::layout::{render, RenderContext};
use crate::pretty::Pretty;

/// The printer's formatting state: two fields, read at the start of every
/// top-level print call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrinterOptions {
    /// Base indentation width applied to each slot line of a multi-line
    /// container.
    #[serde(default)]
    pub indent: usize,
    /// Whether a trailing line break terminates the top-level print call.
    #[serde(default = "default_newline")]
    pub newline: bool,
}

fn default_newline() -> bool {
    true
}

impl Default for PrinterOptions {
    fn default() -> Self {
        PrinterOptions {
            indent: 0,
            newline: true,
        }
    }
}

/// Renders values to an output sink.
///
/// `Printer::new()` targets stdout; [`Printer::with_sink`] injects any
/// [`io::Write`] sink, which is how the tests capture output. Formatting
/// state is configured through fluent setters:
///
/// ```rust
/// use pprint::Printer;
///
/// let mut sink = Vec::new();
/// let mut printer = Printer::with_sink(&mut sink).indent(2);
/// printer.print(&vec![1, 2, 3]).unwrap();
/// drop(printer);
/// assert_eq!(String::from_utf8(sink).unwrap(), "[\n  1, \n  2, \n  3\n]\n");
/// ```
///
/// A printer holds mutable display state and is meant for single-threaded,
/// one-object-per-print-session use; there is no internal locking.
#[derive(Debug)]
pub struct Printer<W = io::Stdout> {
    sink: W,
    options: PrinterOptions,
}

impl Printer<io::Stdout> {
    /// Printer writing to stdout with default options.
    pub fn new() -> Self {
        Printer::with_sink(io::stdout())
    }
}

impl Default for Printer<io::Stdout> {
    fn default() -> Self {
        Printer::new()
    }
}

impl<W: Write> Printer<W> {
    /// Printer writing to the given sink with default options.
    pub fn with_sink(sink: W) -> Self {
        Printer {
            sink,
            options: PrinterOptions::default(),
        }
    }

    /// Printer writing to the given sink with explicit options.
    pub fn with_options(sink: W, options: PrinterOptions) -> Self {
        Printer { sink, options }
    }

    /// Sets the base indentation width.
    pub fn indent(mut self, width: usize) -> Self {
        self.options.indent = width;
        self
    }

    /// Sets whether a trailing line break terminates each print call.
    pub fn newline(mut self, newline: bool) -> Self {
        self.options.newline = newline;
        self
    }

    /// The current formatting state.
    pub fn options(&self) -> PrinterOptions {
        self.options
    }

    /// Renders `value` to the sink using the current formatting state.
    pub fn print<T: Pretty + ?Sized>(&mut self, value: &T) -> Result<(), PrintError> {
        let node = value.node();
        render(
            &mut self.sink,
            &node,
            RenderContext::root(),
            self.options.indent,
            self.options.newline,
        )?;
        self.sink.flush()?;
        Ok(())
    }

    /// Consumes the printer and returns its sink.
    pub fn into_sink(self) -> W {
        self.sink
    }
}

/// Renders a value into a `String` with default options.
///
/// ```rust
/// use pprint::pformat;
///
/// assert_eq!(pformat(&(1, 'a')).unwrap(), "(1, 'a')\n");
/// ```
pub fn pformat<T: Pretty + ?Sized>(value: &T) -> Result<String, PrintError> {
    let mut printer = Printer::with_sink(Vec::new());
    printer.print(value)?;
    Ok(String::from_utf8(printer.into_sink())?)
}
