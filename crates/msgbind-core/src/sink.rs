//! Output sinks for generated text.

use crate::error::{GenError, GenResult};
use std::fmt::{self, Write as _};
use std::io::Write;

/// Append-only destination for generated fragments.
pub trait Sink {
    /// Append `text`, prefixing each non-empty line with `indent` levels of
    /// indentation.
    fn emit(&mut self, text: &str, indent: usize) -> GenResult<()>;
}

/// Indent every non-empty line of `text` by `level` copies of `unit`.
///
/// Empty lines are passed through untouched so the output carries no
/// trailing whitespace.
pub fn indent_lines(text: &str, level: usize, unit: &str) -> GenResult<String> {
    if level == 0 {
        return Ok(text.to_string());
    }

    let prefix = unit.repeat(level);
    let mut result = String::with_capacity(text.len() + prefix.len() * 8);
    // `with_str` needs a 'static unit, the prefix is built at runtime
    let mut insert = move |_: usize, f: &mut dyn fmt::Write| f.write_str(&prefix);
    indenter::indented(&mut result)
        .with_format(indenter::Format::Custom {
            inserter: &mut insert,
        })
        .write_str(text)
        .map_err(|e| GenError::Io(std::io::Error::other(e)))?;

    Ok(result)
}

/// Sink collecting output in memory.
#[derive(Debug, Clone, Default)]
pub struct StringSink {
    buffer: String,
    unit: String,
}

impl StringSink {
    pub fn new(unit: impl Into<String>) -> Self {
        Self {
            buffer: String::new(),
            unit: unit.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn into_string(self) -> String {
        self.buffer
    }
}

impl Sink for StringSink {
    fn emit(&mut self, text: &str, indent: usize) -> GenResult<()> {
        self.buffer.push_str(&indent_lines(text, indent, &self.unit)?);
        Ok(())
    }
}

/// Sink forwarding to any [`Write`] implementation.
pub struct WriterSink<W: Write> {
    inner: W,
    unit: String,
}

impl<W: Write> WriterSink<W> {
    pub fn new(inner: W, unit: impl Into<String>) -> Self {
        Self {
            inner,
            unit: unit.into(),
        }
    }

    /// Flush and return the wrapped writer.
    pub fn into_inner(mut self) -> GenResult<W> {
        self.inner.flush()?;
        Ok(self.inner)
    }
}

impl<W: Write> Sink for WriterSink<W> {
    fn emit(&mut self, text: &str, indent: usize) -> GenResult<()> {
        self.inner
            .write_all(indent_lines(text, indent, &self.unit)?.as_bytes())?;
        Ok(())
    }
}
