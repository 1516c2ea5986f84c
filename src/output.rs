//! Result rendering.
//!
//! Uses itoa for integer formatting to avoid allocating per bound.

use crate::interval::Interval;
use std::io::{self, BufWriter, Write};

/// Separator between rendered intervals.
pub const SEPARATOR: &str = ", ";

/// Render intervals as `start-end` joined by `", "`.
///
/// An empty list renders as the empty string.
///
/// # Example
///
/// ```
/// use rangecut::{format_intervals, Interval};
///
/// let text = format_intervals(&[Interval::new(10, 19), Interval::new(31, 100)]);
/// assert_eq!(text, "10-19, 31-100");
/// ```
pub fn format_intervals(intervals: &[Interval]) -> String {
    let mut text = String::with_capacity(intervals.len() * 12);
    let mut itoa_buf = itoa::Buffer::new();
    for (i, interval) in intervals.iter().enumerate() {
        if i > 0 {
            text.push_str(SEPARATOR);
        }
        text.push_str(itoa_buf.format(interval.start));
        text.push('-');
        text.push_str(itoa_buf.format(interval.end));
    }
    text
}

/// Write the rendered list followed by a newline.
pub fn write_intervals<W: Write>(writer: &mut W, intervals: &[Interval]) -> io::Result<()> {
    let mut out = IntervalWriter::new(writer);
    out.write_line(intervals)?;
    out.flush()
}

fn write_list<W: Write>(
    writer: &mut W,
    intervals: &[Interval],
    itoa_buf: &mut itoa::Buffer,
) -> io::Result<()> {
    for (i, interval) in intervals.iter().enumerate() {
        if i > 0 {
            writer.write_all(SEPARATOR.as_bytes())?;
        }
        writer.write_all(itoa_buf.format(interval.start).as_bytes())?;
        writer.write_all(b"-")?;
        writer.write_all(itoa_buf.format(interval.end).as_bytes())?;
    }
    Ok(())
}

/// Buffered writer for interval lists.
pub struct IntervalWriter<W: Write> {
    writer: BufWriter<W>,
    itoa_buf: itoa::Buffer,
}

impl<W: Write> IntervalWriter<W> {
    /// Create a new writer with the default buffer.
    pub fn new(output: W) -> Self {
        Self {
            writer: BufWriter::new(output),
            itoa_buf: itoa::Buffer::new(),
        }
    }

    /// Write one list followed by a newline.
    #[inline]
    pub fn write_line(&mut self, intervals: &[Interval]) -> io::Result<()> {
        write_list(&mut self.writer, intervals, &mut self.itoa_buf)?;
        self.writer.write_all(b"\n")
    }

    /// Write a single interval without separator or newline.
    #[inline]
    pub fn write_interval(&mut self, interval: &Interval) -> io::Result<()> {
        write_list(&mut self.writer, std::slice::from_ref(interval), &mut self.itoa_buf)
    }

    /// Write the list separator.
    #[inline]
    pub fn write_separator(&mut self) -> io::Result<()> {
        self.writer.write_all(SEPARATOR.as_bytes())
    }

    /// Write a newline.
    #[inline]
    pub fn write_newline(&mut self) -> io::Result<()> {
        self.writer.write_all(b"\n")
    }

    /// Flush the buffer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
