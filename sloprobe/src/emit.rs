//! Line-oriented JSON output for samples and reports.
//!
//! Output uses the `", "` / `": "` separators of Python's `json.dumps` so the
//! line is byte-compatible with what orchestrators already parse.

use std::io::{self, Write};

use serde::Serialize;
use serde_json::ser::{Formatter, Serializer};

use crate::sample::{SampleError, SignalSample};

#[derive(Debug, Default, Clone, Copy)]
pub struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first { Ok(()) } else { writer.write_all(b", ") }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first { Ok(()) } else { writer.write_all(b", ") }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        writer.write_all(b": ")
    }
}

/// Renders any serializable value as a single newline-terminated line.
pub fn render_json_line<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::with_capacity(128);
    let mut ser = Serializer::with_formatter(&mut buf, SpacedFormatter);
    value.serialize(&mut ser)?;
    buf.push(b'\n');
    Ok(buf)
}

pub fn render_line(sample: &SignalSample) -> Result<Vec<u8>, SampleError> {
    render_json_line(sample).map_err(SampleError::Serialize)
}

/// Renders fully before touching `out`; a failed render writes nothing.
pub fn write_sample<W: Write + ?Sized>(out: &mut W, sample: &SignalSample) -> Result<(), SampleError> {
    let line = render_line(sample)?;
    out.write_all(&line).map_err(SampleError::Write)?;
    out.flush().map_err(SampleError::Write)
}
