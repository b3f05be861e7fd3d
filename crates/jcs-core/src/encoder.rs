//! The canonical encoder.
//!
//! Recursive dispatch over [`Value`]: scalars go to their formatting modules,
//! arrays emit in document order, objects emit members sorted by the UTF-16
//! key comparator. The output contains no whitespace anywhere.

use std::io::Write;

use crate::error::Result;
use crate::escape::write_escaped;
use crate::number::{write_float, write_integer};
use crate::order::compare_keys;
use crate::types::Value;

/// Canonicalize `value` into an owned byte buffer.
///
/// The returned bytes are valid UTF-8 and exactly reproducible: encoding the
/// same logical value always yields the same buffer.
pub fn to_vec(value: &Value) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(128);
    encode_value(&mut out, value)?;
    Ok(out)
}

/// Canonicalize `value` into a caller-provided sink.
///
/// Avoids the intermediate allocation of [`to_vec`] when writing to a file or
/// socket. On error the sink may already hold a partial prefix; callers must
/// discard it. The argument order follows `serde_json::to_writer`.
pub fn to_writer<W: Write>(mut writer: W, value: &Value) -> Result<()> {
    encode_value(&mut writer, value)
}

fn encode_value<W: Write>(sink: &mut W, value: &Value) -> Result<()> {
    match value {
        Value::Null => sink.write_all(b"null")?,
        Value::Bool(true) => sink.write_all(b"true")?,
        Value::Bool(false) => sink.write_all(b"false")?,
        Value::Integer(n) => write_integer(sink, *n)?,
        Value::Float(f) => write_float(sink, *f)?,
        Value::String(s) => write_escaped(sink, s)?,
        Value::Array(items) => encode_array(sink, items)?,
        Value::Object(members) => encode_object(sink, members)?,
    }
    Ok(())
}

fn encode_array<W: Write>(sink: &mut W, items: &[Value]) -> Result<()> {
    sink.write_all(b"[")?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            sink.write_all(b",")?;
        }
        encode_value(sink, item)?;
    }
    sink.write_all(b"]")?;
    Ok(())
}

/// Members are sorted through a vector of borrows; the input tree is never
/// reordered. Duplicate keys are the constructor's bug, not ours: they are
/// emitted as-is in their sorted positions.
fn encode_object<W: Write>(sink: &mut W, members: &[(String, Value)]) -> Result<()> {
    sink.write_all(b"{")?;
    let mut sorted: Vec<&(String, Value)> = members.iter().collect();
    sorted.sort_by(|a, b| compare_keys(&a.0, &b.0));
    for (i, (key, value)) in sorted.iter().map(|m| (&m.0, &m.1)).enumerate() {
        if i > 0 {
            sink.write_all(b",")?;
        }
        write_escaped(sink, key)?;
        sink.write_all(b":")?;
        encode_value(sink, value)?;
    }
    sink.write_all(b"}")?;
    Ok(())
}
