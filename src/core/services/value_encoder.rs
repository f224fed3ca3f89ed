//! Canonical JSON text used for variable values and the merged dump.
//!
//! Matches the conventional "pretty-compact" layout found in many
//! pipeline tools: `", "` between items, `": "` between key and value,
//! and every non-ASCII character escaped as `\uXXXX`.

use std::io;

use serde::Serialize;
use serde_json::Value;
use serde_json::ser::Formatter;

use crate::core::errors::{PipesError, Result};

/// `serde_json` formatter producing the canonical layout.
#[derive(Debug, Clone, Copy, Default)]
pub struct CanonicalFormatter;

impl Formatter for CanonicalFormatter {
    fn begin_array_value<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        writer.write_all(b": ")
    }

    fn write_string_fragment<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        fragment: &str,
    ) -> io::Result<()> {
        if fragment.bytes().all(|b| b.is_ascii() && b != 0x7f) {
            return writer.write_all(fragment.as_bytes());
        }

        let mut units = [0u16; 2];
        for c in fragment.chars() {
            if c.is_ascii() && c != '\x7f' {
                writer.write_all(&[c as u8])?;
            } else {
                for unit in c.encode_utf16(&mut units) {
                    write!(writer, "\\u{unit:04x}")?;
                }
            }
        }
        Ok(())
    }
}

/// Serialize any value to canonical JSON text.
pub fn to_canonical_string<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, CanonicalFormatter);
    value
        .serialize(&mut ser)
        .map_err(|e| PipesError::EncodeError {
            detail: e.to_string(),
        })?;

    String::from_utf8(buf).map_err(|e| PipesError::EncodeError {
        detail: e.to_string(),
    })
}

/// Encode a property value for a `NAME=value` line.
///
/// Scalars are written as their JSON text (`"internal"`, `1`, `true`,
/// `null`). Objects and arrays are wrapped in single quotes so the
/// line survives being sourced by a shell.
pub fn encode_value(value: &Value) -> Result<String> {
    let raw = to_canonical_string(value)?;
    match value {
        Value::Object(_) | Value::Array(_) => Ok(format!("'{raw}'")),
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => Ok(raw),
    }
}
