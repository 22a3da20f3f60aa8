//! Response output.
//!
//! Concourse parses stdout as exactly one JSON document, so nothing else may
//! be written there.

use std::io::Write;

use serde::Serialize;

use crate::error::Result;

/// Write `value` as a single line of JSON and flush.
pub fn write_json<W: Write, T: Serialize>(mut writer: W, value: &T) -> Result<()> {
    serde_json::to_writer(&mut writer, value)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
