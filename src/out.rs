// src/out.rs
use serde::Serialize;
use serde_json::json;
use std::io::{self, Write};

/// Emit a single-line JSON envelope to stdout. Logs stay on stderr, so piping
/// stdout always yields exactly one machine-readable line.
pub fn print_result<T: Serialize>(op: &str, result: &T) -> anyhow::Result<()> {
    let env = json!({
        "op": op,
        "result": result,
    });
    let mut out = io::stdout();
    serde_json::to_writer(&mut out, &env)?;
    writeln!(&mut out)?;
    Ok(())
}
