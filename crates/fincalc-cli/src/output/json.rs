use serde_json::Value;
use std::io::{self, Write};

/// Quote as indented JSON on stdout. Amounts stay decimal strings, so no
/// precision is lost to a float round trip.
pub fn print_json(value: &Value) {
    let mut out = io::stdout().lock();
    let written = serde_json::to_writer_pretty(&mut out, value)
        .map_err(io::Error::from)
        .and_then(|()| writeln!(out));
    if let Err(e) = written {
        // Reader went away, e.g. `fincalc ... | head`
        if e.kind() != io::ErrorKind::BrokenPipe {
            eprintln!("failed to write quote: {e}");
        }
    }
}
