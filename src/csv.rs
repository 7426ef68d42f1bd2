// src/csv.rs
use std::io::{self, Write};

use crate::config::consts::HEADERS;
use crate::engine::Roster;

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write, S: AsRef<str>>(mut w: W, row: &[S], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        let cell = cell.as_ref();
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Header row, then one line per player.
pub fn write_roster<W: Write>(mut w: W, roster: &Roster, sep: char) -> io::Result<()> {
    write_row(&mut w, &HEADERS[..], sep)?;
    for row in &roster.rows {
        write_row(&mut w, &row.to_record()[..], sep)?;
    }
    Ok(())
}

/// Whole export as a string (preview, tests).
pub fn to_export_string(roster: &Roster, sep: char) -> String {
    let mut buf: Vec<u8> = Vec::new();
    let _ = write_roster(&mut buf, roster, sep);

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}
