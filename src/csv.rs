// src/csv.rs
// CSV/TSV reading and writing over the `csv` crate.

use std::io::Write;

use csv::{ReaderBuilder, Terminator, WriterBuilder};

use crate::error::Result;

/* ---------------- Parsing ---------------- */

/// Parse delimited text into rows. Quotes and CRLF are handled; rows may be ragged.
pub fn parse_rows(text: &str, delim: u8) -> Result<Vec<Vec<String>>> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(delim)
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        if rec.len() == 1 && rec[0].is_empty() { continue; }
        rows.push(rec.iter().map(|c| s!(c)).collect());
    }
    Ok(rows)
}

/* ---------------- Writing ---------------- */

fn writer<W: Write>(w: W, delim: u8) -> csv::Writer<W> {
    WriterBuilder::new()
        .delimiter(delim)
        .flexible(true)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(w)
}

/// Full export text for Copy/Export.
/// - `headers`: table headers (if any)
/// - `include_headers`: whether to emit the header line
/// - `delim`: field separator (`b','` or `b'\t'`)
pub fn to_export_string(
    headers: &Option<Vec<String>>,
    rows: &[Vec<String>],
    include_headers: bool,
    delim: u8,
) -> Result<String> {
    let mut buf: Vec<u8> = Vec::new();
    {
        let mut wtr = writer(&mut buf, delim);
        if include_headers {
            if let Some(h) = headers {
                wtr.write_record(h)?;
            }
        }
        for r in rows {
            wtr.write_record(r)?;
        }
        wtr.flush()?;
    }

    Ok(match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> { cells.iter().map(|c| s!(*c)).collect() }

    #[test]
    fn quotes_only_when_needed() {
        let out = to_export_string(
            &Some(row(&["Name", "Office"])),
            &[row(&["Ada", "12, Marina \"Rd\""])],
            true,
            b',',
        ).unwrap();
        assert_eq!(out, "Name,Office\nAda,\"12, Marina \"\"Rd\"\"\"\n");
    }

    #[test]
    fn tsv_leaves_commas_alone() {
        let out = to_export_string(&None, &[row(&["a,b", "c"])], true, b'\t').unwrap();
        assert_eq!(out, "a,b\tc\n");
    }

    #[test]
    fn parse_handles_crlf_and_quotes() {
        let rows = parse_rows("a,\"b\nc\"\r\nd,e\r\n", b',').unwrap();
        assert_eq!(rows, vec![row(&["a", "b\nc"]), row(&["d", "e"])]);
    }
}
