use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use anyhow::{Context, Result};

/// One CSV record, fields kept as text.
pub type Row = Vec<String>;

/// Read every record of `path`. The first line is data like any other.
pub fn load_rows(path: &Path) -> Result<Vec<Row>> {
    let file = File::open(path).with_context(|| format!("cannot open input: {}", path.display()))?;
    let rows = read_rows(BufReader::new(file))
        .with_context(|| format!("cannot decode CSV: {}", path.display()))?;
    tracing::debug!(path = %path.display(), rows = rows.len(), "loaded csv");
    Ok(rows)
}

/// Blank lines become empty rows so later rows keep their line positions.
/// The csv reader itself skips them, so records are cut at line ends first
/// (a line end inside an open quote continues the record).
pub(crate) fn read_rows<R: Read>(mut reader: R) -> Result<Vec<Row>, csv::Error> {
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf)?;

    let mut rows = Vec::new();
    let mut pending: Vec<u8> = Vec::new();
    for line in buf.split_inclusive(|&b| b == b'\n') {
        if pending.is_empty() && is_blank_line(line) {
            rows.push(Row::new());
            continue;
        }
        pending.extend_from_slice(line);
        if quotes_balanced(&pending) {
            parse_records(&pending, &mut rows)?;
            pending.clear();
        }
    }
    if !pending.is_empty() {
        parse_records(&pending, &mut rows)?;
    }
    Ok(rows)
}

fn is_blank_line(line: &[u8]) -> bool {
    line == b"\n" || line == b"\r\n"
}

// "" escapes keep the parity, so an even count means no quote is open.
fn quotes_balanced(bytes: &[u8]) -> bool {
    bytes.iter().filter(|&&b| b == b'"').count() % 2 == 0
}

fn parse_records(chunk: &[u8], rows: &mut Vec<Row>) -> Result<(), csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(chunk);
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    Ok(())
}
