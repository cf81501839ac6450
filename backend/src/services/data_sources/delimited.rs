use common::error::{WorkflowError, WorkflowResult};
use common::model::record::RawTable;
use csv::ReaderBuilder;

const CANDIDATE_DELIMITERS: [u8; 4] = [b',', b';', b'\t', b'|'];

/// Picks the delimiter that occurs most often in the header line.
/// Ties, and a header with none of the candidates, resolve to the earliest candidate.
fn detect_delimiter(header_line: &str) -> u8 {
    let mut best = (b',', 0);
    for delimiter in CANDIDATE_DELIMITERS {
        let count = header_line.bytes().filter(|&b| b == delimiter).count();
        if count > best.1 {
            best = (delimiter, count);
        }
    }
    best.0
}

fn parse_error(e: impl std::fmt::Display) -> WorkflowError {
    WorkflowError::FileParse(e.to_string())
}

/// Reads a UTF-8 CSV with a header row.
///
/// Header titles and cells are kept verbatim. Short rows are padded with empty
/// cells; a row with more fields than the header is a parse error.
pub fn parse_csv(bytes: &[u8]) -> WorkflowResult<RawTable> {
    let text = std::str::from_utf8(bytes)
        .map_err(|e| parse_error(format!("o arquivo não está em UTF-8 ({})", e)))?;
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let header_line = text.lines().next().unwrap_or_default();
    if header_line.trim().is_empty() {
        return Err(parse_error("nenhuma coluna encontrada no arquivo"));
    }

    let mut reader = ReaderBuilder::new()
        .delimiter(detect_delimiter(header_line))
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(parse_error)?
        .iter()
        .map(str::to_string)
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(parse_error)?;
        if record.len() > headers.len() {
            let line = record.position().map(|p| p.line()).unwrap_or_default();
            return Err(parse_error(format!(
                "linha {} tem {} campos, mas o cabeçalho tem {}",
                line,
                record.len(),
                headers.len()
            )));
        }
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(RawTable::from_rows(headers, rows))
}
