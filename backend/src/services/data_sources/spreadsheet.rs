use calamine::{open_workbook_from_rs, Data, Reader, Xlsx, XlsxError};
use common::error::{WorkflowError, WorkflowResult};
use common::model::record::RawTable;
use std::io::Cursor;

// Integers above this lose precision as f64 and are rendered as-is.
const MAX_EXACT_FLOAT: f64 = 9_007_199_254_740_992.0;

/// Renders a cell as text. Whole numbers lose the fractional part, so a phone
/// typed as a number keeps its eleven digits.
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) if f.fract() == 0.0 && f.abs() < MAX_EXACT_FLOAT => {
            format!("{}", *f as i64)
        }
        other => other.to_string(),
    }
}

/// Reads the first worksheet of an `.xlsx` workbook; its first row is the header.
pub fn parse_xlsx(bytes: &[u8]) -> WorkflowResult<RawTable> {
    let mut workbook: Xlsx<Cursor<&[u8]>> = open_workbook_from_rs(Cursor::new(bytes))
        .map_err(|e: XlsxError| WorkflowError::FileParse(e.to_string()))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| WorkflowError::FileParse("a planilha não possui abas".to_string()))?
        .map_err(|e: XlsxError| WorkflowError::FileParse(e.to_string()))?;

    let mut rows = range.rows();
    let headers: Vec<String> = match rows.next() {
        Some(header) => header
            .iter()
            .map(cell_text)
            .collect(),
        None => {
            return Err(WorkflowError::FileParse(
                "nenhuma coluna encontrada na planilha".to_string(),
            ))
        }
    };

    let rows = rows
        .map(|row| row.iter().map(cell_text).collect())
        .collect();

    Ok(RawTable::from_rows(headers, rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_xlsxwriter::Workbook;

    fn workbook_bytes(build: impl FnOnce(&mut rust_xlsxwriter::Worksheet)) -> Vec<u8> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        build(worksheet);
        workbook.save_to_buffer().unwrap()
    }

    #[test]
    fn reads_text_and_numeric_phones() {
        let bytes = workbook_bytes(|sheet| {
            sheet.write_string(0, 0, "nome").unwrap();
            sheet.write_string(0, 1, "telefone").unwrap();
            sheet.write_string(1, 0, "Ana").unwrap();
            sheet.write_number(1, 1, 85989659006.0).unwrap();
            sheet.write_string(2, 0, "Bia").unwrap();
            sheet.write_string(2, 1, "(11) 98965-9006").unwrap();
        });

        let table = parse_xlsx(&bytes).unwrap();

        assert_eq!(table.headers, vec!["nome", "telefone"]);
        assert_eq!(table.records[0].phone(), "85989659006");
        assert_eq!(table.records[1].phone(), "(11) 98965-9006");
        assert_eq!(table.records[1].get("nome"), Some("Bia"));
    }

    #[test]
    fn empty_cells_read_as_empty_text() {
        let bytes = workbook_bytes(|sheet| {
            sheet.write_string(0, 0, "telefone").unwrap();
            sheet.write_string(0, 1, "nome").unwrap();
            sheet.write_string(1, 1, "Ana").unwrap();
        });

        let table = parse_xlsx(&bytes).unwrap();
        assert_eq!(table.records[0].phone(), "");
    }

    #[test]
    fn header_titles_are_not_trimmed() {
        let bytes = workbook_bytes(|sheet| {
            sheet.write_string(0, 0, " telefone ").unwrap();
            sheet.write_number(1, 0, 85989659006.0).unwrap();
        });

        let table = parse_xlsx(&bytes).unwrap();
        assert!(!table.has_column("telefone"));
        assert!(table.has_column(" telefone "));
    }

    #[test]
    fn garbage_is_a_parse_error() {
        let err = parse_xlsx(b"definitely not a zip archive").unwrap_err();
        assert!(matches!(err, WorkflowError::FileParse(_)));
    }

    #[test]
    fn renders_whole_floats_without_fraction() {
        assert_eq!(cell_text(&Data::Float(85989659006.0)), "85989659006");
        assert_eq!(cell_text(&Data::Float(1.5)), "1.5");
        assert_eq!(cell_text(&Data::Int(42)), "42");
        assert_eq!(cell_text(&Data::Empty), "");
    }
}
