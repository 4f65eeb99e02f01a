//! Minimal reader for single-column extraction from drill tables.

use std::io::BufRead;

use super::CatalogError;

/// Reads every numeric cell of `column`, skipping blanks and junk.
pub(super) fn read_column(reader: impl BufRead, column: &str) -> Result<Vec<f64>, CatalogError> {
    let mut lines = reader.lines();

    let Some(header) = lines.next().transpose()? else {
        return Err(CatalogError::MissingColumn {
            column: column.to_string(),
        });
    };

    let index = split_record(header.trim_start_matches('\u{feff}'))
        .iter()
        .position(|name| name == column)
        .ok_or_else(|| CatalogError::MissingColumn {
            column: column.to_string(),
        })?;

    let mut values = Vec::new();
    for line in lines {
        let line = line?;
        let cells = split_record(&line);
        if let Some(value) = cells.get(index).and_then(|cell| cell.parse::<f64>().ok()) {
            values.push(value);
        }
    }

    Ok(values)
}

/// Splits a CSV record, honoring double-quoted cells.
///
/// Cells are trimmed. Doubled quotes inside a quoted cell become one quote.
fn split_record(line: &str) -> Vec<String> {
    let mut cells = Vec::new();
    let mut cell = String::new();
    let mut quoted = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if quoted && chars.peek() == Some(&'"') => {
                cell.push('"');
                chars.next();
            }
            '"' => quoted = !quoted,
            ',' if !quoted => cells.push(std::mem::take(&mut cell).trim().to_string()),
            _ => cell.push(c),
        }
    }
    cells.push(cell.trim().to_string());

    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_blank_and_non_numeric_cells() {
        let text = "Size,Bits in millimeters\n\
                    #80,0.3429\n\
                    note,n/a\n\
                    empty,\n\
                    short\n\
                    #79, 0.3683 \n";

        let values = read_column(text.as_bytes(), "Bits in millimeters").unwrap();
        assert_eq!(values, vec![0.3429, 0.3683]);
    }

    #[test]
    fn quoted_cells_may_contain_commas() {
        let text = "\"Name, fractional\",Bits in millimeters\n\"1/16\"\", jobber\",1.5875\n";
        let values = read_column(text.as_bytes(), "Bits in millimeters").unwrap();
        assert_eq!(values, vec![1.5875]);
    }

    #[test]
    fn missing_column_is_reported() {
        let result = read_column("Bits in inches\n0.0135\n".as_bytes(), "Bits in millimeters");
        assert!(matches!(
            result,
            Err(CatalogError::MissingColumn { column }) if column == "Bits in millimeters"
        ));
    }

    #[test]
    fn empty_input_has_no_header() {
        let result = read_column("".as_bytes(), "Bits in millimeters");
        assert!(matches!(result, Err(CatalogError::MissingColumn { .. })));
    }

    #[test]
    fn strips_byte_order_mark() {
        let text = "\u{feff}Bits in millimeters\n0.5\n";
        assert_eq!(read_column(text.as_bytes(), "Bits in millimeters").unwrap(), vec![0.5]);
    }
}
