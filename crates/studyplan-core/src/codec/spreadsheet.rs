//! Spreadsheet (xlsx) codec.
//!
//! Writes with `rust_xlsxwriter` and reads with `calamine`. Only the first
//! worksheet is read; Day and Hours are numeric cells, Subject a string cell.

use std::io::Cursor;

use calamine::{Data, Reader, Xlsx};
use rust_xlsxwriter::Workbook;

use crate::codec::ScheduleCodec;
use crate::error::{PlannerError, Result};
use crate::schedule::{Row, Schedule, ROW_HEADER};

/// Name of the worksheet holding the schedule rows.
pub const SHEET_NAME: &str = "Study Schedule";

/// Codec for `.xlsx` schedules.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpreadsheetCodec;

impl SpreadsheetCodec {
    pub fn new() -> Self {
        Self
    }
}

fn write_error(err: rust_xlsxwriter::XlsxError) -> PlannerError {
    PlannerError::Format(format!("Spreadsheet write failed: {}", err))
}

impl ScheduleCodec for SpreadsheetCodec {
    fn encode(&self, schedule: &Schedule) -> Result<Vec<u8>> {
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.set_name(SHEET_NAME).map_err(write_error)?;

        for (col, title) in ROW_HEADER.iter().enumerate() {
            sheet
                .write_string(0, col as u16, *title)
                .map_err(write_error)?;
        }

        for (index, row) in schedule.to_rows().iter().enumerate() {
            let line = index as u32 + 1;
            sheet
                .write_number(line, 0, f64::from(row.day))
                .map_err(write_error)?;
            sheet
                .write_string(line, 1, row.subject.as_str())
                .map_err(write_error)?;
            sheet.write_number(line, 2, row.hours).map_err(write_error)?;
        }

        workbook.save_to_buffer().map_err(write_error)
    }

    fn decode(&self, bytes: &[u8]) -> Result<Schedule> {
        let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(bytes))
            .map_err(|e| PlannerError::Format(format!("Unreadable spreadsheet: {}", e)))?;

        let range = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| PlannerError::Format("Spreadsheet has no worksheets".to_string()))?
            .map_err(|e| PlannerError::Format(format!("Unreadable worksheet: {}", e)))?;

        let mut rows = range.rows();
        let header = rows.next().ok_or_else(|| {
            PlannerError::Format("Spreadsheet is missing its header row".to_string())
        })?;
        check_header(header)?;

        Schedule::from_rows(
            rows.enumerate()
                .filter(|(_, cells)| !cells.iter().all(|cell| matches!(cell, Data::Empty)))
                .map(|(index, cells)| parse_row(index + 2, cells)),
        )
    }
}

fn check_header(cells: &[Data]) -> Result<()> {
    let matches = cells.len() >= ROW_HEADER.len()
        && ROW_HEADER.iter().zip(cells).all(|(expected, cell)| {
            matches!(cell, Data::String(value) if value.trim() == *expected)
        });
    if !matches {
        return Err(PlannerError::Format(format!(
            "Expected spreadsheet header \"{}\"",
            ROW_HEADER.join(", ")
        )));
    }
    Ok(())
}

fn parse_row(line: usize, cells: &[Data]) -> Result<Row> {
    let cell = |col: usize| cells.get(col).unwrap_or(&Data::Empty);
    Ok(Row {
        day: parse_day(line, cell(0))?,
        subject: parse_subject(line, cell(1))?,
        hours: parse_hours(line, cell(2))?,
    })
}

fn parse_day(line: usize, cell: &Data) -> Result<u32> {
    let day = match cell {
        Data::Int(value) => u32::try_from(*value).ok(),
        Data::Float(value)
            if value.fract() == 0.0 && *value >= 0.0 && *value <= f64::from(u32::MAX) =>
        {
            Some(*value as u32)
        }
        Data::String(value) => value.trim().parse::<u32>().ok(),
        _ => None,
    };
    day.ok_or_else(|| {
        PlannerError::Format(format!("Row {}: invalid Day cell {:?}", line, cell))
    })
}

fn parse_subject(line: usize, cell: &Data) -> Result<String> {
    match cell {
        Data::String(value) => Ok(value.clone()),
        Data::Int(value) => Ok(value.to_string()),
        Data::Float(value) => Ok(value.to_string()),
        _ => Err(PlannerError::Format(format!(
            "Row {}: invalid Subject cell {:?}",
            line, cell
        ))),
    }
}

fn parse_hours(line: usize, cell: &Data) -> Result<f64> {
    let hours = match cell {
        Data::Float(value) => Some(*value),
        Data::Int(value) => Some(*value as f64),
        Data::String(value) => value.trim().parse::<f64>().ok(),
        _ => None,
    };
    hours.ok_or_else(|| {
        PlannerError::Format(format!("Row {}: invalid Hours cell {:?}", line, cell))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::generate;

    fn workbook_bytes(rows: &[(&str, &str, &str)]) -> Vec<u8> {
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        for (index, (day, subject, hours)) in rows.iter().enumerate() {
            let line = index as u32;
            for (col, value) in [day, subject, hours].iter().enumerate() {
                match value.parse::<f64>() {
                    Ok(number) => sheet.write_number(line, col as u16, number).unwrap(),
                    Err(_) => sheet.write_string(line, col as u16, **value).unwrap(),
                };
            }
        }
        workbook.save_to_buffer().unwrap()
    }

    #[test]
    fn test_round_trip() {
        let schedule = generate(&["Math", "History", "Biology"], 7.0, 4).unwrap();
        let encoded = SpreadsheetCodec.encode(&schedule).unwrap();

        assert_eq!(SpreadsheetCodec.decode(&encoded).unwrap(), schedule);
    }

    #[test]
    fn test_empty_schedule_round_trip() {
        let encoded = SpreadsheetCodec.encode(&Schedule::new()).unwrap();
        assert!(SpreadsheetCodec.decode(&encoded).unwrap().is_empty());
    }

    #[test]
    fn test_decode_fills_skipped_day() {
        let bytes = workbook_bytes(&[
            ("Day", "Subject", "Hours"),
            ("1", "Math", "3"),
            ("1", "History", "3"),
            ("3", "Math", "3"),
        ]);
        let schedule = SpreadsheetCodec.decode(&bytes).unwrap();

        let numbers: Vec<u32> = schedule.days().iter().map(|d| d.day_number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        assert!(schedule.days()[1].subjects.is_empty());
    }

    #[test]
    fn test_decode_rejects_unsorted_days() {
        let bytes = workbook_bytes(&[
            ("Day", "Subject", "Hours"),
            ("2", "Math", "3"),
            ("1", "Math", "3"),
        ]);
        assert!(matches!(
            SpreadsheetCodec.decode(&bytes),
            Err(PlannerError::Format(_))
        ));
    }

    #[test]
    fn test_decode_rejects_missing_header() {
        let bytes = workbook_bytes(&[("1", "Math", "3")]);
        let err = SpreadsheetCodec.decode(&bytes).unwrap_err();
        assert!(err.to_string().contains("Expected spreadsheet header"));
    }

    #[test]
    fn test_decode_rejects_fractional_day() {
        let bytes = workbook_bytes(&[("Day", "Subject", "Hours"), ("1.5", "Math", "3")]);
        assert!(matches!(
            SpreadsheetCodec.decode(&bytes),
            Err(PlannerError::Format(_))
        ));
    }

    #[test]
    fn test_decode_rejects_non_spreadsheet_bytes() {
        assert!(matches!(
            SpreadsheetCodec.decode(b"Day,Subject,Hours\n"),
            Err(PlannerError::Format(_))
        ));
    }
}
