//! Delimited-text (CSV) codec.

use crate::codec::ScheduleCodec;
use crate::error::{PlannerError, Result};
use crate::schedule::{Row, Schedule, ROW_HEADER};

/// Codec for `.csv` schedules: a `Day,Subject,Hours` header, then one row
/// per allocation.
#[derive(Debug, Clone, Copy, Default)]
pub struct DelimitedCodec;

impl DelimitedCodec {
    pub fn new() -> Self {
        Self
    }
}

impl ScheduleCodec for DelimitedCodec {
    fn encode(&self, schedule: &Schedule) -> Result<Vec<u8>> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(Vec::new());

        writer
            .write_record(ROW_HEADER)
            .map_err(|e| PlannerError::Format(format!("CSV write failed: {}", e)))?;
        for row in schedule.to_rows() {
            writer
                .serialize(&row)
                .map_err(|e| PlannerError::Format(format!("CSV write failed: {}", e)))?;
        }

        writer
            .into_inner()
            .map_err(|e| PlannerError::Format(format!("CSV flush failed: {}", e)))
    }

    fn decode(&self, bytes: &[u8]) -> Result<Schedule> {
        // Subjects are kept verbatim; only the header and numeric cells are trimmed.
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::Headers)
            .from_reader(bytes);

        let headers = reader
            .headers()
            .map_err(|e| PlannerError::Format(format!("Unreadable CSV header: {}", e)))?;
        if headers.iter().ne(ROW_HEADER) {
            return Err(PlannerError::Format(format!(
                "Expected CSV header \"{}\", found \"{}\"",
                ROW_HEADER.join(","),
                headers.iter().collect::<Vec<_>>().join(",")
            )));
        }

        Schedule::from_rows(reader.records().map(|record| {
            let record =
                record.map_err(|e| PlannerError::Format(format!("Invalid CSV row: {}", e)))?;
            parse_record(&record)
        }))
    }
}

fn parse_record(record: &csv::StringRecord) -> Result<Row> {
    let line = record.position().map(|p| p.line()).unwrap_or_default();

    let day = field(record, 0, "Day", line)?;
    let day = day.trim().parse::<u32>().map_err(|_| {
        PlannerError::Format(format!("Line {}: invalid Day \"{}\"", line, day))
    })?;
    let subject = field(record, 1, "Subject", line)?;
    let hours = field(record, 2, "Hours", line)?;
    let hours = hours.trim().parse::<f64>().map_err(|_| {
        PlannerError::Format(format!("Line {}: invalid Hours \"{}\"", line, hours))
    })?;

    Ok(Row::new(day, subject, hours))
}

fn field<'r>(
    record: &'r csv::StringRecord,
    index: usize,
    name: &str,
    line: u64,
) -> Result<&'r str> {
    record
        .get(index)
        .ok_or_else(|| PlannerError::Format(format!("Line {}: missing {} field", line, name)))
}
