//! Timesheet parsing into employee records

use std::collections::HashMap;
use std::io::Read;

use thiserror::Error;

/// Weekday columns, Monday first
pub const WEEKDAYS: [&str; 5] = ["monday", "tuesday", "wednesday", "thursday", "friday"];

/// Weekend columns
pub const WEEKEND: [&str; 2] = ["saturday", "sunday"];

const REQUIRED_COLUMNS: [&str; 13] = [
    "monday", "tuesday", "wednesday", "thursday", "friday", "saturday", "sunday", "overtime",
    "holiday", "hourly", "name", "pps", "number",
];

/// Errors raised while reading a timesheet
#[derive(Debug, Error)]
pub enum RecordError {
    /// The header row lacks a required column
    #[error("timesheet is missing required column '{column}'")]
    MissingColumn { column: String },

    /// A field could not be parsed
    #[error("malformed record at row {row} ({employee}): field '{field}' has value '{value}'")]
    MalformedRecord {
        row: usize,
        employee: String,
        field: String,
        value: String,
    },

    /// The delimited file itself could not be read
    #[error("timesheet row {row} could not be read: {source}")]
    Csv {
        row: usize,
        #[source]
        source: csv::Error,
    },

    /// The header row could not be read
    #[error("timesheet header could not be read: {0}")]
    Header(#[source] csv::Error),
}

impl RecordError {
    /// Create a malformed record error
    pub fn malformed(
        row: usize,
        employee: impl Into<String>,
        field: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::MalformedRecord {
            row,
            employee: employee.into(),
            field: field.into(),
            value: value.into(),
        }
    }

    /// Row the error refers to, if it is tied to one
    pub fn row(&self) -> Option<usize> {
        match self {
            Self::MalformedRecord { row, .. } | Self::Csv { row, .. } => Some(*row),
            _ => None,
        }
    }
}

/// One employee's week, as read from the timesheet
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeRecord {
    /// 1-based data row in the timesheet
    pub row: usize,
    pub name: String,
    /// Tax reference (PPSN)
    pub pps: String,
    /// Employee number, kept as written
    pub number: String,
    /// Monday to Friday
    pub weekday_hours: [f64; 5],
    /// Saturday and Sunday
    pub weekend_hours: [f64; 2],
    pub overtime: f64,
    pub holiday: f64,
    pub hourly: f64,
}

impl EmployeeRecord {
    /// Name used for this employee's output file: `{number}_{name}` with
    /// spaces in the name turned into underscores
    pub fn artifact_stem(&self) -> String {
        format!("{}_{}", self.number, self.name.replace(' ', "_"))
    }
}

/// Column positions resolved from the header row
#[derive(Debug)]
struct Columns {
    index: HashMap<&'static str, usize>,
}

impl Columns {
    fn from_headers(headers: &csv::StringRecord) -> Result<Self, RecordError> {
        let mut index = HashMap::new();
        for column in REQUIRED_COLUMNS {
            let position = headers
                .iter()
                .position(|h| h.trim() == column)
                .ok_or_else(|| RecordError::MissingColumn {
                    column: column.to_string(),
                })?;
            index.insert(column, position);
        }
        Ok(Self { index })
    }

    fn get<'r>(&self, record: &'r csv::StringRecord, column: &str) -> &'r str {
        self.index
            .get(column)
            .and_then(|&i| record.get(i))
            .unwrap_or("")
            .trim()
    }
}

/// Read every row of a timesheet.
///
/// A bad header fails the whole read. Each data row gets its own result so
/// the caller decides whether one bad row stops the run.
pub fn read_timesheet<R: Read>(
    reader: R,
) -> Result<Vec<Result<EmployeeRecord, RecordError>>, RecordError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers().map_err(RecordError::Header)?.clone();
    let columns = Columns::from_headers(&headers)?;

    let rows = reader
        .records()
        .enumerate()
        .map(|(i, result)| {
            let row = i + 1;
            let record = result.map_err(|source| RecordError::Csv { row, source })?;
            parse_record(row, &record, &columns)
        })
        .collect();
    Ok(rows)
}

/// Parse a timesheet held in memory
pub fn parse_timesheet(
    content: &str,
) -> Result<Vec<Result<EmployeeRecord, RecordError>>, RecordError> {
    read_timesheet(content.as_bytes())
}

fn parse_record(
    row: usize,
    record: &csv::StringRecord,
    columns: &Columns,
) -> Result<EmployeeRecord, RecordError> {
    let name = columns.get(record, "name").to_string();
    let employee = if name.is_empty() {
        format!("row {row}")
    } else {
        name.clone()
    };
    // The name becomes part of the output file name
    if name.contains(['/', '\\']) {
        return Err(RecordError::malformed(row, employee.as_str(), "name", name.as_str()));
    }

    let hours = |column: &str| -> Result<f64, RecordError> {
        let raw = columns.get(record, column);
        match raw.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(RecordError::malformed(row, employee.as_str(), column, raw)),
        }
    };

    let mut weekday_hours = [0.0; 5];
    for (slot, day) in weekday_hours.iter_mut().zip(WEEKDAYS) {
        *slot = hours(day)?;
    }
    let mut weekend_hours = [0.0; 2];
    for (slot, day) in weekend_hours.iter_mut().zip(WEEKEND) {
        *slot = hours(day)?;
    }
    let overtime = hours("overtime")?;
    let holiday = hours("holiday")?;
    let hourly = hours("hourly")?;

    let number = columns.get(record, "number");
    if number.parse::<u64>().is_err() {
        return Err(RecordError::malformed(row, employee.as_str(), "number", number));
    }

    Ok(EmployeeRecord {
        row,
        name,
        pps: columns.get(record, "pps").to_string(),
        number: number.to_string(),
        weekday_hours,
        weekend_hours,
        overtime,
        holiday,
        hourly,
    })
}
