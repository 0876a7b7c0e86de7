//! Payslip generator
//!
//! Reads a weekly timesheet, computes pay and flat-rate tax for each
//! employee and fills a payslip template with the results.

mod bindings;
mod compute;
mod record;

pub use bindings::{fill_payslip, payslip_rules, PayPeriod};
pub use compute::{PayrollRates, Payslip};
pub use record::{parse_timesheet, read_timesheet, EmployeeRecord, RecordError, WEEKDAYS, WEEKEND};

/// What to do with a timesheet row that fails to parse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecordPolicy {
    /// Stop the run at the first bad row
    #[default]
    Abort,
    /// Report the row and carry on with the rest
    Skip,
}
