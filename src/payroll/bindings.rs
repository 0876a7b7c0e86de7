//! Payslip placeholder tokens and their values

use chrono::NaiveDate;

use crate::template::{render_fixed, Rule};

use super::compute::{PayrollRates, Payslip};
use super::record::EmployeeRecord;

/// The week a payslip is issued for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayPeriod {
    pub date: NaiveDate,
}

impl PayPeriod {
    /// Period containing `date`
    pub fn new(date: NaiveDate) -> Self {
        Self { date }
    }

    /// Period containing today's local date
    pub fn today() -> Self {
        Self::new(chrono::Local::now().date_naive())
    }

    /// Issue date as `YYYY-MM-DD`
    pub fn date_label(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// Zero-padded ISO week number
    pub fn week_label(&self) -> String {
        self.date.format("%V").to_string()
    }
}

/// Substitution rules for one employee, identity fields first
pub fn payslip_rules(record: &EmployeeRecord, slip: &Payslip, period: &PayPeriod) -> Vec<Rule> {
    vec![
        Rule::value("+name+", record.name.as_str()),
        Rule::value("+PPSN+", record.pps.as_str()),
        Rule::value("+number+", record.number.as_str()),
        Rule::value("+week-number+", period.week_label()),
        Rule::value("+date+", period.date_label()),
        Rule::value("+hours-worked+", slip.hours_worked),
        Rule::value("+gross-pay+", slip.gross_pay),
        Rule::value("+PAYE+", slip.paye),
        Rule::value("+USC+", slip.usc),
        Rule::value("+gross-tax+", slip.gross_tax),
        Rule::value("+net-pay+", slip.net_pay),
        Rule::value("+hours-worked-pay+", slip.hours_worked_pay),
        Rule::value("+overtime+", slip.overtime_hours),
        Rule::value("+overtime-pay+", slip.overtime_pay),
        Rule::value("+holiday+", slip.holiday_hours),
        Rule::value("+holiday-pay+", slip.holiday_pay),
    ]
}

/// Compute and fill one employee's payslip
pub fn fill_payslip(
    template: &str,
    record: &EmployeeRecord,
    rates: &PayrollRates,
    period: &PayPeriod,
) -> String {
    let slip = Payslip::compute(record, rates);
    render_fixed(template, &payslip_rules(record, &slip, period))
}
