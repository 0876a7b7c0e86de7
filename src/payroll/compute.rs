//! Payroll arithmetic

use serde::Deserialize;

use super::record::EmployeeRecord;

/// Rates and weights used to turn hours into pay
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PayrollRates {
    /// Flat income tax rate applied to gross pay
    pub paye_rate: f64,
    /// Flat universal social charge rate applied to gross pay
    pub usc_rate: f64,
    /// Weight of one overtime hour in the payable hours total
    pub overtime_payable_weight: f64,
    /// Multiplier of the hourly rate for the displayed overtime pay
    pub overtime_pay_multiplier: f64,
}

impl Default for PayrollRates {
    fn default() -> Self {
        Self {
            paye_rate: 0.23,
            usc_rate: 0.02,
            overtime_payable_weight: 0.5,
            overtime_pay_multiplier: 1.5,
        }
    }
}

impl PayrollRates {
    /// Create rates with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the PAYE rate
    pub fn with_paye_rate(mut self, rate: f64) -> Self {
        self.paye_rate = rate;
        self
    }

    /// Set the USC rate
    pub fn with_usc_rate(mut self, rate: f64) -> Self {
        self.usc_rate = rate;
        self
    }
}

/// Figures printed on one payslip
#[derive(Debug, Clone, PartialEq)]
pub struct Payslip {
    pub total_weekday_hours: f64,
    pub total_weekend_hours: f64,
    pub hours_worked: f64,
    pub payable_hours: f64,
    pub gross_pay: f64,
    pub paye: f64,
    pub usc: f64,
    pub gross_tax: f64,
    pub net_pay: f64,
    pub hours_worked_pay: f64,
    pub overtime_hours: f64,
    pub overtime_pay: f64,
    pub holiday_hours: f64,
    pub holiday_pay: f64,
}

impl Payslip {
    /// Compute the payslip for one record.
    ///
    /// Overtime counts at `overtime_payable_weight` toward gross pay but is
    /// displayed at `overtime_pay_multiplier`; the two are not reconciled.
    pub fn compute(record: &EmployeeRecord, rates: &PayrollRates) -> Self {
        let total_weekday_hours: f64 = record.weekday_hours.iter().sum();
        let total_weekend_hours: f64 = record.weekend_hours.iter().sum();
        let hours_worked = total_weekday_hours + total_weekend_hours;

        let payable_hours =
            hours_worked + rates.overtime_payable_weight * record.overtime + record.holiday;
        let gross_pay = payable_hours * record.hourly;

        let paye = rates.paye_rate * gross_pay;
        let usc = rates.usc_rate * gross_pay;

        Self {
            total_weekday_hours,
            total_weekend_hours,
            hours_worked,
            payable_hours,
            gross_pay,
            paye,
            usc,
            gross_tax: paye + usc,
            net_pay: gross_pay - paye - usc,
            hours_worked_pay: hours_worked * record.hourly,
            overtime_hours: record.overtime,
            overtime_pay: record.overtime * record.hourly * rates.overtime_pay_multiplier,
            holiday_hours: record.holiday,
            holiday_pay: record.holiday * record.hourly,
        }
    }
}
