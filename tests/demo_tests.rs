//! The files under demos/ stay usable

use chrono::NaiveDate;

use keyfill::madlib::{default_slots, fill_story};
use keyfill::payroll::parse_timesheet;
use keyfill::template::seeded;
use keyfill::{fill_payslip, PayPeriod, Settings};

const SETTINGS: &str = include_str!("../demos/keyfill.toml");
const STORY: &str = include_str!("../demos/madlib_template.tex");
const PAYSLIP: &str = include_str!("../demos/payslip_template.tex");
const TIMESHEET: &str = include_str!("../demos/timesheet.csv");

#[test]
fn test_demo_settings_match_defaults() {
    let settings = Settings::from_str(SETTINGS).expect("Should parse");
    assert_eq!(settings, Settings::default());
}

#[test]
fn test_demo_story_fills_completely() {
    let settings = Settings::from_str(SETTINGS).unwrap();
    let story = fill_story(STORY, &settings.vocabulary, &mut seeded(Some(31))).unwrap();
    for slot in default_slots() {
        assert!(!story.contains(&slot.token));
    }
}

#[test]
fn test_demo_payslips_fill_completely() {
    let settings = Settings::from_str(SETTINGS).unwrap();
    let period = PayPeriod::new(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
    let rows = parse_timesheet(TIMESHEET).unwrap();
    assert_eq!(rows.len(), 3);

    for row in rows {
        let record = row.expect("demo rows are well formed");
        let slip = fill_payslip(PAYSLIP, &record, &settings.rates, &period);
        assert!(!slip.contains("+name+"));
        assert!(!slip.contains("-pay+"));
        assert!(slip.contains(&record.name));
    }
}
