//! One builder per worksheet.
//!
//! Every module exposes the sheet title as `NAME` and a `build` function
//! that fills a fresh sheet.

pub mod credit_card;
pub mod dashboard;
pub mod emergency_fund;
pub mod money_rules;
pub mod monthly_budget;
pub mod paycheck;
pub mod roth_ira;
pub mod work_expenses;
