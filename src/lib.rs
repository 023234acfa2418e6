//! # Yeartab - multi-year monthly tables
//!
//! Yeartab manages a growing set of tables in which every row is one year of
//! twelve monthly values. Quarterly and year-to-date figures are derived on
//! submit, after the tables have been checked against each other.
//!
//! ## Core Concepts
//!
//! - **Tables** hold one row per year. Row 1 is the current year; each added
//!   row goes one year further back.
//! - **Reference table**: the table with the fewest rows. Every other table
//!   must be filled exactly where the reference is filled.
//! - **Aggregates**: Q1..Q4 and YTD, computed per row once a submission is valid.
//!
//! ## Modules
//!
//! - [`model`] - Table shape: table count and rows per table
//! - [`snapshot`] - Entered month values, empty cells as `None`
//! - [`domain`] - Cross-table validation and aggregate computation
//! - [`session`] - Form session driving add-table, add-row and submit
//! - [`workbook`] - YAML/JSON documents describing a whole submission
//! - [`config`] - Configuration management
//!
//! ## Example
//!
//! ```
//! use yeartab::fields::{Field, Month, Quarter};
//! use yeartab::session::{Action, Outcome, Session};
//!
//! let mut session = Session::new(2026);
//! session.enter(0, 1, Field::Month(Month::Jan), Some(1.0)).unwrap();
//! session.enter(0, 1, Field::Month(Month::Feb), Some(2.0)).unwrap();
//! session.enter(0, 1, Field::Month(Month::Mar), Some(3.0)).unwrap();
//!
//! match session.apply(Action::Submit).unwrap() {
//!     Outcome::Valid(aggregates) => {
//!         assert_eq!(aggregates.get(0, 1, Field::Quarter(Quarter::Q1)), Some(2.33));
//!     }
//!     other => panic!("unexpected outcome: {:?}", other),
//! }
//! ```

pub mod config;
pub mod domain;
pub mod error;
pub mod fields;
pub mod model;
pub mod render;
pub mod session;
pub mod snapshot;
pub mod ui;
pub mod workbook;

/// Default path constants for the yeartab directory structure.
pub mod paths {
    /// Project directory: `.yeartab`
    pub const YEARTAB_DIR: &str = ".yeartab";
    /// Project config file: `.yeartab/config.md`
    pub const CONFIG_FILE: &str = ".yeartab/config.md";
}
