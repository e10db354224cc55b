//! CareerTrack - tenure labels and the timeline dial
//!
//! Two small pieces of logic behind a portfolio's career track:
//!
//! - [`tenure`] parses period strings like `"Feb 2022 – Nov 2024"` and
//!   renders elapsed time as `"2Y 10M"`. It never fails loudly: anything it
//!   cannot read becomes an empty label.
//! - [`dial`] maps a pointer position around a circular widget to one of N
//!   role-history entries.
//!
//! # Example
//!
//! ```
//! use careertrack::{DialSelector, Point, RoleHistory, RoleHistoryEntry};
//! use chrono::NaiveDate;
//!
//! let history: RoleHistory = vec![
//!     RoleHistoryEntry::new("Engineer", "Feb 2022 – Dec 2022"),
//!     RoleHistoryEntry::new("Senior Engineer", "Jan 2023 – Nov 2024"),
//! ]
//! .into();
//!
//! let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
//! assert_eq!(history.aggregate_tenure_at(today).as_deref(), Some("2Y 10M"));
//!
//! let mut dial = history.dial().unwrap();
//! let center = Point::new(0.0, 0.0);
//! dial.on_pointer_move(Point::new(1.0, -5.0), center);
//! assert_eq!(dial.active_index(), 0);
//! dial.on_pointer_leave();
//! assert_eq!(dial.active_index(), 1);
//! ```

pub mod dial;
pub mod error;
pub mod role;
pub mod tenure;

pub use dial::{DialSelector, Point, SelectionChange, point_at_angle, pointer_angle};
pub use error::TenureError;
pub use role::{RoleHistory, RoleHistoryEntry};
pub use tenure::{
    PRESENT, ParsedDate, Period, Tenure, YearMonth, compute_tenure, compute_tenure_at, split_period, try_tenure_at,
};
