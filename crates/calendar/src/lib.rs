//! # fdate-calendar
//!
//! Calendar arithmetic and token-based formatting over local wall-clock dates.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["DateValue"] -->|"week_start() / month_start() / month_end()"| A
//!     A -->|"next_month()"| A
//!     A -->|"month_array()"| B["MonthGrid (weeks x 7)"]
//!     A -->|"week_number()"| C["u32"]
//!     A -->|"format(pattern)"| D["String"]
//!     E["FormatToken table"] --> D
//!     A -->|"is_today() / is_this_month() / is_this_year()"| F["bool"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use fdate_calendar::{DateValue, format, month_array, month_name, week_number};
//!
//! let date = DateValue::from_fields(2023, 0, 15, 9, 5, 0, 0).unwrap();
//! assert_eq!(format(date, "Y-m-d g:i A"), "2023-01-15 9:05 AM");
//! assert_eq!(week_number(date), 2);
//!
//! let grid = month_array(date);
//! assert_eq!(grid.days().count(), 31);
//!
//! assert_eq!(month_name(0), Some("January"));
//! ```
//!
//! Every operation that takes a date accepts `impl Into<Option<DateValue>>`;
//! `None` stands for the current instant.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `date` | Local wall-clock date value and calendar-overflow arithmetic |
//! | `names` | English month and weekday name tables |
//! | `month` | Week start, month start/end, next month |
//! | `grid` | Month grid generation |
//! | `week` | Week-of-year number |
//! | `format` | Format token table and pattern expansion |
//! | `predicates` | Same-year/month/day checks against now |
//! | `error` | Error types |

mod date;
mod error;
mod format;
mod grid;
mod month;
mod names;
mod predicates;
mod week;

pub use date::DateValue;
pub use error::CalendarError;
pub use format::{FormatToken, Pattern, format, formats};
pub use grid::{MonthGrid, Week, month_array};
pub use month::{month_end, month_start, next_month, week_start};
pub use names::{day_name, day_name_from_str, month_name, month_name_from_str, months, week_days};
pub use predicates::{is_this_month, is_this_year, is_today};
pub use week::week_number;
