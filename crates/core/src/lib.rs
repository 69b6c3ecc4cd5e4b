#![no_std]
#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]

extern crate alloc;

pub mod config;
pub mod counter;
pub mod decode;
pub mod options;
pub mod report;
pub mod stats;

pub use config::CountConfig;
pub use counter::{Tally, count_bytes, count_str};
pub use decode::CodePoint;
pub use options::{Field, Selection, TotalsMode};
pub use report::{ReportRow, render};
pub use stats::Counts;
