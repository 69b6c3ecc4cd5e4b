//! Column layout for counting results.
//!
//! A lone source is printed compactly, padded only as wide as its own largest
//! value. Several sources share one column width per statistic, derived from
//! the totals row, so every row lines up.

use alloc::string::String;
use core::fmt::{self, Write};

use crate::options::{Field, Selection, TotalsMode};
use crate::stats::Counts;

/// Narrowest column in the multi-source layout.
pub const MIN_COLUMN_WIDTH: usize = 7;

const TOTAL_LABEL: &str = "total";

/// One source as seen by the formatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportRow<'a> {
    /// Name printed after the counts; `None` for implicit standard input.
    pub label: Option<&'a str>,
    pub counts: Counts,
}

impl<'a> ReportRow<'a> {
    #[must_use]
    pub const fn new(label: Option<&'a str>, counts: Counts) -> Self {
        Self { label, counts }
    }
}

/// Number of base-10 digits needed to print `value`.
#[must_use]
pub const fn decimal_width(mut value: u64) -> usize {
    let mut digits = 1;
    while value >= 10 {
        value /= 10;
        digits += 1;
    }
    digits
}

/// Width of a shared column whose largest value is `total`.
#[must_use]
pub const fn column_width(total: u64) -> usize {
    let width = decimal_width(total) + 1;
    if width < MIN_COLUMN_WIDTH {
        MIN_COLUMN_WIDTH
    } else {
        width
    }
}

/// Render the whole report. Every emitted line ends with `\n`.
#[must_use]
pub fn render(rows: &[ReportRow<'_>], selection: &Selection, totals: TotalsMode) -> String {
    let mut out = String::new();
    // fmt::Write for String is infallible
    let _ = write_report(&mut out, rows, selection, totals);
    out
}

/// Streaming form of [`render`].
///
/// # Errors
///
/// Propagates errors from `out`.
pub fn write_report<W: Write>(
    out: &mut W,
    rows: &[ReportRow<'_>],
    selection: &Selection,
    totals: TotalsMode,
) -> fmt::Result {
    if totals.uses_table(rows.len()) {
        write_table(out, rows, selection, totals)
    } else if let Some(row) = rows.first() {
        write_single(out, row, selection)
    } else {
        Ok(())
    }
}

fn write_single<W: Write>(out: &mut W, row: &ReportRow<'_>, selection: &Selection) -> fmt::Result {
    let width = selection
        .fields()
        .map(|field| decimal_width(row.counts.get(field)))
        .max()
        .unwrap_or(1);
    write_line(out, selection, &row.counts, |_| width, row.label)
}

fn write_table<W: Write>(
    out: &mut W,
    rows: &[ReportRow<'_>],
    selection: &Selection,
    totals: TotalsMode,
) -> fmt::Result {
    let sum: Counts = rows.iter().map(|row| &row.counts).sum();
    let width = |field: Field| column_width(sum.get(field));

    if totals != TotalsMode::Only {
        for row in rows {
            write_line(out, selection, &row.counts, width, row.label)?;
        }
    }

    match totals {
        TotalsMode::Never => Ok(()),
        TotalsMode::Only => write_line(out, selection, &sum, width, None),
        TotalsMode::Auto | TotalsMode::Always => {
            write_line(out, selection, &sum, width, Some(TOTAL_LABEL))
        }
    }
}

fn write_line<W, F>(
    out: &mut W,
    selection: &Selection,
    counts: &Counts,
    width: F,
    label: Option<&str>,
) -> fmt::Result
where
    W: Write,
    F: Fn(Field) -> usize,
{
    for (i, field) in selection.fields().enumerate() {
        if i > 0 {
            out.write_char(' ')?;
        }
        write!(out, "{:>w$}", counts.get(field), w = width(field))?;
    }
    if let Some(label) = label {
        write!(out, " {label}")?;
    }
    out.write_char('\n')
}
