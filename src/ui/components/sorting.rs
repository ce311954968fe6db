//! Sort state machine and value ordering for the data table.
//!
//! Sorting never mutates the caller's rows: [`sort_rows`] derives a fresh
//! ordering from a copy, so repeated derivations from the same input are
//! idempotent.

use std::cmp::Ordering;
use std::iter::Peekable;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::data_table::TableRow;

/// A single table cell. Rows are open maps from column key to one of
/// these; a missing key behaves exactly like `Null`.
///
/// The untagged serde representation means cells load straight from plain
/// JSON scalars, with RFC 3339 strings promoted to `DateTime`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Null,
    Bool(bool),
    Number(f64),
    DateTime(DateTime<Utc>),
    Text(String),
}

impl CellValue {
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// Human-readable form used when a column has no custom renderer.
    pub fn display(&self) -> String {
        match self {
            CellValue::Null => String::new(),
            CellValue::Bool(b) => if *b { "Yes" } else { "No" }.to_string(),
            CellValue::Number(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    format!("{}", *n as i64)
                } else {
                    format!("{n}")
                }
            }
            CellValue::DateTime(t) => t.format("%Y-%m-%d %H:%M").to_string(),
            CellValue::Text(s) => s.clone(),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        CellValue::Number(n as f64)
    }
}

impl From<i32> for CellValue {
    fn from(n: i32) -> Self {
        CellValue::Number(n as f64)
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Bool(b)
    }
}

impl From<DateTime<Utc>> for CellValue {
    fn from(t: DateTime<Utc>) -> Self {
        CellValue::DateTime(t)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => CellValue::Null,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Column sort state. Cycling the same key walks
/// Unsorted -> Ascending -> Descending -> Unsorted; cycling a different
/// key always restarts at Ascending for that key.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SortState {
    #[default]
    Unsorted,
    Ascending(String),
    Descending(String),
}

impl SortState {
    pub fn cycle(&self, key: &str) -> SortState {
        match self {
            SortState::Ascending(k) if k == key => SortState::Descending(key.to_string()),
            SortState::Descending(k) if k == key => SortState::Unsorted,
            _ => SortState::Ascending(key.to_string()),
        }
    }

    pub fn key(&self) -> Option<&str> {
        match self {
            SortState::Unsorted => None,
            SortState::Ascending(k) | SortState::Descending(k) => Some(k),
        }
    }

    pub fn direction(&self) -> Option<SortDirection> {
        match self {
            SortState::Unsorted => None,
            SortState::Ascending(_) => Some(SortDirection::Ascending),
            SortState::Descending(_) => Some(SortDirection::Descending),
        }
    }

    pub fn is_unsorted(&self) -> bool {
        matches!(self, SortState::Unsorted)
    }
}

/// Ascending total order over heterogeneous cells.
///
/// Nulls sort equal to each other and after any present value. Matching
/// kinds compare natively (numeric, boolean false < true, chronological);
/// anything else falls back to a case-insensitive natural string compare
/// of the display forms, so "item2" sorts before "item10".
pub fn compare_values(a: &CellValue, b: &CellValue) -> Ordering {
    match (a, b) {
        (CellValue::Null, CellValue::Null) => Ordering::Equal,
        (CellValue::Null, _) => Ordering::Greater,
        (_, CellValue::Null) => Ordering::Less,
        (CellValue::Number(x), CellValue::Number(y)) => {
            x.partial_cmp(y).unwrap_or(Ordering::Equal)
        }
        (CellValue::Bool(x), CellValue::Bool(y)) => x.cmp(y),
        (CellValue::DateTime(x), CellValue::DateTime(y)) => x.cmp(y),
        _ => natural_compare(&a.display(), &b.display()),
    }
}

/// Directional comparator. The null rules are applied before the
/// direction is, so absent values land at the bottom whether the sort is
/// ascending or descending.
pub fn compare_in_direction(a: &CellValue, b: &CellValue, direction: SortDirection) -> Ordering {
    match (a.is_null(), b.is_null()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => match direction {
            SortDirection::Ascending => compare_values(a, b),
            SortDirection::Descending => compare_values(a, b).reverse(),
        },
    }
}

/// Derives the view ordering for `state` from a copy of `rows`. The input
/// is left untouched; ties keep their input order (stable sort).
pub fn sort_rows(rows: &[TableRow], state: &SortState) -> Vec<TableRow> {
    let mut view: Vec<TableRow> = rows.to_vec();
    let (key, direction) = match (state.key(), state.direction()) {
        (Some(k), Some(d)) => (k, d),
        _ => return view,
    };
    view.sort_by(|a, b| {
        let va = a.get(key).unwrap_or(&CellValue::Null);
        let vb = b.get(key).unwrap_or(&CellValue::Null);
        compare_in_direction(va, vb, direction)
    });
    view
}

/// Case-insensitive string compare that orders embedded digit runs
/// numerically.
fn natural_compare(a: &str, b: &str) -> Ordering {
    let mut ca = a.chars().flat_map(char::to_lowercase).peekable();
    let mut cb = b.chars().flat_map(char::to_lowercase).peekable();
    loop {
        match (ca.peek().copied(), cb.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => {
                if x.is_ascii_digit() && y.is_ascii_digit() {
                    let run_a = take_digit_run(&mut ca);
                    let run_b = take_digit_run(&mut cb);
                    let ord = compare_digit_runs(&run_a, &run_b);
                    if ord != Ordering::Equal {
                        return ord;
                    }
                } else {
                    let ord = x.cmp(&y);
                    if ord != Ordering::Equal {
                        return ord;
                    }
                    ca.next();
                    cb.next();
                }
            }
        }
    }
}

fn take_digit_run<I: Iterator<Item = char>>(chars: &mut Peekable<I>) -> String {
    let mut run = String::new();
    while let Some(&c) = chars.peek() {
        if !c.is_ascii_digit() {
            break;
        }
        run.push(c);
        chars.next();
    }
    run
}

fn compare_digit_runs(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    // longer run of significant digits means larger number
    match a.len().cmp(&b.len()) {
        Ordering::Equal => a.cmp(b),
        ord => ord,
    }
}
