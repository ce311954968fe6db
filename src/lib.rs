//! Keyboard-driven form controls for ratatui: a single-select field and
//! a sortable data table, plus the demo page wiring them together.

pub mod constants;
pub mod data;
pub mod demo;
pub mod ui;

pub use ui::components::Component;
pub use ui::components::data_table::{Column, DataTable, TableRow};
pub use ui::components::select_field::{SelectField, SelectOption, ValueMode};
pub use ui::components::sorting::{
    CellValue, SortDirection, SortState, compare_values, sort_rows,
};
