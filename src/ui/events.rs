use crate::ui::components::data_table::TableRow;

#[derive(Clone, Debug, PartialEq)]
pub enum Message {
    // Select field events
    SelectionChanged(Option<String>),

    // Table events
    RowActivated(TableRow),

    // Demo shell events
    FocusNext,
    ToggleDarkMode,

    // UI events
    SetStatus(String),
    ClearStatus,
}
