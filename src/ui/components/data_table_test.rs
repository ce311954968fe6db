#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer, layout::Alignment};

    use super::super::Component;
    use super::super::data_table::{Column, DataTable, TableRow};
    use super::super::sorting::SortState;
    use crate::ui::events::Message;

    fn create_key_event(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: crossterm::event::KeyEventKind::Press,
            state: crossterm::event::KeyEventState::empty(),
        }
    }

    fn buffer_contains_text(buffer: &Buffer, text: &str) -> bool {
        let content = buffer
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>();
        content.contains(text)
    }

    fn people_columns() -> Vec<Column> {
        vec![
            Column::new("name", "Name").sortable(),
            Column::new("age", "Age").sortable().align(Alignment::Right),
            Column::new("notes", "Notes"),
        ]
    }

    fn people_rows() -> Vec<TableRow> {
        vec![
            TableRow::new().cell("name", "Bob").cell("age", 30),
            TableRow::new().cell("name", "Alice").cell("age", 25),
            TableRow::new().cell("name", "Charlie").cell("age", 35),
        ]
    }

    fn people_table() -> DataTable {
        DataTable::new(people_columns()).rows(people_rows())
    }

    fn view_names(table: &DataTable) -> Vec<String> {
        table
            .visible_rows()
            .iter()
            .map(|r| r.get("name").map(|v| v.display()).unwrap_or_default())
            .collect()
    }

    #[test]
    fn s_cycles_the_active_column_through_three_states() {
        let mut table = people_table();
        assert_eq!(*table.sort_state(), SortState::Unsorted);

        table.handle_key(create_key_event(KeyCode::Char('s')));
        assert_eq!(*table.sort_state(), SortState::Ascending("name".to_string()));

        table.handle_key(create_key_event(KeyCode::Char('s')));
        assert_eq!(
            *table.sort_state(),
            SortState::Descending("name".to_string())
        );

        table.handle_key(create_key_event(KeyCode::Char('s')));
        assert_eq!(*table.sort_state(), SortState::Unsorted);
    }

    #[test]
    fn sorting_a_different_column_restarts_at_ascending() {
        let mut table = people_table();
        table.handle_key(create_key_event(KeyCode::Char('s')));
        table.handle_key(create_key_event(KeyCode::Char('s')));
        assert_eq!(
            *table.sort_state(),
            SortState::Descending("name".to_string())
        );

        table.handle_key(create_key_event(KeyCode::Right));
        table.handle_key(create_key_event(KeyCode::Char('s')));
        assert_eq!(*table.sort_state(), SortState::Ascending("age".to_string()));
    }

    #[test]
    fn s_on_an_unsortable_column_is_a_noop() {
        let mut table = people_table();
        table.handle_key(create_key_event(KeyCode::Right));
        table.handle_key(create_key_event(KeyCode::Right));
        table.handle_key(create_key_event(KeyCode::Char('s')));
        assert_eq!(*table.sort_state(), SortState::Unsorted);
    }

    #[test]
    fn sort_cycling_emits_no_message() {
        let mut table = people_table();
        assert_eq!(table.handle_key(create_key_event(KeyCode::Char('s'))), None);
    }

    #[test]
    fn active_column_clamps_at_both_ends() {
        let mut table = people_table();
        table.handle_key(create_key_event(KeyCode::Left));
        table.handle_key(create_key_event(KeyCode::Char('s')));
        assert_eq!(*table.sort_state(), SortState::Ascending("name".to_string()));

        for _ in 0..5 {
            table.handle_key(create_key_event(KeyCode::Right));
        }
        table.handle_key(create_key_event(KeyCode::Char('s')));
        // rightmost column is unsortable, state should be untouched
        assert_eq!(*table.sort_state(), SortState::Ascending("name".to_string()));
    }

    #[test]
    fn visible_rows_follow_the_sort_state() {
        let mut table = people_table();
        assert_eq!(view_names(&table), vec!["Bob", "Alice", "Charlie"]);

        table.handle_key(create_key_event(KeyCode::Right));
        table.handle_key(create_key_event(KeyCode::Char('s')));
        assert_eq!(view_names(&table), vec!["Alice", "Bob", "Charlie"]);

        table.handle_key(create_key_event(KeyCode::Char('s')));
        assert_eq!(view_names(&table), vec!["Charlie", "Bob", "Alice"]);

        table.handle_key(create_key_event(KeyCode::Char('s')));
        assert_eq!(view_names(&table), vec!["Bob", "Alice", "Charlie"]);
    }

    #[test]
    fn initial_sort_applies_without_any_key_press() {
        let table = DataTable::new(people_columns())
            .rows(people_rows())
            .initial_sort(SortState::Ascending("age".to_string()));
        assert_eq!(view_names(&table), vec!["Alice", "Bob", "Charlie"]);
    }

    #[test]
    fn enter_activates_the_cursor_row_in_view_order() {
        let mut table = people_table().activatable();
        table.handle_key(create_key_event(KeyCode::Right));
        table.handle_key(create_key_event(KeyCode::Char('s')));
        table.handle_key(create_key_event(KeyCode::Char('s')));

        // descending by age puts Charlie first
        let message = table.handle_key(create_key_event(KeyCode::Enter));
        match message {
            Some(Message::RowActivated(row)) => {
                assert_eq!(
                    row.get("name").map(|v| v.display()),
                    Some("Charlie".to_string())
                );
            }
            other => panic!("expected RowActivated, got {other:?}"),
        }
    }

    #[test]
    fn enter_is_ignored_when_rows_are_not_activatable() {
        let mut table = people_table();
        assert_eq!(table.handle_key(create_key_event(KeyCode::Enter)), None);
    }

    #[test]
    fn enter_on_an_empty_table_emits_nothing() {
        let mut table = DataTable::new(people_columns()).activatable();
        assert_eq!(table.handle_key(create_key_event(KeyCode::Enter)), None);
    }

    #[test]
    fn cursor_navigation_clamps_to_the_row_range() {
        let mut table = people_table();
        table.handle_key(create_key_event(KeyCode::Up));
        assert_eq!(table.cursor(), 0);

        table.handle_key(create_key_event(KeyCode::Down));
        assert_eq!(table.cursor(), 1);

        table.handle_key(create_key_event(KeyCode::End));
        assert_eq!(table.cursor(), 2);

        table.handle_key(create_key_event(KeyCode::PageDown));
        assert_eq!(table.cursor(), 2);

        table.handle_key(create_key_event(KeyCode::Home));
        assert_eq!(table.cursor(), 0);

        table.handle_key(create_key_event(KeyCode::PageUp));
        assert_eq!(table.cursor(), 0);
    }

    #[test]
    fn set_rows_clamps_the_cursor() {
        let mut table = people_table();
        table.handle_key(create_key_event(KeyCode::End));
        assert_eq!(table.cursor(), 2);

        table.set_rows(vec![TableRow::new().cell("name", "Only")]);
        assert_eq!(table.cursor(), 0);
    }

    #[test]
    fn render_empty_table_shows_the_empty_message() {
        let backend = TestBackend::new(60, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut table = DataTable::new(people_columns())
            .caption("People")
            .empty_message("No people to show");

        terminal.draw(|f| table.render(f, f.area())).unwrap();

        let buffer = terminal.backend().buffer();
        assert!(buffer_contains_text(buffer, "No people to show"));
        assert!(buffer_contains_text(buffer, "People"));
    }

    #[test]
    fn render_shows_headers_rows_and_sort_indicator() {
        let backend = TestBackend::new(60, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut table = people_table().caption("People");
        table.handle_key(create_key_event(KeyCode::Char('s')));

        terminal.draw(|f| table.render(f, f.area())).unwrap();

        let buffer = terminal.backend().buffer();
        assert!(buffer_contains_text(buffer, "Name ▲"));
        assert!(buffer_contains_text(buffer, "Age"));
        assert!(buffer_contains_text(buffer, "Alice"));
        assert!(buffer_contains_text(buffer, "Charlie"));
    }

    #[test]
    fn render_shows_descending_indicator() {
        let backend = TestBackend::new(60, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut table = people_table();
        table.handle_key(create_key_event(KeyCode::Char('s')));
        table.handle_key(create_key_event(KeyCode::Char('s')));

        terminal.draw(|f| table.render(f, f.area())).unwrap();

        assert!(buffer_contains_text(terminal.backend().buffer(), "Name ▼"));
    }
}
