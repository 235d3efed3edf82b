#[cfg(test)]
mod tests {
    use taskdesk::libs::store::TaskStore;
    use taskdesk::libs::task::NewTask;
    use taskdesk::libs::view::View;

    fn store() -> TaskStore {
        let mut store = TaskStore::new();
        store.add(NewTask::new("Buy milk").due_date("2024-01-01").priority("High")).unwrap();
        store.add(NewTask::new("Write report").time_required("2h")).unwrap();
        store.complete(Some(0)).unwrap();
        store
    }

    #[test]
    fn test_lines_match_listing_format() {
        let lines = View::lines(store().iter());
        assert_eq!(
            lines,
            vec![
                "Buy milk [Completed] - Due: 2024-01-01 - Priority: High - Category: No category".to_string(),
                "Write report [Pending] - Due: No due date - Priority: No priority - Category: No category - Time Required: 2h".to_string(),
            ]
        );
    }

    #[test]
    fn test_table_numbers_tasks_from_one() {
        let store = store();
        let table = View::table(store.tasks().iter().enumerate());
        let rendered = table.to_string();

        assert_eq!(table.len(), 2);
        assert!(rendered.contains("TASK"));
        assert!(rendered.contains("1"));
        assert!(rendered.contains("Buy milk [Completed]"));
        assert!(rendered.contains("Time Required: 2h"));
    }

    #[test]
    fn test_search_table_keeps_store_positions() {
        let store = store();
        let matches = store.search("report").unwrap();
        let table = View::table(matches.iter().copied());

        assert_eq!(table.len(), 1);
        let row = table.get_row(0).unwrap();
        assert_eq!(row.get_cell(0).unwrap().get_content(), "2");
    }
}
