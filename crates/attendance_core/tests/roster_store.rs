use attendance_core::{
    CsvRosterRepository, Employee, LoadNotice, RosterRepository, RosterStore, StoreError,
};
use tempfile::tempdir;

#[test]
fn missing_file_loads_empty_roster_with_notice() {
    let dir = tempdir().unwrap();
    let store = RosterStore::load(CsvRosterRepository::new(dir.path().join("employees.csv")))
        .unwrap();

    assert!(store.employees().is_empty());
    assert_eq!(store.load_notice(), Some(LoadNotice::EmployeesFileMissing));
    assert_eq!(
        store.load_notice().unwrap().to_string(),
        "Employees file not found. No employees data available."
    );
}

#[test]
fn nth_added_employee_gets_id_n() {
    let dir = tempdir().unwrap();
    let mut store =
        RosterStore::load(CsvRosterRepository::new(dir.path().join("employees.csv"))).unwrap();

    for n in 1..=5u32 {
        let employee = store.add(format!("employee-{n}")).unwrap();
        assert_eq!(employee.emp_id, n);
    }
    assert_eq!(store.employees().len(), 5);
}

#[test]
fn add_persists_full_roster_with_header() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("employees.csv");
    let mut store = RosterStore::load(CsvRosterRepository::new(&path)).unwrap();

    store.add("Ana").unwrap();
    store.add("Bo").unwrap();

    assert_eq!(
        store.employees(),
        &[Employee::new(1, "Ana"), Employee::new(2, "Bo")]
    );
    let text = std::fs::read_to_string(&path).unwrap();
    let lines = text.lines().collect::<Vec<_>>();
    assert_eq!(lines, vec!["emp_id,name", "1,Ana", "2,Bo"]);
}

#[test]
fn save_then_load_round_trips_names_with_commas_and_quotes() {
    let dir = tempdir().unwrap();
    let repo = CsvRosterRepository::new(dir.path().join("employees.csv"));
    let roster = vec![
        Employee::new(1, "Doe, Jane"),
        Employee::new(2, "Sam \"The Man\" Lee"),
        Employee::new(3, "Zoë"),
    ];

    repo.save(&roster).unwrap();
    let snapshot = repo.load().unwrap();

    assert!(!snapshot.missing);
    assert_eq!(snapshot.rows, roster);
}

#[test]
fn reload_keeps_existing_rows_and_continues_numbering() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("employees.csv");
    {
        let mut store = RosterStore::load(CsvRosterRepository::new(&path)).unwrap();
        store.add("Ana").unwrap();
    }

    let mut reopened = RosterStore::load(CsvRosterRepository::new(&path)).unwrap();
    assert_eq!(reopened.load_notice(), None);
    let employee = reopened.add("Bo").unwrap();
    assert_eq!(employee.emp_id, 2);
}

#[test]
fn id_generator_does_not_skip_ids_already_in_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("employees.csv");
    std::fs::write(&path, "emp_id,name\n2,Bo\n").unwrap();

    let mut store = RosterStore::load(CsvRosterRepository::new(&path)).unwrap();
    let added = store.add("Cy").unwrap();

    // count + 1 collides with the hand-edited row.
    assert_eq!(added.emp_id, 2);
    assert_eq!(store.name_of(2), Some("Bo"));
}

#[test]
fn non_numeric_id_in_file_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("employees.csv");
    std::fs::write(&path, "emp_id,name\none,Ana\n").unwrap();

    let err = RosterStore::load(CsvRosterRepository::new(&path)).err().unwrap();
    assert!(matches!(err, StoreError::Csv { .. }));
}

#[test]
fn reordered_header_maps_columns_by_name() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("employees.csv");
    std::fs::write(&path, "name,emp_id\nAna,1\n").unwrap();

    let mut store = RosterStore::load(CsvRosterRepository::new(&path)).unwrap();
    assert_eq!(store.employees(), &[Employee::new(1, "Ana")]);

    store.add("Bo").unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    let lines = text.lines().collect::<Vec<_>>();
    assert_eq!(lines, vec!["emp_id,name", "1,Ana", "2,Bo"]);
}

#[test]
fn header_without_name_column_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("employees.csv");
    std::fs::write(&path, "emp_id\n1\n").unwrap();

    let err = RosterStore::load(CsvRosterRepository::new(&path)).err().unwrap();
    assert!(matches!(err, StoreError::HeaderMismatch { .. }));
}
