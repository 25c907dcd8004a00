use roster_api::{DirectoryApi, DirectoryError, Session, SessionConfig};
use roster_core::{Department, EmployeeFormData, FilterCriteria, FormField, QueryParameters, Role, SortField};

fn seeded() -> Session { Session::new(&SessionConfig::default()) }

fn names(s: &Session) -> Vec<String> { s.view().items.iter().map(|e| e.full_name()).collect() }

#[test]
fn filter_it_department() {
    let mut s = seeded();
    s.set_filter(FilterCriteria::builder().department(Department::IT).build());
    assert_eq!(s.view().total_items, 2);
    assert_eq!(names(&s), ["Bob Johnson", "George Wilson"]);
}

#[test]
fn sort_by_last_name() {
    let mut s = seeded();
    s.set_items_per_page(10);
    s.set_sort(SortField::LastName);
    let items = &s.view().items;
    assert_eq!(items.first().map(|e| e.last_name.as_str()), Some("Anderson"));
    assert_eq!(items.last().map(|e| e.last_name.as_str()), Some("Wilson"));
}

#[test]
fn two_pages_of_six() {
    let mut s = seeded();
    assert_eq!((s.view().items.len(), s.view().total_pages), (6, 2));
    s.set_page(2);
    assert_eq!(s.view().items.len(), 4);
}

#[test]
fn deleting_last_row_of_last_page_returns_to_first() {
    let mut s = seeded();
    for id in ["1", "2", "3"] {
        s.delete_employee(id).unwrap();
    }
    s.set_page(2);
    assert_eq!((s.view().current_page, s.view().total_pages), (2, 2));
    assert_eq!(names(&s), ["Julia Thomas"]);

    let gone = s.delete_employee("10").unwrap();
    assert_eq!(gone.full_name(), "Julia Thomas");
    assert_eq!(s.view().current_page, 1);
    assert_eq!(s.params().page.current_page, 1);
    assert_eq!(s.view().items.len(), 6);
}

#[test]
fn invalid_form_is_rejected_with_every_field_error() {
    let mut s = seeded();
    let form = EmployeeFormData::new("", "Doe", "bad@", Department::IT, Role::Developer);
    let err = s.create_employee(&form).unwrap_err();
    let v = err.validation_errors().expect("validation error");
    assert!(v.contains(FormField::FirstName));
    assert!(v.contains(FormField::Email));
    assert_eq!(v.len(), 2);
    assert_eq!(s.records().len(), 10);
    assert_eq!(s.summary(), "Showing 10 of 10 employees");
}

#[test]
fn search_ali() {
    let mut s = seeded();
    s.set_filter(FilterCriteria::builder().search("ali").build());
    assert_eq!(names(&s), ["Alice Smith"]);
}

#[test]
fn list_page_is_idempotent_and_side_effect_free() {
    let s = seeded();
    let params = QueryParameters {
        filter: FilterCriteria::builder().role(Role::Manager).build(),
        ..Default::default()
    };
    let a = s.list_page(&params);
    let b = s.list_page(&params);
    assert_eq!(a, b);
    assert_eq!(a.total_items, 3);
    // session view untouched
    assert_eq!(s.view().total_items, 10);
}

#[test]
fn stale_ids_are_reported_not_fatal() {
    let mut s = seeded();
    let bob = s.get("2").cloned().unwrap();
    s.delete_employee("2").unwrap();
    assert_eq!(s.delete_employee("2").unwrap_err(), DirectoryError::NotFound("2".into()));
    let err = s.update_employee("2", &EmployeeFormData::from(&bob)).unwrap_err();
    assert!(matches!(err, DirectoryError::NotFound(ref id) if id == "2"));
    assert!(err.validation_errors().is_none());
    assert_eq!(s.records().len(), 9);
}

#[test]
fn created_employee_appears_in_view() {
    let mut s = seeded();
    let form = EmployeeFormData::new("Aaron", "Zane", "aaron@example.com", Department::Sales, Role::Coordinator);
    let e = s.create_employee(&form).unwrap();
    assert_eq!(e.id, "11");
    assert_eq!(s.view().items[0].id, "11", "Aaron sorts first by first name");
    assert_eq!(s.summary(), "Showing 11 of 11 employees");
}

#[test]
fn errors_serialize_for_front_ends() {
    let mut s = seeded();
    let err = s.create_employee(&EmployeeFormData::default()).unwrap_err();
    let v = serde_json::to_value(&err).unwrap();
    let fields: Vec<&str> = v["Validation"].as_array().unwrap().iter().map(|e| e["field"].as_str().unwrap()).collect();
    assert_eq!(fields, ["firstName", "lastName", "email"]);
}

#[test]
fn invalid_edit_keeps_record_and_view() {
    let mut s = seeded();
    let before = s.get("2").cloned().unwrap();
    let view_before = s.view().clone();
    let rx = s.subscribe();

    let mut form = EmployeeFormData::from(&before);
    form.first_name = " ".into();
    form.email = "bad@".into();
    let err = s.update_employee("2", &form).unwrap_err();
    let v = err.validation_errors().expect("validation error");
    assert!(v.contains(FormField::FirstName));
    assert!(v.contains(FormField::Email));
    assert_eq!(v.len(), 2);

    assert_eq!(s.get("2"), Some(&before));
    assert_eq!(s.view(), &view_before);
    assert!(!rx.has_changed().unwrap());
}
