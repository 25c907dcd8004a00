use roster_core::{seed, Department, EmployeeFormData, FilterCriteria, PageSettings, QueryParameters, Role, SortDirection, SortField, SortOptions};
use roster_query::run;
use roster_store::RecordStore;

fn params(filter: FilterCriteria, sort: SortOptions, page: usize, per: usize) -> QueryParameters {
    QueryParameters { filter, sort, page: PageSettings { current_page: page, items_per_page: per } }
}

fn full_names(r: &roster_query::PageResult) -> Vec<String> { r.items.iter().map(|e| e.full_name()).collect() }

#[test]
fn it_department_has_two_members() {
    let all = seed::employees();
    let f = FilterCriteria::builder().department(Department::IT).build();
    let r = run(&all, &params(f, SortOptions::default(), 1, 6));
    assert_eq!(r.total_items, 2);
    assert_eq!(full_names(&r), ["Bob Johnson", "George Wilson"]);
}

#[test]
fn last_name_ascending_spans_anderson_to_wilson() {
    let all = seed::employees();
    let sort = SortOptions { field: SortField::LastName, direction: SortDirection::Asc };
    let r = run(&all, &params(FilterCriteria::default(), sort, 1, 10));
    assert_eq!(r.items.first().map(|e| e.full_name()).as_deref(), Some("Ian Anderson"));
    assert_eq!(r.items.last().map(|e| e.full_name()).as_deref(), Some("George Wilson"));
}

#[test]
fn six_per_page_splits_seed_into_six_and_four() {
    let all = seed::employees();
    let p1 = run(&all, &params(FilterCriteria::default(), SortOptions::default(), 1, 6));
    assert_eq!((p1.items.len(), p1.total_pages), (6, 2));
    let p2 = run(&all, &params(FilterCriteria::default(), SortOptions::default(), 2, 6));
    assert_eq!((p2.items.len(), p2.total_pages, p2.current_page), (4, 2, 2));
    // firstName asc by default: page 2 starts at George
    assert_eq!(p2.items[0].first_name, "George");
}

#[test]
fn search_ali_finds_alice_only() {
    let all = seed::employees();
    let f = FilterCriteria::builder().search("ali").build();
    let r = run(&all, &params(f, SortOptions::default(), 1, 6));
    assert_eq!(full_names(&r), ["Alice Smith"]);
    assert_eq!(r.summary(), "Showing 1 of 10 employees");
}

#[test]
fn identical_parameters_give_identical_pages() {
    let all = seed::employees();
    let p = params(
        FilterCriteria::builder().role(Role::Manager).build(),
        SortOptions { field: SortField::Email, direction: SortDirection::Desc },
        1,
        2,
    );
    assert_eq!(run(&all, &p), run(&all, &p));
}

#[test]
fn pipeline_over_mutated_store() {
    let mut store = RecordStore::with_records(seed::employees());
    store
        .add(&EmployeeFormData::new("Aaron", "Zane", "aaron@example.com", Department::IT, Role::Manager))
        .unwrap();
    store.remove("2").unwrap();
    let f = FilterCriteria::builder().department(Department::IT).build();
    let r = run(store.all(), &params(f, SortOptions::default(), 1, 6));
    assert_eq!(full_names(&r), ["Aaron Zane", "George Wilson"]);
    assert_eq!(r.collection_total, 10);
    assert_eq!(r.stats.after_department, 2);
}
