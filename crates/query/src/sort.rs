//! Sort engine. Stable, case-insensitive, never mutates its input.

use std::cmp::Ordering;

use roster_core::{Employee, SortDirection, SortOptions};

/// Order records by the selected field.
///
/// Equal keys keep their input order in both directions: `Desc` flips the
/// comparator, not the finished sequence.
pub fn sort<'a, I>(records: I, opts: &SortOptions) -> Vec<&'a Employee>
where
    I: IntoIterator<Item = &'a Employee>,
{
    // Lowercase each key once instead of per comparison.
    let mut keyed: Vec<(String, &'a Employee)> = records
        .into_iter()
        .map(|e| (opts.field.key(e).to_lowercase(), e))
        .collect();
    keyed.sort_by(|a, b| directed(a.0.cmp(&b.0), opts.direction));
    keyed.into_iter().map(|(_, e)| e).collect()
}

fn directed(ord: Ordering, dir: SortDirection) -> Ordering {
    match dir {
        SortDirection::Asc => ord,
        SortDirection::Desc => ord.reverse(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_core::{seed, SortField};

    fn opts(field: SortField, direction: SortDirection) -> SortOptions { SortOptions { field, direction } }

    #[test]
    fn last_name_ascending() {
        let all = seed::employees();
        let out = sort(&all, &opts(SortField::LastName, SortDirection::Asc));
        assert_eq!(out.first().map(|e| e.last_name.as_str()), Some("Anderson"));
        assert_eq!(out.last().map(|e| e.last_name.as_str()), Some("Wilson"));
        // input untouched
        assert_eq!(all[0].first_name, "Alice");
    }

    #[test]
    fn ignores_case() {
        let mut all = seed::employees();
        all[0].first_name = "zed".into();
        all[1].first_name = "Yan".into();
        let out = sort(&all, &opts(SortField::FirstName, SortDirection::Desc));
        assert_eq!(out[0].first_name, "zed");
        assert_eq!(out[1].first_name, "Yan");
    }

    #[test]
    fn ties_keep_input_order_in_both_directions() {
        let all = seed::employees();
        // Managers: Alice(1), Edward(5), Ian(9)
        for dir in [SortDirection::Asc, SortDirection::Desc] {
            let out = sort(&all, &opts(SortField::Role, dir));
            let managers: Vec<&str> = out.iter().filter(|e| e.role.as_str() == "Manager").map(|e| e.id.as_str()).collect();
            assert_eq!(managers, ["1", "5", "9"], "{dir:?}");
        }
    }

    #[test]
    fn desc_is_exact_reverse_only_without_duplicates() {
        let all = seed::employees();
        let asc = sort(&all, &opts(SortField::Email, SortDirection::Asc));
        let mut desc = sort(&all, &opts(SortField::Email, SortDirection::Desc));
        desc.reverse();
        assert_eq!(asc, desc);

        // departments repeat, so reversal would swap tie-group members
        let asc = sort(&all, &opts(SortField::Department, SortDirection::Asc));
        let mut desc = sort(&all, &opts(SortField::Department, SortDirection::Desc));
        desc.reverse();
        assert_ne!(asc, desc);
    }
}
