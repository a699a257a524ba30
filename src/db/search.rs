use std::collections::HashSet;

use crate::models::SearchCriteria;

/// One populated field of a [`SearchCriteria`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Criterion<'a> {
    Name(&'a str),
    Surname(&'a str),
    Email(&'a str),
    Phone(&'a str),
}

impl<'a> Criterion<'a> {
    /// Query selecting the ids of clients matching this criterion
    pub fn query(&self) -> &'static str {
        match self {
            Criterion::Name(_) => "SELECT client_id FROM clients WHERE name = $1",
            Criterion::Surname(_) => "SELECT client_id FROM clients WHERE surname = $1",
            Criterion::Email(_) => "SELECT client_id FROM clients WHERE email = $1",
            Criterion::Phone(_) => "SELECT client_id FROM phones WHERE phone = $1",
        }
    }

    pub fn value(&self) -> &'a str {
        match *self {
            Criterion::Name(v) | Criterion::Surname(v) | Criterion::Email(v) | Criterion::Phone(v) => v,
        }
    }
}

/// Split criteria into the fields that were actually given
pub fn criteria_of(criteria: &SearchCriteria) -> Vec<Criterion<'_>> {
    let mut out = Vec::new();
    if let Some(name) = criteria.name.as_deref() {
        out.push(Criterion::Name(name));
    }
    if let Some(surname) = criteria.surname.as_deref() {
        out.push(Criterion::Surname(surname));
    }
    if let Some(email) = criteria.email.as_deref() {
        out.push(Criterion::Email(email));
    }
    if let Some(phone) = criteria.phone.as_deref() {
        out.push(Criterion::Phone(phone));
    }
    out
}

/// Intersect per-criterion id sets.
///
/// Returns `None` when no sets are given, i.e. when the search had no
/// criteria at all. Any empty set makes the result empty.
pub fn intersect_all<I>(sets: I) -> Option<HashSet<i32>>
where
    I: IntoIterator<Item = HashSet<i32>>,
{
    let mut sets = sets.into_iter();
    let mut acc = sets.next()?;
    for set in sets {
        acc.retain(|id| set.contains(id));
    }
    Some(acc)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(values: &[i32]) -> HashSet<i32> {
        values.iter().copied().collect()
    }

    #[test]
    fn no_sets_means_no_criteria() {
        assert_eq!(intersect_all(Vec::new()), None);
    }

    #[test]
    fn single_set_is_returned_as_is() {
        assert_eq!(intersect_all(vec![ids(&[1, 3])]), Some(ids(&[1, 3])));
    }

    #[test]
    fn overlapping_sets_keep_common_ids() {
        // name=Boris matches 1 and 3, surname=Petrov matches 3 and 4
        let result = intersect_all(vec![ids(&[1, 3]), ids(&[3, 4])]);
        assert_eq!(result, Some(ids(&[3])));
    }

    #[test]
    fn disjoint_sets_are_empty() {
        let result = intersect_all(vec![ids(&[1]), ids(&[2]), ids(&[1, 2])]);
        assert_eq!(result, Some(HashSet::new()));
    }

    #[test]
    fn unmatched_phone_forces_empty_result() {
        let result = intersect_all(vec![ids(&[1, 3]), HashSet::new()]);
        assert_eq!(result, Some(HashSet::new()));
    }

    #[test]
    fn criteria_keep_field_order_and_skip_missing() {
        let search = SearchCriteria::new().phone("+79226067314").name("Elena");
        let criteria = criteria_of(&search);

        assert_eq!(
            criteria,
            vec![Criterion::Name("Elena"), Criterion::Phone("+79226067314")]
        );
        assert_eq!(criteria[1].value(), "+79226067314");
        assert!(criteria[1].query().contains("FROM phones"));
    }

    #[test]
    fn empty_criteria_produce_no_queries() {
        assert!(criteria_of(&SearchCriteria::new()).is_empty());
    }
}
