use crate::model::Record;

/// Free-text search predicate.
///
/// True when the query is blank, or when the lower-cased query is a substring
/// of at least one of the record's designated searchable fields
/// ([`Record::SEARCH_FIELDS`]), lower-cased. Substring only: no tokenizing,
/// no fuzzing, no ranking.
pub fn matches<R: Record>(record: &R, query: &str) -> bool {
    let query = query.trim();
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    R::SEARCH_FIELDS.iter().any(|key| {
        record
            .field(key)
            .map(|value| value.to_lowercase().contains(&needle))
            .unwrap_or(false)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::leads;

    #[test]
    fn test_blank_query_matches_all() {
        for lead in leads::seed() {
            assert!(matches(&lead, ""));
            assert!(matches(&lead, "   "));
        }
    }

    #[test]
    fn test_case_insensitive_substring() {
        let hits: Vec<_> = leads::seed()
            .into_iter()
            .filter(|l| matches(l, "tech"))
            .collect();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].company, "Tech Solutions Inc");
    }

    #[test]
    fn test_searches_every_designated_field() {
        let leads = leads::seed();
        // contact name
        assert!(leads.iter().any(|l| matches(l, "sonia")));
        // email
        assert!(leads.iter().any(|l| matches(l, "orbitlog.com")));
    }

    #[test]
    fn test_non_designated_fields_not_searched() {
        // "Website" appears only in the source field, which is not in
        // SEARCH_FIELDS for leads.
        assert!(!leads::seed().iter().any(|l| matches(l, "website")));
    }

    #[test]
    fn test_no_hits() {
        assert!(!leads::seed().iter().any(|l| matches(l, "zzzzzz")));
    }
}
