use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Record;
use crate::query::{search, FilterSet};
use crate::store::DataStore;

/// Lists the records of one module, narrowed by the active filters and the
/// search query. Output preserves store order; an empty result is not an
/// error.
pub fn execute<R, S>(store: &S, filters: &FilterSet, query: &str) -> Result<CmdResult<R>>
where
    R: Record,
    S: DataStore<R>,
{
    let records = store.list()?;
    let visible: Vec<R> = records
        .into_iter()
        .filter(|r| filters.matches(r) && search::matches(r, query))
        .collect();
    Ok(CmdResult::default().with_listed(visible))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures;

    #[test]
    fn test_list_all() {
        let store = fixtures::lead_store();
        let result = execute(&store, &FilterSet::new(), "").unwrap();
        assert_eq!(result.listed.len(), 3);
    }

    #[test]
    fn test_list_with_search() {
        let store = fixtures::lead_store();
        let result = execute(&store, &FilterSet::new(), "tech").unwrap();
        assert_eq!(result.listed.len(), 1);
        assert_eq!(result.listed[0].company, "Tech Solutions Inc");
    }

    #[test]
    fn test_list_empty_result_is_ok() {
        let store = fixtures::lead_store();
        let result = execute(&store, &FilterSet::new(), "zzzz").unwrap();
        assert!(result.listed.is_empty());
        assert!(result.messages.is_empty());
    }
}
