use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Record;
use crate::store::DataStore;

/// Deletes one record permanently. There is no soft-delete; a missing id is
/// a not-found error and nothing else changes.
pub fn execute<R, S>(store: &mut S, id: &str) -> Result<CmdResult<R>>
where
    R: Record,
    S: DataStore<R>,
{
    let record = store.get(id)?;
    store.delete(id)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Deleted {} {}",
        singular(R::NOUN),
        id
    )));
    Ok(result.with_affected(vec![record]))
}

fn singular(noun: &str) -> &str {
    noun.strip_suffix('s').unwrap_or(noun)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OpsError;
    use crate::store::memory::fixtures;

    #[test]
    fn test_delete_removes_record() {
        let mut store = fixtures::lead_store();
        let result = execute(&mut store, "LD-2").unwrap();
        assert_eq!(result.affected[0].id, "LD-2");
        assert_eq!(store.len(), 2);
        assert_eq!(result.messages[0].content, "Deleted lead LD-2");
    }

    #[test]
    fn test_delete_missing() {
        let mut store = fixtures::lead_store();
        let err = execute(&mut store, "LD-99").unwrap_err();
        assert!(matches!(err, OpsError::RecordNotFound(_)));
        assert_eq!(store.len(), 3);
    }
}
