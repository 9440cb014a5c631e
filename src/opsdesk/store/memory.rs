use super::DataStore;
use crate::error::{OpsError, Result};
use crate::model::Record;

/// Order-preserving in-memory dataset. Does NOT persist data.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore<R: Record> {
    records: Vec<R>,
}

impl<R: Record + Clone> InMemoryStore<R> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Builds a store from seed data. Seeds are trusted to carry unique ids;
    /// this is checked in debug builds.
    pub fn seeded(records: Vec<R>) -> Self {
        debug_assert!(
            {
                let mut ids: Vec<_> = records.iter().map(|r| r.id().to_string()).collect();
                ids.sort();
                let before = ids.len();
                ids.dedup();
                ids.len() == before
            },
            "seed data contains duplicate ids"
        );
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.records.iter().position(|r| r.id() == id)
    }
}

impl<R: Record + Clone> DataStore<R> for InMemoryStore<R> {
    fn list(&self) -> Result<Vec<R>> {
        Ok(self.records.clone())
    }

    fn get(&self, id: &str) -> Result<R> {
        self.records
            .iter()
            .find(|r| r.id() == id)
            .cloned()
            .ok_or_else(|| OpsError::RecordNotFound(id.to_string()))
    }

    fn insert(&mut self, record: R) -> Result<()> {
        if self.position(record.id()).is_some() {
            return Err(OpsError::Store(format!(
                "Duplicate record id: {}",
                record.id()
            )));
        }
        self.records.push(record);
        Ok(())
    }

    fn update(&mut self, record: R) -> Result<()> {
        match self.position(record.id()) {
            Some(pos) => {
                self.records[pos] = record;
                Ok(())
            }
            None => Err(OpsError::RecordNotFound(record.id().to_string())),
        }
    }

    fn delete(&mut self, id: &str) -> Result<()> {
        match self.position(id) {
            Some(pos) => {
                self.records.remove(pos);
                Ok(())
            }
            None => Err(OpsError::RecordNotFound(id.to_string())),
        }
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::records::leads::{Lead, LeadStatus};
    use chrono::Utc;

    pub fn lead(id: &str, company: &str, status: LeadStatus) -> Lead {
        Lead {
            id: id.to_string(),
            company: company.to_string(),
            contact: "Test Contact".to_string(),
            email: format!("contact@{}.test", id.to_lowercase()),
            phone: String::new(),
            status,
            source: "Website".to_string(),
            owner: "Test Owner".to_string(),
            created_at: Utc::now(),
        }
    }

    pub fn lead_store() -> InMemoryStore<Lead> {
        InMemoryStore::seeded(vec![
            lead("LD-1", "ABC Corporation", LeadStatus::New),
            lead("LD-2", "XYZ Ltd", LeadStatus::Contacted),
            lead("LD-3", "Tech Solutions Inc", LeadStatus::Qualified),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::{lead, lead_store};
    use super::*;
    use crate::records::leads::LeadStatus;

    #[test]
    fn test_list_preserves_insertion_order() {
        let store = lead_store();
        let ids: Vec<_> = store
            .list()
            .unwrap()
            .into_iter()
            .map(|l| l.id)
            .collect();
        assert_eq!(ids, vec!["LD-1", "LD-2", "LD-3"]);
    }

    #[test]
    fn test_insert_rejects_duplicate_id() {
        let mut store = lead_store();
        let err = store
            .insert(lead("LD-2", "Duplicate Co", LeadStatus::New))
            .unwrap_err();
        assert!(matches!(err, OpsError::Store(_)));
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_update_keeps_position() {
        let mut store = lead_store();
        let mut second = store.get("LD-2").unwrap();
        second.status = LeadStatus::Qualified;
        store.update(second).unwrap();

        let records = store.list().unwrap();
        assert_eq!(records[1].id, "LD-2");
        assert_eq!(records[1].status, LeadStatus::Qualified);
    }

    #[test]
    fn test_delete_missing_is_not_found() {
        let mut store = lead_store();
        let err = store.delete("LD-99").unwrap_err();
        assert!(matches!(err, OpsError::RecordNotFound(_)));
    }
}
