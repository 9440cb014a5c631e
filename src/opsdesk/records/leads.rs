use crate::model::Record;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LeadStatus {
    New,
    Contacted,
    Qualified,
    Won,
    Lost,
}

impl LeadStatus {
    pub const ALL: [LeadStatus; 5] = [
        LeadStatus::New,
        LeadStatus::Contacted,
        LeadStatus::Qualified,
        LeadStatus::Won,
        LeadStatus::Lost,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LeadStatus::New => "New",
            LeadStatus::Contacted => "Contacted",
            LeadStatus::Qualified => "Qualified",
            LeadStatus::Won => "Won",
            LeadStatus::Lost => "Lost",
        }
    }
}

impl std::fmt::Display for LeadStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for LeadStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LeadStatus::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| format!("Unknown lead status: {}", s))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lead {
    pub id: String,
    pub company: String,
    pub contact: String,
    pub email: String,
    pub phone: String,
    pub status: LeadStatus,
    pub source: String,
    pub owner: String,
    pub created_at: DateTime<Utc>,
}

impl Record for Lead {
    const NOUN: &'static str = "leads";
    const SEARCH_FIELDS: &'static [&'static str] = &["company", "contact", "email"];
    const COLUMNS: &'static [&'static str] =
        &["id", "company", "contact", "status", "source", "owner"];

    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, key: &str) -> Option<String> {
        match key {
            "id" => Some(self.id.clone()),
            "company" => Some(self.company.clone()),
            "contact" => Some(self.contact.clone()),
            "email" => Some(self.email.clone()),
            "phone" => Some(self.phone.clone()),
            "status" => Some(self.status.to_string()),
            "source" => Some(self.source.clone()),
            "owner" => Some(self.owner.clone()),
            _ => None,
        }
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.company.clone(),
            self.contact.clone(),
            self.status.to_string(),
            self.source.clone(),
            self.owner.clone(),
        ]
    }

    fn title(&self) -> String {
        self.company.clone()
    }

    fn created_at(&self) -> Option<DateTime<Utc>> {
        Some(self.created_at)
    }
}

/// Dataset a fresh store starts with.
pub fn seed() -> Vec<Lead> {
    let now = Utc::now();
    let lead = |id: &str,
                company: &str,
                contact: &str,
                email: &str,
                phone: &str,
                status: LeadStatus,
                source: &str,
                owner: &str,
                days_ago: i64| Lead {
        id: id.to_string(),
        company: company.to_string(),
        contact: contact.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        status,
        source: source.to_string(),
        owner: owner.to_string(),
        created_at: now - Duration::days(days_ago),
    };

    vec![
        lead(
            "LD-1001",
            "ABC Corporation",
            "Rahul Mehta",
            "rahul@abccorp.com",
            "+91 98200 11223",
            LeadStatus::Contacted,
            "Website",
            "Priya Nair",
            12,
        ),
        lead(
            "LD-1002",
            "XYZ Ltd",
            "Sonia Kapoor",
            "sonia@xyzltd.in",
            "+91 98111 44556",
            LeadStatus::New,
            "Referral",
            "Priya Nair",
            8,
        ),
        lead(
            "LD-1003",
            "Tech Solutions Inc",
            "David Chen",
            "david@techsolutions.com",
            "+1 415 555 0183",
            LeadStatus::Qualified,
            "Trade Show",
            "Arjun Rao",
            5,
        ),
        lead(
            "LD-1004",
            "Greenfield Traders",
            "Meera Joshi",
            "meera@greenfield.co",
            "+91 98333 77889",
            LeadStatus::Lost,
            "Cold Call",
            "Arjun Rao",
            30,
        ),
        lead(
            "LD-1005",
            "Orbit Logistics",
            "Sanjay Gupta",
            "sanjay@orbitlog.com",
            "+91 99870 22331",
            LeadStatus::Won,
            "Website",
            "Priya Nair",
            45,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_seed_ids_unique() {
        let leads = seed();
        let mut ids: Vec<_> = leads.iter().map(|l| l.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), leads.len());
    }

    #[test]
    fn test_status_parse_rejects_unknown() {
        assert!(LeadStatus::from_str("Qualified").is_ok());
        assert!(LeadStatus::from_str("qualified").is_err());
        assert!(LeadStatus::from_str("Frozen").is_err());
    }

    #[test]
    fn test_field_absent_key() {
        let lead = &seed()[0];
        assert_eq!(lead.field("priority"), None);
        assert_eq!(lead.field("status"), Some("Contacted".to_string()));
    }
}
