use crate::model::Record;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClientStatus {
    Active,
    Inactive,
    Churned,
}

impl ClientStatus {
    pub const ALL: [ClientStatus; 3] = [
        ClientStatus::Active,
        ClientStatus::Inactive,
        ClientStatus::Churned,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ClientStatus::Active => "Active",
            ClientStatus::Inactive => "Inactive",
            ClientStatus::Churned => "Churned",
        }
    }
}

impl std::fmt::Display for ClientStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ClientStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ClientStatus::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| format!("Unknown client status: {}", s))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    pub id: String,
    pub name: String,
    pub industry: String,
    pub status: ClientStatus,
    pub account_manager: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl Record for Client {
    const NOUN: &'static str = "clients";
    const SEARCH_FIELDS: &'static [&'static str] = &["name", "email", "account_manager"];
    const COLUMNS: &'static [&'static str] =
        &["id", "name", "industry", "status", "account_manager"];

    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, key: &str) -> Option<String> {
        match key {
            "id" => Some(self.id.clone()),
            "name" => Some(self.name.clone()),
            "industry" => Some(self.industry.clone()),
            "status" => Some(self.status.to_string()),
            "account_manager" => Some(self.account_manager.clone()),
            "email" => Some(self.email.clone()),
            _ => None,
        }
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.industry.clone(),
            self.status.to_string(),
            self.account_manager.clone(),
        ]
    }

    fn title(&self) -> String {
        self.name.clone()
    }

    fn created_at(&self) -> Option<DateTime<Utc>> {
        Some(self.created_at)
    }
}

pub fn seed() -> Vec<Client> {
    let now = Utc::now();
    let client = |id: &str,
                  name: &str,
                  industry: &str,
                  status: ClientStatus,
                  manager: &str,
                  email: &str,
                  days_ago: i64| Client {
        id: id.to_string(),
        name: name.to_string(),
        industry: industry.to_string(),
        status,
        account_manager: manager.to_string(),
        email: email.to_string(),
        created_at: now - Duration::days(days_ago),
    };

    vec![
        client(
            "CL-301",
            "Orbit Logistics",
            "Logistics",
            ClientStatus::Active,
            "Priya Nair",
            "accounts@orbitlog.com",
            320,
        ),
        client(
            "CL-302",
            "Nimbus Retail",
            "Retail",
            ClientStatus::Active,
            "Arjun Rao",
            "finance@nimbusretail.in",
            150,
        ),
        client(
            "CL-303",
            "Helix Pharma",
            "Pharmaceuticals",
            ClientStatus::Inactive,
            "Priya Nair",
            "it@helixpharma.com",
            540,
        ),
        client(
            "CL-304",
            "Crestline Media",
            "Media",
            ClientStatus::Churned,
            "Arjun Rao",
            "ops@crestline.media",
            700,
        ),
    ]
}
