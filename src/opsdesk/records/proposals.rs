use crate::model::Record;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProposalStatus {
    Draft,
    Sent,
    Accepted,
    Declined,
}

impl ProposalStatus {
    pub const ALL: [ProposalStatus; 4] = [
        ProposalStatus::Draft,
        ProposalStatus::Sent,
        ProposalStatus::Accepted,
        ProposalStatus::Declined,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProposalStatus::Draft => "Draft",
            ProposalStatus::Sent => "Sent",
            ProposalStatus::Accepted => "Accepted",
            ProposalStatus::Declined => "Declined",
        }
    }
}

impl std::fmt::Display for ProposalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ProposalStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProposalStatus::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| format!("Unknown proposal status: {}", s))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Proposal {
    pub id: String,
    pub lead_id: String,
    pub title: String,
    pub amount: f64,
    pub status: ProposalStatus,
    pub valid_until: NaiveDate,
}

impl Record for Proposal {
    const NOUN: &'static str = "proposals";
    const SEARCH_FIELDS: &'static [&'static str] = &["title", "lead_id"];
    const COLUMNS: &'static [&'static str] =
        &["id", "title", "lead_id", "amount", "status", "valid_until"];

    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, key: &str) -> Option<String> {
        match key {
            "id" => Some(self.id.clone()),
            "lead_id" => Some(self.lead_id.clone()),
            "title" => Some(self.title.clone()),
            "status" => Some(self.status.to_string()),
            _ => None,
        }
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.title.clone(),
            self.lead_id.clone(),
            format!("{:.2}", self.amount),
            self.status.to_string(),
            self.valid_until.format("%Y-%m-%d").to_string(),
        ]
    }

    fn title(&self) -> String {
        self.title.clone()
    }
}

pub fn seed() -> Vec<Proposal> {
    let prop = |id: &str,
                lead_id: &str,
                title: &str,
                amount: f64,
                status: ProposalStatus,
                date: (i32, u32, u32)| Proposal {
        id: id.to_string(),
        lead_id: lead_id.to_string(),
        title: title.to_string(),
        amount,
        status,
        valid_until: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap_or_default(),
    };

    vec![
        prop(
            "PR-701",
            "LD-1003",
            "Implementation package - Tech Solutions",
            48_000.0,
            ProposalStatus::Sent,
            (2026, 10, 15),
        ),
        prop(
            "PR-702",
            "LD-1001",
            "Annual support plan - ABC Corporation",
            12_500.0,
            ProposalStatus::Draft,
            (2026, 9, 30),
        ),
        prop(
            "PR-703",
            "LD-1005",
            "Fleet tracking rollout - Orbit Logistics",
            76_000.0,
            ProposalStatus::Accepted,
            (2026, 7, 1),
        ),
    ]
}
