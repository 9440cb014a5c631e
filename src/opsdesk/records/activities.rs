use crate::model::Record;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivityKind {
    Call,
    Meeting,
    Demo,
    Email,
    Note,
}

impl ActivityKind {
    pub const ALL: [ActivityKind; 5] = [
        ActivityKind::Call,
        ActivityKind::Meeting,
        ActivityKind::Demo,
        ActivityKind::Email,
        ActivityKind::Note,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityKind::Call => "Call",
            ActivityKind::Meeting => "Meeting",
            ActivityKind::Demo => "Demo",
            ActivityKind::Email => "Email",
            ActivityKind::Note => "Note",
        }
    }
}

impl std::fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ActivityKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ActivityKind::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| format!("Unknown activity kind: {}", s))
    }
}

/// Logged sales activity. `lead_id` is a plain string match against the
/// leads dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    pub id: String,
    pub kind: ActivityKind,
    pub subject: String,
    pub lead_id: String,
    pub owner: String,
    pub completed: bool,
    pub logged_at: DateTime<Utc>,
}

impl Record for Activity {
    const NOUN: &'static str = "activities";
    const SEARCH_FIELDS: &'static [&'static str] = &["subject", "owner"];
    const COLUMNS: &'static [&'static str] = &["id", "kind", "subject", "lead_id", "owner"];

    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, key: &str) -> Option<String> {
        match key {
            "id" => Some(self.id.clone()),
            "kind" => Some(self.kind.to_string()),
            "subject" => Some(self.subject.clone()),
            "lead_id" => Some(self.lead_id.clone()),
            "owner" => Some(self.owner.clone()),
            "completed" => Some(if self.completed { "Yes" } else { "No" }.to_string()),
            _ => None,
        }
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.kind.to_string(),
            self.subject.clone(),
            self.lead_id.clone(),
            self.owner.clone(),
        ]
    }

    fn title(&self) -> String {
        self.subject.clone()
    }

    fn created_at(&self) -> Option<DateTime<Utc>> {
        Some(self.logged_at)
    }
}

pub fn seed() -> Vec<Activity> {
    let now = Utc::now();
    let act = |id: &str,
               kind: ActivityKind,
               subject: &str,
               lead_id: &str,
               owner: &str,
               completed: bool,
               days_ago: i64| Activity {
        id: id.to_string(),
        kind,
        subject: subject.to_string(),
        lead_id: lead_id.to_string(),
        owner: owner.to_string(),
        completed,
        logged_at: now - Duration::days(days_ago),
    };

    vec![
        act(
            "ACT-901",
            ActivityKind::Call,
            "Intro call with ABC Corporation",
            "LD-1001",
            "Priya Nair",
            true,
            11,
        ),
        act(
            "ACT-902",
            ActivityKind::Meeting,
            "Requirements workshop",
            "LD-1003",
            "Arjun Rao",
            true,
            4,
        ),
        act(
            "ACT-903",
            ActivityKind::Demo,
            "Product demo for Tech Solutions",
            "LD-1003",
            "Arjun Rao",
            true,
            2,
        ),
        act(
            "ACT-904",
            ActivityKind::Email,
            "Pricing follow-up",
            "LD-1002",
            "Priya Nair",
            false,
            1,
        ),
        act(
            "ACT-905",
            ActivityKind::Meeting,
            "Renewal discussion",
            "LD-1005",
            "Priya Nair",
            false,
            0,
        ),
    ]
}
