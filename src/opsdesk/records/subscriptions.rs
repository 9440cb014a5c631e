use crate::model::Record;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubscriptionStatus {
    Trial,
    Active,
    PastDue,
    Cancelled,
}

impl SubscriptionStatus {
    pub const ALL: [SubscriptionStatus; 4] = [
        SubscriptionStatus::Trial,
        SubscriptionStatus::Active,
        SubscriptionStatus::PastDue,
        SubscriptionStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SubscriptionStatus::Trial => "Trial",
            SubscriptionStatus::Active => "Active",
            SubscriptionStatus::PastDue => "Past Due",
            SubscriptionStatus::Cancelled => "Cancelled",
        }
    }
}

impl std::fmt::Display for SubscriptionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SubscriptionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SubscriptionStatus::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| format!("Unknown subscription status: {}", s))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subscription {
    pub id: String,
    pub client_id: String,
    pub plan: String,
    pub status: SubscriptionStatus,
    pub seats: u32,
    pub renews_on: NaiveDate,
}

impl Record for Subscription {
    const NOUN: &'static str = "subscriptions";
    const SEARCH_FIELDS: &'static [&'static str] = &["plan", "client_id"];
    const COLUMNS: &'static [&'static str] =
        &["id", "client_id", "plan", "status", "seats", "renews"];

    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, key: &str) -> Option<String> {
        match key {
            "id" => Some(self.id.clone()),
            "client_id" => Some(self.client_id.clone()),
            "plan" => Some(self.plan.clone()),
            "status" => Some(self.status.to_string()),
            _ => None,
        }
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.client_id.clone(),
            self.plan.clone(),
            self.status.to_string(),
            self.seats.to_string(),
            self.renews_on.format("%Y-%m-%d").to_string(),
        ]
    }

    fn title(&self) -> String {
        format!("{} ({})", self.plan, self.client_id)
    }
}

pub fn seed() -> Vec<Subscription> {
    let sub = |id: &str,
               client_id: &str,
               plan: &str,
               status: SubscriptionStatus,
               seats: u32,
               date: (i32, u32, u32)| Subscription {
        id: id.to_string(),
        client_id: client_id.to_string(),
        plan: plan.to_string(),
        status,
        seats,
        renews_on: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap_or_default(),
    };

    vec![
        sub(
            "SUB-41",
            "CL-301",
            "Enterprise",
            SubscriptionStatus::Active,
            120,
            (2027, 1, 1),
        ),
        sub(
            "SUB-42",
            "CL-302",
            "Growth",
            SubscriptionStatus::PastDue,
            35,
            (2026, 9, 10),
        ),
        sub(
            "SUB-43",
            "CL-303",
            "Starter",
            SubscriptionStatus::Cancelled,
            10,
            (2026, 5, 20),
        ),
        sub(
            "SUB-44",
            "CL-302",
            "Analytics Add-on",
            SubscriptionStatus::Trial,
            35,
            (2026, 9, 25),
        ),
    ]
}
