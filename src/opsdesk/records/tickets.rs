use crate::model::Record;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Ticket workflow states. Tickets move verify → assign → merge → QC →
/// support; [`TicketStatus::next_states`] is the authority on which jumps are
/// legal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TicketStatus {
    New,
    Verified,
    Assigned,
    Merged,
    QualityCheck,
    Support,
    Closed,
}

impl TicketStatus {
    pub const ALL: [TicketStatus; 7] = [
        TicketStatus::New,
        TicketStatus::Verified,
        TicketStatus::Assigned,
        TicketStatus::Merged,
        TicketStatus::QualityCheck,
        TicketStatus::Support,
        TicketStatus::Closed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TicketStatus::New => "New",
            TicketStatus::Verified => "Verified",
            TicketStatus::Assigned => "Assigned",
            TicketStatus::Merged => "Merged",
            TicketStatus::QualityCheck => "Quality Check",
            TicketStatus::Support => "Support",
            TicketStatus::Closed => "Closed",
        }
    }

    /// States a ticket in this state may move to.
    pub fn next_states(&self) -> &'static [TicketStatus] {
        match self {
            TicketStatus::New => &[TicketStatus::Verified],
            TicketStatus::Verified => &[TicketStatus::Assigned],
            TicketStatus::Assigned => &[TicketStatus::Merged, TicketStatus::QualityCheck],
            TicketStatus::Merged => &[TicketStatus::QualityCheck],
            TicketStatus::QualityCheck => &[TicketStatus::Support],
            TicketStatus::Support => &[TicketStatus::Closed],
            TicketStatus::Closed => &[],
        }
    }

    pub fn can_move_to(&self, next: TicketStatus) -> bool {
        self.next_states().contains(&next)
    }
}

impl std::fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TicketStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TicketStatus::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| format!("Unknown ticket status: {}", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TicketPriority {
    Low,
    Medium,
    High,
    Urgent,
}

impl TicketPriority {
    pub const ALL: [TicketPriority; 4] = [
        TicketPriority::Low,
        TicketPriority::Medium,
        TicketPriority::High,
        TicketPriority::Urgent,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TicketPriority::Low => "Low",
            TicketPriority::Medium => "Medium",
            TicketPriority::High => "High",
            TicketPriority::Urgent => "Urgent",
        }
    }
}

impl std::fmt::Display for TicketPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TicketPriority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TicketPriority::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| format!("Unknown ticket priority: {}", s))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ticket {
    pub id: String,
    pub subject: String,
    pub status: TicketStatus,
    pub priority: TicketPriority,
    pub assignee: Option<String>,
    pub reporter: String,
    pub created_at: DateTime<Utc>,
}

impl Record for Ticket {
    const NOUN: &'static str = "tickets";
    const SEARCH_FIELDS: &'static [&'static str] = &["subject", "reporter", "assignee"];
    const COLUMNS: &'static [&'static str] =
        &["id", "subject", "status", "priority", "assignee"];

    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, key: &str) -> Option<String> {
        match key {
            "id" => Some(self.id.clone()),
            "subject" => Some(self.subject.clone()),
            "status" => Some(self.status.to_string()),
            "priority" => Some(self.priority.to_string()),
            "assignee" => self.assignee.clone(),
            "reporter" => Some(self.reporter.clone()),
            _ => None,
        }
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.subject.clone(),
            self.status.to_string(),
            self.priority.to_string(),
            self.assignee.clone().unwrap_or_default(),
        ]
    }

    fn title(&self) -> String {
        self.subject.clone()
    }

    fn created_at(&self) -> Option<DateTime<Utc>> {
        Some(self.created_at)
    }
}

pub fn seed() -> Vec<Ticket> {
    let now = Utc::now();
    let ticket = |id: &str,
                  subject: &str,
                  status: TicketStatus,
                  priority: TicketPriority,
                  assignee: Option<&str>,
                  reporter: &str,
                  hours_ago: i64| Ticket {
        id: id.to_string(),
        subject: subject.to_string(),
        status,
        priority,
        assignee: assignee.map(str::to_string),
        reporter: reporter.to_string(),
        created_at: now - Duration::hours(hours_ago),
    };

    vec![
        ticket(
            "TKT-2201",
            "Login page throws 500 on mobile",
            TicketStatus::New,
            TicketPriority::Urgent,
            None,
            "support@abccorp.com",
            3,
        ),
        ticket(
            "TKT-2202",
            "Invoice PDF missing line items",
            TicketStatus::Verified,
            TicketPriority::High,
            None,
            "billing@xyzltd.in",
            26,
        ),
        ticket(
            "TKT-2203",
            "Password reset email delayed",
            TicketStatus::Assigned,
            TicketPriority::Medium,
            Some("Kiran Shah"),
            "it@greenfield.co",
            49,
        ),
        ticket(
            "TKT-2204",
            "Dashboard widgets render blank",
            TicketStatus::QualityCheck,
            TicketPriority::High,
            Some("Arjun Rao"),
            "ops@orbitlog.com",
            71,
        ),
        ticket(
            "TKT-2205",
            "Export button greyed out on Safari",
            TicketStatus::Closed,
            TicketPriority::Low,
            Some("Kiran Shah"),
            "qa@techsolutions.com",
            200,
        ),
    ]
}
