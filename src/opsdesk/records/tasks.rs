use crate::model::Record;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    Open,
    InProgress,
    Done,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 3] = [TaskStatus::Open, TaskStatus::InProgress, TaskStatus::Done];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Open => "Open",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Done => "Done",
        }
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TaskStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TaskStatus::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| format!("Unknown task status: {}", s))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub status: TaskStatus,
    pub assignee: String,
    pub due_on: NaiveDate,
}

impl Record for Task {
    const NOUN: &'static str = "tasks";
    const SEARCH_FIELDS: &'static [&'static str] = &["title", "assignee"];
    const COLUMNS: &'static [&'static str] = &["id", "title", "status", "assignee", "due"];

    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, key: &str) -> Option<String> {
        match key {
            "id" => Some(self.id.clone()),
            "title" => Some(self.title.clone()),
            "status" => Some(self.status.to_string()),
            "assignee" => Some(self.assignee.clone()),
            _ => None,
        }
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.title.clone(),
            self.status.to_string(),
            self.assignee.clone(),
            self.due_on.format("%Y-%m-%d").to_string(),
        ]
    }

    fn title(&self) -> String {
        self.title.clone()
    }
}

pub fn seed() -> Vec<Task> {
    let task = |id: &str, title: &str, status: TaskStatus, assignee: &str, date: (i32, u32, u32)| {
        Task {
            id: id.to_string(),
            title: title.to_string(),
            status,
            assignee: assignee.to_string(),
            due_on: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap_or_default(),
        }
    };

    vec![
        task(
            "TSK-101",
            "Prepare Q3 pipeline review",
            TaskStatus::InProgress,
            "Priya Nair",
            (2026, 9, 5),
        ),
        task(
            "TSK-102",
            "Send onboarding docs to Nimbus Retail",
            TaskStatus::Open,
            "Arjun Rao",
            (2026, 9, 1),
        ),
        task(
            "TSK-103",
            "Close out demo feedback",
            TaskStatus::Done,
            "Arjun Rao",
            (2026, 8, 20),
        ),
        task(
            "TSK-104",
            "Update asset register",
            TaskStatus::Done,
            "Kiran Shah",
            (2026, 8, 12),
        ),
    ]
}
