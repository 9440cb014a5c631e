use crate::model::Record;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetStatus {
    InStock,
    Issued,
    InRepair,
    Scrapped,
}

impl AssetStatus {
    pub const ALL: [AssetStatus; 4] = [
        AssetStatus::InStock,
        AssetStatus::Issued,
        AssetStatus::InRepair,
        AssetStatus::Scrapped,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AssetStatus::InStock => "In Stock",
            AssetStatus::Issued => "Issued",
            AssetStatus::InRepair => "In Repair",
            AssetStatus::Scrapped => "Scrapped",
        }
    }
}

impl std::fmt::Display for AssetStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AssetStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AssetStatus::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| format!("Unknown asset status: {}", s))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asset {
    pub id: String,
    pub name: String,
    pub category: String,
    pub status: AssetStatus,
    pub assigned_to: Option<String>,
    pub purchased_on: NaiveDate,
}

impl Record for Asset {
    const NOUN: &'static str = "assets";
    const SEARCH_FIELDS: &'static [&'static str] = &["name", "assigned_to"];
    const COLUMNS: &'static [&'static str] =
        &["id", "name", "category", "status", "assigned_to", "purchased"];

    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, key: &str) -> Option<String> {
        match key {
            "id" => Some(self.id.clone()),
            "name" => Some(self.name.clone()),
            "category" => Some(self.category.clone()),
            "status" => Some(self.status.to_string()),
            "assigned_to" => self.assigned_to.clone(),
            _ => None,
        }
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.category.clone(),
            self.status.to_string(),
            self.assigned_to.clone().unwrap_or_default(),
            self.purchased_on.format("%Y-%m-%d").to_string(),
        ]
    }

    fn title(&self) -> String {
        self.name.clone()
    }
}

pub fn seed() -> Vec<Asset> {
    let asset = |id: &str,
                 name: &str,
                 category: &str,
                 status: AssetStatus,
                 assigned_to: Option<&str>,
                 date: (i32, u32, u32)| Asset {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        status,
        assigned_to: assigned_to.map(str::to_string),
        purchased_on: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap_or_default(),
    };

    vec![
        asset(
            "AST-501",
            "Dell Latitude 5440",
            "Laptop",
            AssetStatus::Issued,
            Some("Kiran Shah"),
            (2024, 3, 14),
        ),
        asset(
            "AST-502",
            "HP LaserJet M404",
            "Printer",
            AssetStatus::InStock,
            None,
            (2023, 11, 2),
        ),
        asset(
            "AST-503",
            "MacBook Air M2",
            "Laptop",
            AssetStatus::Issued,
            Some("Priya Nair"),
            (2024, 7, 21),
        ),
        asset(
            "AST-504",
            "Logitech MX Master 3",
            "Accessory",
            AssetStatus::InRepair,
            None,
            (2024, 1, 9),
        ),
        asset(
            "AST-505",
            "Lenovo ThinkPad T480",
            "Laptop",
            AssetStatus::Scrapped,
            None,
            (2019, 6, 30),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_status_round_trip() {
        for status in AssetStatus::ALL {
            assert_eq!(AssetStatus::from_str(status.as_str()), Ok(status));
        }
    }

    #[test]
    fn test_unassigned_asset_has_no_assignee_field() {
        let assets = seed();
        let in_stock = assets.iter().find(|a| a.id == "AST-502").unwrap();
        assert_eq!(in_stock.field("assigned_to"), None);
    }
}
