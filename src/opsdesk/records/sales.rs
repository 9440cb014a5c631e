use crate::model::Record;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SaleStage {
    Prospecting,
    Negotiation,
    ClosedWon,
    ClosedLost,
}

impl SaleStage {
    pub const ALL: [SaleStage; 4] = [
        SaleStage::Prospecting,
        SaleStage::Negotiation,
        SaleStage::ClosedWon,
        SaleStage::ClosedLost,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SaleStage::Prospecting => "Prospecting",
            SaleStage::Negotiation => "Negotiation",
            SaleStage::ClosedWon => "Closed Won",
            SaleStage::ClosedLost => "Closed Lost",
        }
    }
}

impl std::fmt::Display for SaleStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SaleStage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SaleStage::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| format!("Unknown sale stage: {}", s))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sale {
    pub id: String,
    pub client_id: String,
    pub item: String,
    pub amount: f64,
    pub stage: SaleStage,
    pub owner: String,
    pub closed_on: Option<NaiveDate>,
}

impl Record for Sale {
    const NOUN: &'static str = "sales";
    const SEARCH_FIELDS: &'static [&'static str] = &["item", "client_id", "owner"];
    const COLUMNS: &'static [&'static str] =
        &["id", "client_id", "item", "amount", "stage", "owner"];

    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, key: &str) -> Option<String> {
        match key {
            "id" => Some(self.id.clone()),
            "client_id" => Some(self.client_id.clone()),
            "item" => Some(self.item.clone()),
            "stage" => Some(self.stage.to_string()),
            "owner" => Some(self.owner.clone()),
            _ => None,
        }
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.client_id.clone(),
            self.item.clone(),
            format!("{:.2}", self.amount),
            self.stage.to_string(),
            self.owner.clone(),
        ]
    }

    fn title(&self) -> String {
        self.item.clone()
    }
}

pub fn seed() -> Vec<Sale> {
    let sale = |id: &str,
                client_id: &str,
                item: &str,
                amount: f64,
                stage: SaleStage,
                owner: &str,
                closed: Option<(i32, u32, u32)>| Sale {
        id: id.to_string(),
        client_id: client_id.to_string(),
        item: item.to_string(),
        amount,
        stage,
        owner: owner.to_string(),
        closed_on: closed.and_then(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d)),
    };

    vec![
        sale(
            "SL-601",
            "CL-301",
            "Fleet tracking licenses",
            76_000.0,
            SaleStage::ClosedWon,
            "Priya Nair",
            Some((2026, 6, 18)),
        ),
        sale(
            "SL-602",
            "CL-302",
            "POS integration",
            22_000.0,
            SaleStage::Negotiation,
            "Arjun Rao",
            None,
        ),
        sale(
            "SL-603",
            "CL-302",
            "Analytics add-on",
            8_500.0,
            SaleStage::Prospecting,
            "Arjun Rao",
            None,
        ),
        sale(
            "SL-604",
            "CL-304",
            "Archive migration",
            14_000.0,
            SaleStage::ClosedLost,
            "Priya Nair",
            Some((2026, 2, 3)),
        ),
    ]
}
