use crate::model::Record;
use serde::{Deserialize, Serialize};

/// Expense subcategory as configured in the finance module. The parent
/// category is a plain classification field, not a foreign key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseSubcategory {
    pub id: String,
    pub name: String,
    pub category: String,
    pub active: bool,
}

impl Record for ExpenseSubcategory {
    const NOUN: &'static str = "expense subcategories";
    const SEARCH_FIELDS: &'static [&'static str] = &["name"];
    const COLUMNS: &'static [&'static str] = &["id", "name", "category", "active"];

    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, key: &str) -> Option<String> {
        match key {
            "id" => Some(self.id.clone()),
            "name" => Some(self.name.clone()),
            "category" => Some(self.category.clone()),
            "active" => Some(if self.active { "Yes" } else { "No" }.to_string()),
            _ => None,
        }
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.category.clone(),
            if self.active { "Yes" } else { "No" }.to_string(),
        ]
    }

    fn title(&self) -> String {
        self.name.clone()
    }
}

pub fn seed() -> Vec<ExpenseSubcategory> {
    let sub = |id: &str, name: &str, category: &str| ExpenseSubcategory {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        active: true,
    };

    vec![
        sub("EXP-01", "Cab Fare", "Travel"),
        sub("EXP-02", "Flight Tickets", "Travel"),
        sub("EXP-03", "Hotel Stay", "Travel"),
        sub("EXP-04", "Team Lunch", "Meals"),
        sub("EXP-05", "Client Dinner", "Meals"),
        sub("EXP-06", "Laptop Repair", "Equipment"),
        sub("EXP-07", "Stationery", "Office"),
    ]
}
