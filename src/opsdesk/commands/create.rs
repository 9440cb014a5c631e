use crate::commands::{CmdMessage, CmdResult};
use crate::error::{OpsError, Result};
use crate::records::leads::{Lead, LeadStatus};
use crate::session::Identity;
use crate::store::DataStore;
use chrono::Utc;
use uuid::Uuid;

/// Field values for a new lead, as entered on the create form. Status and
/// owner default when not provided; the owner falls back to the current
/// user.
#[derive(Debug, Clone, Default)]
pub struct NewLead {
    pub company: String,
    pub contact: String,
    pub email: String,
    pub phone: String,
    pub status: Option<LeadStatus>,
    pub source: String,
    pub owner: Option<String>,
}

/// Creates a lead with a minted id and inserts it into the store.
pub fn execute<S>(store: &mut S, identity: &Identity, input: NewLead) -> Result<CmdResult<Lead>>
where
    S: DataStore<Lead>,
{
    for (label, value) in [
        ("company", &input.company),
        ("contact", &input.contact),
        ("email", &input.email),
    ] {
        if value.trim().is_empty() {
            return Err(OpsError::Validation(format!(
                "A {} is required to create a lead",
                label
            )));
        }
    }

    let lead = Lead {
        id: mint_id(),
        company: input.company.trim().to_string(),
        contact: input.contact.trim().to_string(),
        email: input.email.trim().to_string(),
        phone: input.phone.trim().to_string(),
        status: input.status.unwrap_or(LeadStatus::New),
        source: input.source.trim().to_string(),
        owner: input.owner.unwrap_or_else(|| identity.name.clone()),
        created_at: Utc::now(),
    };
    store.insert(lead.clone())?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Lead created: {} ({})",
        lead.company, lead.id
    )));
    Ok(result.with_affected(vec![lead]))
}

fn mint_id() -> String {
    let uuid = Uuid::new_v4().simple().to_string();
    format!("LD-{}", &uuid[..8])
}
