use crate::commands::{CmdMessage, CmdResult};
use crate::error::{OpsError, Result};
use crate::records::tickets::{Ticket, TicketStatus};
use crate::session::Identity;
use crate::store::DataStore;

/// Assigns a ticket to a team member. All checks run before anything is
/// written: a blank assignee, a caller without assignment rights, or a
/// ticket outside the assignable states leaves the store untouched.
pub fn execute<S>(
    store: &mut S,
    identity: &Identity,
    ticket_id: &str,
    assignee: &str,
) -> Result<CmdResult<Ticket>>
where
    S: DataStore<Ticket>,
{
    let assignee = assignee.trim();
    if assignee.is_empty() {
        return Err(OpsError::Validation(
            "Please choose an assignee".to_string(),
        ));
    }
    if !identity.role.can_assign() {
        return Err(OpsError::Validation(format!(
            "{}s cannot assign tickets",
            identity.role
        )));
    }

    let mut ticket = store.get(ticket_id)?;
    match ticket.status {
        TicketStatus::New => {
            return Err(OpsError::Validation(format!(
                "Ticket {} must be verified before assignment",
                ticket_id
            )))
        }
        TicketStatus::Closed => {
            return Err(OpsError::Validation(format!(
                "Ticket {} is closed",
                ticket_id
            )))
        }
        _ => {}
    }

    ticket.assignee = Some(assignee.to_string());
    if ticket.status == TicketStatus::Verified {
        ticket.status = TicketStatus::Assigned;
    }
    store.update(ticket.clone())?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Ticket {} assigned to {}",
        ticket.id, assignee
    )));
    Ok(result.with_affected(vec![ticket]))
}
