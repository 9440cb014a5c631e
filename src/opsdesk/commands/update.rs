use crate::commands::{CmdMessage, CmdResult};
use crate::error::{OpsError, Result};
use crate::records::tickets::{Ticket, TicketStatus};
use crate::store::DataStore;

/// Moves a ticket to a new workflow state. Only the transitions named by
/// [`TicketStatus::next_states`] are legal; anything else is refused with
/// the allowed targets spelled out.
pub fn ticket_status<S>(store: &mut S, ticket_id: &str, next: TicketStatus) -> Result<CmdResult<Ticket>>
where
    S: DataStore<Ticket>,
{
    let mut ticket = store.get(ticket_id)?;

    if !ticket.status.can_move_to(next) {
        let allowed: Vec<_> = ticket
            .status
            .next_states()
            .iter()
            .map(|s| s.as_str())
            .collect();
        let hint = if allowed.is_empty() {
            "no further transitions".to_string()
        } else {
            format!("allowed: {}", allowed.join(", "))
        };
        return Err(OpsError::Validation(format!(
            "Cannot move ticket {} from {} to {} ({})",
            ticket_id, ticket.status, next, hint
        )));
    }

    ticket.status = next;
    store.update(ticket.clone())?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Ticket {} moved to {}",
        ticket.id, next
    )));
    Ok(result.with_affected(vec![ticket]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::tickets;
    use crate::store::memory::InMemoryStore;

    fn store() -> InMemoryStore<Ticket> {
        InMemoryStore::seeded(tickets::seed())
    }

    #[test]
    fn test_legal_transition() {
        let mut store = store();
        let result = ticket_status(&mut store, "TKT-2201", TicketStatus::Verified).unwrap();
        assert_eq!(result.affected[0].status, TicketStatus::Verified);
        assert_eq!(store.get("TKT-2201").unwrap().status, TicketStatus::Verified);
    }

    #[test]
    fn test_illegal_transition_names_allowed_states() {
        let mut store = store();
        let err = ticket_status(&mut store, "TKT-2201", TicketStatus::Closed).unwrap_err();
        assert!(err.to_string().contains("allowed: Verified"));
        assert_eq!(store.get("TKT-2201").unwrap().status, TicketStatus::New);
    }

    #[test]
    fn test_closed_ticket_has_no_transitions() {
        let mut store = store();
        let err = ticket_status(&mut store, "TKT-2205", TicketStatus::Support).unwrap_err();
        assert!(err.to_string().contains("no further transitions"));
    }

    #[test]
    fn test_missing_ticket() {
        let mut store = store();
        assert!(ticket_status(&mut store, "TKT-9999", TicketStatus::Verified).is_err());
    }
}
