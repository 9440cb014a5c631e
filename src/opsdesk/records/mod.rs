//! Per-module record shapes.
//!
//! Each module owns a flat record struct, a closed status enumeration, and a
//! `seed()` function returning the dataset a fresh store starts with. The
//! shapes share a structural pattern rather than inheritance: a unique string
//! id, a small set of classification fields drawn from fixed enums, and a
//! handful of display fields.
//!
//! Status enums are the only legal values for their field; parsing from text
//! is fallible and rejects anything outside the enumeration. Relationships
//! between modules are plain string matches (a proposal's `lead_id` against a
//! lead's id) with no referential integrity enforced.

pub mod activities;
pub mod assets;
pub mod clients;
pub mod expenses;
pub mod leads;
pub mod proposals;
pub mod sales;
pub mod subscriptions;
pub mod tasks;
pub mod tickets;

pub use activities::{Activity, ActivityKind};
pub use assets::{Asset, AssetStatus};
pub use clients::{Client, ClientStatus};
pub use expenses::ExpenseSubcategory;
pub use leads::{Lead, LeadStatus};
pub use proposals::{Proposal, ProposalStatus};
pub use sales::{Sale, SaleStage};
pub use subscriptions::{Subscription, SubscriptionStatus};
pub use tasks::{Task, TaskStatus};
pub use tickets::{Ticket, TicketPriority, TicketStatus};
