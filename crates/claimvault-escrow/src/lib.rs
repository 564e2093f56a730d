//! # claimvault-escrow
//!
//! **Escrow plane**: the two claim ledgers and their contract entrypoints.
//!
//! ## Architecture
//!
//! Two variants hold a claimant's payment, differing in how the claim is
//! represented:
//!
//! 1. **[`ValueLedger`]** / **[`ValueEscrow`]**: a balance table mapping
//!    claimant address to a [`ValueClaim`] row.
//! 2. **[`TicketLedger`]** / **[`TicketEscrow`]**: a capability table
//!    mapping claimant address to a move-only [`Ticket`] whose existence
//!    *is* the claim.
//!
//! ## Claim flow
//!
//! ```text
//! deposit / purchase_claim → ledger insert (one claim per owner)
//! refund / refund_claim    → ledger remove → Send { owner, amount }
//! ```
//!
//! Entrypoints never move currency themselves; they enqueue deferred
//! `Send` operations which the runtime executes, and rolls back together
//! with the ledger mutation if anything downstream is rejected.
//!
//! [`ValueClaim`]: claimvault_types::ValueClaim
//! [`Ticket`]: claimvault_types::Ticket

pub mod ticket_escrow;
pub mod ticket_ledger;
pub mod value_escrow;
pub mod value_ledger;

pub use ticket_escrow::TicketEscrow;
pub use ticket_ledger::TicketLedger;
pub use value_escrow::ValueEscrow;
pub use value_ledger::ValueLedger;
