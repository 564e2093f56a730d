//! # claimvault-settlement
//!
//! **Redemption plane**: administrator-gated release of escrowed value and
//! the adapter that enqueues the matching goods transfer.
//!
//! ## Architecture
//!
//! A marketplace contract embeds one of the escrow variants and adds a
//! single redemption entrypoint on top:
//!
//! 1. **[`access`]**: identity checks (caller == administrator)
//! 2. **[`ValueMarketplace`]**: `redeem_funds` over the balance-table escrow
//! 3. **[`TicketMarketplace`]**: `redeem_ticket` over the capability escrow
//! 4. **[`adapter`]**: builds the batch-transfer request for the token registry
//!
//! ## Redemption flow
//!
//! ```text
//! require_administrator → ledger remove → amount check
//!     → Send { administrator, amount }
//!     → RegistryTransfer { caller → claimant, item ids }
//! ```
//!
//! The amount check runs *after* the claim is removed; the runtime's
//! call-level atomicity restores the claim whenever any step fails,
//! including rejection of the deferred registry transfer.

pub mod access;
pub mod adapter;
pub mod ticket_marketplace;
pub mod value_marketplace;

pub use ticket_marketplace::TicketMarketplace;
pub use value_marketplace::ValueMarketplace;
