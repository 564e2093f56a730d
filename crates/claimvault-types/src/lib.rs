//! # claimvault-types
//!
//! Shared types, errors, and configuration for the **claimvault** escrow
//! and redemption engine.
//!
//! This crate is the leaf dependency of the workspace — every other crate
//! depends on it. It defines:
//!
//! - **Identifiers**: [`Address`], [`ItemId`]
//! - **Claim model**: [`ValueClaim`], [`Ticket`], [`TicketContent`]
//! - **Transfer model**: [`TransferBatch`], [`TransferTx`]
//! - **Call model**: [`CallEnv`], [`Operation`], [`OperationQueue`]
//! - **Configuration**: [`MarketplaceConfig`]
//! - **Errors**: [`ClaimvaultError`] with `CV_ERR_` prefix codes

pub mod call;
pub mod claim;
pub mod config;
pub mod error;
pub mod ids;
pub mod transfer;

// Re-export all primary types at crate root for ergonomic imports:
//   use claimvault_types::{Address, Ticket, TransferBatch, ...};

pub use call::*;
pub use claim::*;
pub use config::*;
pub use error::*;
pub use ids::*;
pub use transfer::*;
