//! Request types for the external token registry's `transfer` entrypoint.
//!
//! The registry expects a list of per-sender batches, each carrying a list
//! of per-recipient line items. The shape is fixed — the adapter builds
//! it, the registry validates it, nobody improvises on it.

use serde::{Deserialize, Serialize};

use crate::{Address, ItemId};

/// One line item inside a transfer batch: move `quantity` units of
/// `item_id` to `to`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferTx {
    /// Recipient of the items.
    pub to: Address,
    /// The registry item being moved.
    pub item_id: ItemId,
    /// Units to move. Escrow redemptions always move exactly 1.
    pub quantity: u64,
}

/// A batch of transfers all debited from the same sender.
///
/// The registry's `transfer` entrypoint accepts `Vec<TransferBatch>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferBatch {
    /// The identity the items are debited from.
    pub from: Address,
    /// Per-recipient line items.
    pub txs: Vec<TransferTx>,
}
