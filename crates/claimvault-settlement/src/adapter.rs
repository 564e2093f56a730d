//! External transfer adapter.
//!
//! Builds the batch-transfer request consumed by the token registry's
//! `transfer` entrypoint and enqueues it as a deferred operation. The
//! adapter never waits for or interprets a response — acceptance is only
//! observable at settlement time, when the runtime executes the queue.

use claimvault_types::{Address, ItemId, OperationQueue, TransferBatch, TransferTx};

/// Build a single-sender batch moving one unit of each id to `to`.
#[must_use]
pub fn single_sender_batch(from: Address, to: Address, ids: &[ItemId]) -> Vec<TransferBatch> {
    vec![TransferBatch {
        from,
        txs: ids
            .iter()
            .map(|&item_id| TransferTx {
                to,
                item_id,
                quantity: 1,
            })
            .collect(),
    }]
}

/// Enqueue a registry transfer of one unit of each id from `from` to `to`.
pub fn enqueue_transfer(
    ops: &mut OperationQueue,
    registry: Address,
    from: Address,
    to: Address,
    ids: &[ItemId],
) {
    ops.registry_transfer(registry, single_sender_batch(from, to, ids));
    tracing::debug!(%registry, %from, %to, items = ids.len(), "registry transfer enqueued");
}
