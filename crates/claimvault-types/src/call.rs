//! The entrypoint call model: what a contract sees, and what it may emit.
//!
//! Entrypoints never perform external effects directly. They observe a
//! [`CallEnv`] and append [`Operation`]s to an [`OperationQueue`]; the
//! surrounding runtime executes the queue only after the entrypoint
//! returns, and rolls the whole call back if any queued operation is
//! rejected. That deferral is what makes "pay the administrator and
//! transfer the goods" a single all-or-nothing unit.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{Address, TransferBatch};

/// What an entrypoint may observe about its invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallEnv {
    /// The identity that submitted the call.
    pub sender: Address,
    /// Currency attached to the call, already credited to the contract.
    pub attached: Decimal,
    /// The called contract's own address.
    pub self_address: Address,
}

/// A deferred effect emitted by an entrypoint.
///
/// Operations execute in queue order after the entrypoint returns. They
/// are never executed synchronously, and their success is only observable
/// at settlement time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operation {
    /// Send currency from the contract's balance.
    Send { to: Address, amount: Decimal },
    /// Invoke the token registry's `transfer` entrypoint.
    RegistryTransfer {
        registry: Address,
        batches: Vec<TransferBatch>,
    },
}

/// Append-only queue of deferred operations for one call.
#[derive(Debug, Default)]
pub struct OperationQueue {
    ops: Vec<Operation>,
}

impl OperationQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue a currency send from the contract.
    pub fn send(&mut self, to: Address, amount: Decimal) {
        self.ops.push(Operation::Send { to, amount });
    }

    /// Enqueue a registry transfer call.
    pub fn registry_transfer(&mut self, registry: Address, batches: Vec<TransferBatch>) {
        self.ops.push(Operation::RegistryTransfer { registry, batches });
    }

    /// Take the queued operations, leaving the queue empty.
    pub fn drain(&mut self) -> Vec<Operation> {
        std::mem::take(&mut self.ops)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Peek at the queued operations without draining them.
    #[must_use]
    pub fn as_slice(&self) -> &[Operation] {
        &self.ops
    }
}
