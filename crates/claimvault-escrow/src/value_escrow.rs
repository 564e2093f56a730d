//! Balance-table escrow contract: `deposit` and `refund` entrypoints.

use claimvault_types::{CallEnv, OperationQueue, Result};
use serde::{Deserialize, Serialize};

use crate::value_ledger::ValueLedger;

/// Escrow contract state for the balance-table variant.
///
/// Entrypoints take a [`CallEnv`] and an [`OperationQueue`]; all currency
/// movement out of the contract is deferred through the queue. The
/// entrypoints assume transactional execution — on error the runtime
/// discards every mutation they made.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ValueEscrow {
    claims: ValueLedger,
}

impl ValueEscrow {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Payable entrypoint: hold the attached amount as the sender's claim.
    ///
    /// # Errors
    /// - `InvalidAmount` if nothing (or a non-positive amount) is attached
    /// - `DuplicateClaim` if the sender already has a pending claim
    pub fn deposit(&mut self, env: &CallEnv, _ops: &mut OperationQueue) -> Result<()> {
        self.claims.insert(env.sender, env.attached)?;
        tracing::debug!(sender = %env.sender, amount = %env.attached, "claim deposited");
        Ok(())
    }

    /// Return the sender's escrowed value to them.
    ///
    /// Removes the claim and enqueues the payout; both commit together or
    /// not at all.
    ///
    /// # Errors
    /// Returns `NoPendingClaim` if the sender has no claim.
    pub fn refund(&mut self, env: &CallEnv, ops: &mut OperationQueue) -> Result<()> {
        let claim = self.claims.remove(env.sender)?;
        ops.send(claim.owner, claim.amount);
        tracing::debug!(owner = %claim.owner, amount = %claim.amount, "claim refunded");
        Ok(())
    }

    /// Read access to the underlying ledger.
    #[must_use]
    pub fn claims(&self) -> &ValueLedger {
        &self.claims
    }

    /// Mutable access for the redemption controller, which removes claims
    /// through the same exactly-once ledger path.
    pub fn claims_mut(&mut self) -> &mut ValueLedger {
        &mut self.claims
    }
}
