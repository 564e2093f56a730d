//! Marketplace contract over the balance-table escrow.

use claimvault_escrow::ValueEscrow;
use claimvault_types::{
    Address, CallEnv, ClaimvaultError, ItemId, MarketplaceConfig, OperationQueue, Result,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{access, adapter};

/// Balance-table marketplace: an embedded [`ValueEscrow`] plus the
/// administrator-gated `redeem_funds` entrypoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct ValueMarketplace {
    escrow: ValueEscrow,
    config: MarketplaceConfig,
}

impl ValueMarketplace {
    /// Deploy with an immutable configuration.
    #[must_use]
    pub fn new(config: MarketplaceConfig) -> Self {
        Self {
            escrow: ValueEscrow::new(),
            config,
        }
    }

    /// Payable entrypoint: hold the attached amount as the sender's claim.
    pub fn deposit(&mut self, env: &CallEnv, ops: &mut OperationQueue) -> Result<()> {
        self.escrow.deposit(env, ops)
    }

    /// Return the sender's escrowed value to them.
    pub fn refund(&mut self, env: &CallEnv, ops: &mut OperationQueue) -> Result<()> {
        self.escrow.refund(env, ops)
    }

    /// Administrator-only: release `to`'s claim to the administrator and
    /// enqueue the transfer of `ids` from the caller to `to`.
    ///
    /// The claim is removed before the declared amount is validated; the
    /// call-level rollback restores it on any failure, so no interim state
    /// is ever observable.
    ///
    /// # Errors
    /// - `Unauthorized` unless the caller is the configured administrator
    /// - `NoPendingClaim` if `to` has no claim
    /// - `AmountMismatch` if `amount` differs from the held claim
    pub fn redeem_funds(
        &mut self,
        env: &CallEnv,
        ops: &mut OperationQueue,
        to: Address,
        ids: &[ItemId],
        amount: Decimal,
    ) -> Result<()> {
        access::require_administrator(env.sender, &self.config)?;

        let claim = self.escrow.claims_mut().remove(to)?;
        if claim.amount != amount {
            return Err(ClaimvaultError::AmountMismatch {
                declared: amount,
                held: claim.amount,
            });
        }

        ops.send(self.config.administrator, claim.amount);
        adapter::enqueue_transfer(ops, self.config.token_registry, env.sender, to, ids);

        tracing::info!(
            claimant = %to,
            amount = %claim.amount,
            items = ids.len(),
            "funds redeemed"
        );
        Ok(())
    }

    /// The deployment configuration.
    #[must_use]
    pub fn config(&self) -> &MarketplaceConfig {
        &self.config
    }

    /// Read access to the embedded escrow.
    #[must_use]
    pub fn escrow(&self) -> &ValueEscrow {
        &self.escrow
    }
}
