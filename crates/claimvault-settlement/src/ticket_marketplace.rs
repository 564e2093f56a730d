//! Marketplace contract over the capability-ticket escrow.

use claimvault_escrow::TicketEscrow;
use claimvault_types::{
    Address, CallEnv, ClaimvaultError, ItemId, MarketplaceConfig, OperationQueue, Result,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{access, adapter};

/// Capability-ticket marketplace: an embedded [`TicketEscrow`] plus the
/// administrator-gated `redeem_ticket` entrypoint.
///
/// Semantically stronger than [`ValueMarketplace`]: the escrowed value is
/// the ticket itself, so the ledger entry and the reserved value cannot
/// drift apart.
///
/// [`ValueMarketplace`]: crate::ValueMarketplace
#[derive(Debug, Serialize, Deserialize)]
pub struct TicketMarketplace {
    escrow: TicketEscrow,
    config: MarketplaceConfig,
}

impl TicketMarketplace {
    /// Deploy with an immutable configuration.
    #[must_use]
    pub fn new(config: MarketplaceConfig) -> Self {
        Self {
            escrow: TicketEscrow::new(),
            config,
        }
    }

    /// Payable entrypoint: mint and hold a ticket for the attached amount.
    pub fn purchase_claim(&mut self, env: &CallEnv, ops: &mut OperationQueue) -> Result<()> {
        self.escrow.purchase_claim(env, ops)
    }

    /// Return the sender's escrowed value by consuming their ticket.
    pub fn refund_claim(&mut self, env: &CallEnv, ops: &mut OperationQueue) -> Result<()> {
        self.escrow.refund_claim(env, ops)
    }

    /// Administrator-only: consume `to`'s ticket, release its value to the
    /// administrator, and enqueue the transfer of `ids` from the caller
    /// to `to`.
    ///
    /// The ticket is taken and destructively read before the declared
    /// amount is validated; the call-level rollback restores it on any
    /// failure.
    ///
    /// # Errors
    /// - `Unauthorized` unless the caller is the configured administrator
    /// - `NoPendingClaim` if `to` holds no ticket
    /// - `AmountMismatch` if `amount` differs from the ticket's payload
    pub fn redeem_ticket(
        &mut self,
        env: &CallEnv,
        ops: &mut OperationQueue,
        to: Address,
        ids: &[ItemId],
        amount: Decimal,
    ) -> Result<()> {
        access::require_administrator(env.sender, &self.config)?;

        let ticket = self
            .escrow
            .tickets_mut()
            .take(to)
            .ok_or(ClaimvaultError::NoPendingClaim(to))?;
        let content = ticket.read();
        if content.amount != amount {
            return Err(ClaimvaultError::AmountMismatch {
                declared: amount,
                held: content.amount,
            });
        }

        ops.send(self.config.administrator, content.amount);
        adapter::enqueue_transfer(ops, self.config.token_registry, env.sender, to, ids);

        tracing::info!(
            claimant = %to,
            amount = %content.amount,
            nonce = content.nonce,
            items = ids.len(),
            "ticket redeemed"
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
    pub fn escrow(&self) -> &TicketEscrow {
        &self.escrow
    }
}
