//! Capability-ticket escrow contract: `purchase_claim` and `refund_claim`.
//!
//! The deposit path deliberately mints the new ticket *before* it learns
//! whether a prior one existed: the ledger access is a single swap, not a
//! check followed by a set. On `DuplicateClaim` the freshly minted ticket
//! is abandoned along with the rest of the call's effects — it never
//! enters circulation because the surrounding call reverts wholesale.

use claimvault_types::{CallEnv, ClaimvaultError, OperationQueue, Result, Ticket};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ticket_ledger::TicketLedger;

/// Escrow contract state for the capability-ticket variant.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct TicketEscrow {
    tickets: TicketLedger,
}

impl TicketEscrow {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Payable entrypoint: mint a ticket for the attached amount and hold
    /// it as the sender's claim.
    ///
    /// # Errors
    /// - `InvalidAmount` if the attached amount is not strictly positive
    /// - `DuplicateClaim` if the swap displaced an existing ticket
    pub fn purchase_claim(&mut self, env: &CallEnv, _ops: &mut OperationQueue) -> Result<()> {
        if env.attached <= Decimal::ZERO {
            return Err(ClaimvaultError::InvalidAmount {
                amount: env.attached,
            });
        }
        let ticket = Ticket::mint(env.self_address, env.attached);
        if self.tickets.swap(env.sender, ticket).is_some() {
            // The displaced ticket (the real claim) is restored by the
            // runtime's rollback of this call.
            return Err(ClaimvaultError::DuplicateClaim(env.sender));
        }
        tracing::debug!(sender = %env.sender, amount = %env.attached, "ticket purchased");
        Ok(())
    }

    /// Return the sender's escrowed value by consuming their ticket.
    ///
    /// # Errors
    /// Returns `NoPendingClaim` if the sender holds no ticket.
    pub fn refund_claim(&mut self, env: &CallEnv, ops: &mut OperationQueue) -> Result<()> {
        let ticket = self
            .tickets
            .take(env.sender)
            .ok_or(ClaimvaultError::NoPendingClaim(env.sender))?;
        let content = ticket.read();
        ops.send(env.sender, content.amount);
        tracing::debug!(owner = %env.sender, amount = %content.amount, "ticket refunded");
        Ok(())
    }

    /// Read access to the underlying ledger.
    #[must_use]
    pub fn tickets(&self) -> &TicketLedger {
        &self.tickets
    }

    /// Mutable access for the redemption controller.
    pub fn tickets_mut(&mut self) -> &mut TicketLedger {
        &mut self.tickets
    }
}
