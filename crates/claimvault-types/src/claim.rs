//! # Claim model — value claims and capability tickets
//!
//! A claim records value held in escrow on behalf of one identity,
//! redeemable by exactly one authorized action. Two representations exist:
//!
//! - [`ValueClaim`]: a plain row in a balance table. The ledger entry and
//!   the reserved value are separate things the escrow must keep in sync.
//! - [`Ticket`]: a non-duplicable capability whose existence *is* the
//!   claim. There is nothing to drift out of sync with.
//!
//! ## Ticket linearity
//!
//! A `Ticket` is move-only: it implements neither `Clone` nor `Copy`, its
//! fields are private, and the only way to learn its amount is
//! [`Ticket::read`], which consumes it. Any function receiving a ticket
//! must either forward it intact or read it exactly once — the type system
//! rules out "both". Serde impls exist solely for the persistence /
//! snapshot boundary; in-memory code never sees two live tickets with the
//! same nonce.

use std::sync::atomic::{AtomicU64, Ordering};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::Address;

/// Monotonic generation counter: every minted ticket gets a unique nonce.
static TICKET_NONCE: AtomicU64 = AtomicU64::new(0);

// ---------------------------------------------------------------------------
// ValueClaim
// ---------------------------------------------------------------------------

/// A balance-table claim: value held in escrow for `owner`.
///
/// Immutable once stored — a claim is never edited in place, only removed
/// wholesale at refund or redemption.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueClaim {
    /// The identity that deposited and may be refunded.
    pub owner: Address,
    /// The escrowed amount. Strictly positive at creation.
    pub amount: Decimal,
}

impl ValueClaim {
    #[must_use]
    pub fn new(owner: Address, amount: Decimal) -> Self {
        Self { owner, amount }
    }
}

// ---------------------------------------------------------------------------
// Ticket
// ---------------------------------------------------------------------------

/// A single-use capability representing one escrowed deposit.
///
/// Minted by the escrow contract when a claimant pays in; destroyed
/// (read) exactly once when the claim is refunded or redeemed.
#[derive(Debug, Serialize, Deserialize)]
pub struct Ticket {
    issuer: Address,
    amount: Decimal,
    quantity: u64,
    nonce: u64,
}

/// The payload recovered by destructively reading a [`Ticket`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketContent {
    /// The contract that minted the ticket.
    pub issuer: Address,
    /// The escrowed amount the ticket stands for.
    pub amount: Decimal,
    /// Always 1 for escrow tickets.
    pub quantity: u64,
    /// The unique generation number assigned at mint.
    pub nonce: u64,
}

impl Ticket {
    /// Mint a fresh ticket carrying `amount`, issued by `issuer`.
    ///
    /// The nonce is drawn from a process-wide monotonic counter, so no two
    /// live tickets ever share one.
    #[must_use]
    pub fn mint(issuer: Address, amount: Decimal) -> Self {
        Self {
            issuer,
            amount,
            quantity: 1,
            nonce: TICKET_NONCE.fetch_add(1, Ordering::Relaxed),
        }
    }

    /// Destructively read the ticket, recovering its payload.
    ///
    /// Consumes `self`: after this call the capability no longer exists.
    #[must_use]
    pub fn read(self) -> TicketContent {
        TicketContent {
            issuer: self.issuer,
            amount: self.amount,
            quantity: self.quantity,
            nonce: self.nonce,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_claim_holds_owner_and_amount() {
        let owner = Address::new();
        let claim = ValueClaim::new(owner, Decimal::new(5, 0));
        assert_eq!(claim.owner, owner);
        assert_eq!(claim.amount, Decimal::new(5, 0));
    }

    #[test]
    fn ticket_read_recovers_payload() {
        let issuer = Address::new();
        let ticket = Ticket::mint(issuer, Decimal::ONE);
        let content = ticket.read();
        assert_eq!(content.issuer, issuer);
        assert_eq!(content.amount, Decimal::ONE);
        assert_eq!(content.quantity, 1);
    }

    #[test]
    fn ticket_nonces_unique() {
        let issuer = Address::new();
        let a = Ticket::mint(issuer, Decimal::ONE).read();
        let b = Ticket::mint(issuer, Decimal::ONE).read();
        assert_ne!(a.nonce, b.nonce);
    }

    #[test]
    fn ticket_serde_preserves_nonce() {
        let ticket = Ticket::mint(Address::new(), Decimal::new(42, 0));
        let json = serde_json::to_string(&ticket).unwrap();
        let restored: Ticket = serde_json::from_str(&json).unwrap();
        let original = ticket.read();
        let roundtripped = restored.read();
        assert_eq!(original, roundtripped);
    }
}
