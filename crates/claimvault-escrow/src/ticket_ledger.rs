//! Capability-ticket claim ledger.
//!
//! Unlike [`ValueLedger`](crate::ValueLedger), this ledger exposes no
//! check-then-set surface at all: the only mutators are [`swap`] and
//! [`take`], each an indivisible get-and-update. Whatever ticket a
//! transition displaces is handed back to the caller, so the ledger can
//! never duplicate a ticket or silently drop one.
//!
//! [`swap`]: TicketLedger::swap
//! [`take`]: TicketLedger::take

use std::collections::HashMap;

use claimvault_types::{Address, Ticket};
use serde::{Deserialize, Serialize};

/// Persistent mapping from claimant address to a held [`Ticket`].
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct TicketLedger {
    tickets: HashMap<Address, Ticket>,
}

impl TicketLedger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `ticket` at `owner`, returning whatever was held there before.
    ///
    /// The caller decides what a displaced prior ticket means; for escrow
    /// deposits it means `DuplicateClaim` and the whole call reverts.
    #[must_use]
    pub fn swap(&mut self, owner: Address, ticket: Ticket) -> Option<Ticket> {
        self.tickets.insert(owner, ticket)
    }

    /// Remove and return the ticket held for `owner`, if any.
    #[must_use]
    pub fn take(&mut self, owner: Address) -> Option<Ticket> {
        self.tickets.remove(&owner)
    }

    /// Whether `owner` currently holds a ticket.
    #[must_use]
    pub fn contains(&self, owner: &Address) -> bool {
        self.tickets.contains_key(owner)
    }

    /// Number of held tickets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn swap_into_empty_slot_returns_none() {
        let mut ledger = TicketLedger::new();
        let owner = Address::new();
        let issuer = Address::new();

        let prior = ledger.swap(owner, Ticket::mint(issuer, Decimal::ONE));
        assert!(prior.is_none());
        assert!(ledger.contains(&owner));
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn swap_returns_displaced_ticket() {
        let mut ledger = TicketLedger::new();
        let owner = Address::new();
        let issuer = Address::new();

        assert!(ledger.swap(owner, Ticket::mint(issuer, Decimal::ONE)).is_none());
        let displaced = ledger
            .swap(owner, Ticket::mint(issuer, Decimal::new(2, 0)))
            .expect("prior ticket must be handed back");
        assert_eq!(displaced.read().amount, Decimal::ONE);
    }

    #[test]
    fn snapshot_roundtrip_preserves_held_ticket() {
        let mut ledger = TicketLedger::new();
        let owner = Address::new();
        let issuer = Address::new();
        let _ = ledger.swap(owner, Ticket::mint(issuer, Decimal::new(5, 0)));

        // The runtime's rollback path restores ledgers from their
        // serialized snapshot; the held ticket must survive intact.
        let snapshot = serde_json::to_value(&ledger).unwrap();
        let mut restored: TicketLedger = serde_json::from_value(snapshot).unwrap();

        let original = ledger.take(owner).unwrap().read();
        let recovered = restored.take(owner).unwrap().read();
        assert_eq!(original, recovered);
    }

    #[test]
    fn take_empties_the_slot() {
        let mut ledger = TicketLedger::new();
        let owner = Address::new();
        let issuer = Address::new();

        assert!(ledger.take(owner).is_none());

        let _ = ledger.swap(owner, Ticket::mint(issuer, Decimal::new(3, 0)));
        let ticket = ledger.take(owner).expect("ticket present");
        assert_eq!(ticket.read().amount, Decimal::new(3, 0));

        assert!(ledger.take(owner).is_none());
        assert!(ledger.is_empty());
    }
}
