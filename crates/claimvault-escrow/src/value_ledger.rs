//! Balance-table claim ledger.
//!
//! One [`ValueClaim`] per owner, inserted with a presence check and
//! removed exactly once at refund or redemption.

use std::collections::HashMap;

use claimvault_types::{Address, ClaimvaultError, Result, ValueClaim};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Persistent mapping from claimant address to held value.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ValueLedger {
    claims: HashMap<Address, ValueClaim>,
}

impl ValueLedger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new claim for `owner`.
    ///
    /// # Errors
    /// - [`ClaimvaultError::InvalidAmount`] if `amount` is not strictly positive
    /// - [`ClaimvaultError::DuplicateClaim`] if `owner` already has a claim
    pub fn insert(&mut self, owner: Address, amount: Decimal) -> Result<()> {
        if amount <= Decimal::ZERO {
            return Err(ClaimvaultError::InvalidAmount { amount });
        }
        if self.claims.contains_key(&owner) {
            return Err(ClaimvaultError::DuplicateClaim(owner));
        }
        self.claims.insert(owner, ValueClaim::new(owner, amount));
        Ok(())
    }

    /// Remove and return the claim held for `owner`.
    ///
    /// # Errors
    /// Returns [`ClaimvaultError::NoPendingClaim`] if `owner` has no claim.
    pub fn remove(&mut self, owner: Address) -> Result<ValueClaim> {
        self.claims
            .remove(&owner)
            .ok_or(ClaimvaultError::NoPendingClaim(owner))
    }

    /// Look at the claim held for `owner`, if any.
    #[must_use]
    pub fn get(&self, owner: &Address) -> Option<&ValueClaim> {
        self.claims.get(owner)
    }

    /// Whether `owner` currently has a pending claim.
    #[must_use]
    pub fn contains(&self, owner: &Address) -> bool {
        self.claims.contains_key(owner)
    }

    /// Number of pending claims.
    #[must_use]
    pub fn len(&self) -> usize {
        self.claims.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.claims.is_empty()
    }

    /// Sum of all escrowed value. Useful for auditing against the
    /// contract's actual currency balance.
    #[must_use]
    pub fn total_held(&self) -> Decimal {
        self.claims.values().map(|c| c.amount).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_get() {
        let mut ledger = ValueLedger::new();
        let owner = Address::new();
        ledger.insert(owner, Decimal::new(5, 0)).unwrap();

        let claim = ledger.get(&owner).unwrap();
        assert_eq!(claim.owner, owner);
        assert_eq!(claim.amount, Decimal::new(5, 0));
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn insert_zero_amount_rejected() {
        let mut ledger = ValueLedger::new();
        let err = ledger.insert(Address::new(), Decimal::ZERO).unwrap_err();
        assert!(matches!(err, ClaimvaultError::InvalidAmount { .. }));
        assert!(ledger.is_empty());
    }

    #[test]
    fn insert_negative_amount_rejected() {
        let mut ledger = ValueLedger::new();
        let err = ledger
            .insert(Address::new(), Decimal::new(-1, 0))
            .unwrap_err();
        assert!(matches!(err, ClaimvaultError::InvalidAmount { .. }));
    }

    #[test]
    fn second_insert_is_duplicate() {
        let mut ledger = ValueLedger::new();
        let owner = Address::new();
        ledger.insert(owner, Decimal::new(5, 0)).unwrap();

        let err = ledger.insert(owner, Decimal::ONE).unwrap_err();
        assert!(matches!(err, ClaimvaultError::DuplicateClaim(_)));

        // The first claim is retained untouched.
        assert_eq!(ledger.get(&owner).unwrap().amount, Decimal::new(5, 0));
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn remove_returns_claim_once() {
        let mut ledger = ValueLedger::new();
        let owner = Address::new();
        ledger.insert(owner, Decimal::ONE).unwrap();

        let claim = ledger.remove(owner).unwrap();
        assert_eq!(claim.amount, Decimal::ONE);
        assert!(!ledger.contains(&owner));

        let err = ledger.remove(owner).unwrap_err();
        assert!(matches!(err, ClaimvaultError::NoPendingClaim(_)));
    }

    #[test]
    fn ledger_serde_roundtrip() {
        let mut ledger = ValueLedger::new();
        let owner = Address::new();
        ledger.insert(owner, Decimal::new(5, 0)).unwrap();

        let json = serde_json::to_string(&ledger).unwrap();
        let back: ValueLedger = serde_json::from_str(&json).unwrap();
        assert_eq!(back.len(), 1);
        assert_eq!(back.get(&owner).unwrap().amount, Decimal::new(5, 0));
    }

    #[test]
    fn total_held_sums_claims() {
        let mut ledger = ValueLedger::new();
        ledger.insert(Address::new(), Decimal::new(3, 0)).unwrap();
        ledger.insert(Address::new(), Decimal::new(4, 0)).unwrap();
        assert_eq!(ledger.total_held(), Decimal::new(7, 0));
    }
}
