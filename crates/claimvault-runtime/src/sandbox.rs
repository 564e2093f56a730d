//! The atomic call sandbox.
//!
//! [`Sandbox::call`] is the only way effects enter the system. It stages a
//! snapshot of everything a call may touch (contract state, currency
//! balances, registry), runs the entrypoint, then executes the deferred
//! operation queue. Any error — a precondition failure inside the
//! entrypoint, a contract overdraw, or a registry rejection — restores the
//! snapshot, so interim state is never observable.
//!
//! Contract state crosses the snapshot boundary as a `serde_json::Value`
//! rather than via `Clone`: move-only values such as tickets deliberately
//! do not implement `Clone`, and the serialized form is the same one a
//! persistent store would hold.

use std::collections::HashMap;

use claimvault_types::{
    Address, CallEnv, ClaimvaultError, Operation, OperationQueue, Result,
};
use rust_decimal::Decimal;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::registry::TokenRegistry;

/// A deployed contract instance: an address plus its state.
#[derive(Debug)]
pub struct ContractHost<S> {
    /// The contract's own address.
    pub address: Address,
    /// The contract's persistent state.
    pub state: S,
}

impl<S> ContractHost<S> {
    /// Deploy `state` at a fresh address.
    #[must_use]
    pub fn deploy(state: S) -> Self {
        Self {
            address: Address::new(),
            state,
        }
    }
}

/// Serializes entrypoint calls and owns the shared mutable resources:
/// currency balances and the token registry instance.
#[derive(Debug)]
pub struct Sandbox<R: TokenRegistry + Clone> {
    balances: HashMap<Address, Decimal>,
    registry: R,
    registry_address: Address,
}

impl<R: TokenRegistry + Clone> Sandbox<R> {
    /// Create a sandbox hosting `registry` at `registry_address`.
    #[must_use]
    pub fn new(registry_address: Address, registry: R) -> Self {
        Self {
            balances: HashMap::new(),
            registry,
            registry_address,
        }
    }

    /// Credit `amount` to `who` out of thin air (test setup faucet).
    pub fn fund(&mut self, who: Address, amount: Decimal) {
        *self.balances.entry(who).or_insert(Decimal::ZERO) += amount;
    }

    /// Current currency balance of `who`.
    #[must_use]
    pub fn balance_of(&self, who: Address) -> Decimal {
        self.balances.get(&who).copied().unwrap_or(Decimal::ZERO)
    }

    /// Read access to the hosted registry.
    #[must_use]
    pub fn registry(&self) -> &R {
        &self.registry
    }

    /// Mutable access to the hosted registry (test setup).
    pub fn registry_mut(&mut self) -> &mut R {
        &mut self.registry
    }

    /// The address the registry is hosted at.
    #[must_use]
    pub fn registry_address(&self) -> Address {
        self.registry_address
    }

    /// Execute one entrypoint call atomically.
    ///
    /// `attached` currency moves from `sender` to the contract before the
    /// entrypoint runs; the entrypoint sees it in [`CallEnv::attached`].
    /// After the entrypoint returns, the queued operations execute in
    /// order. On any failure the pre-call snapshot is restored and the
    /// error surfaced.
    ///
    /// # Errors
    /// - [`ClaimvaultError::InsufficientBalance`] if `sender` cannot cover
    ///   `attached` (checked before any effect)
    /// - whatever the entrypoint or a queued operation fails with
    pub fn call<S, F>(
        &mut self,
        host: &mut ContractHost<S>,
        sender: Address,
        attached: Decimal,
        entry: F,
    ) -> Result<()>
    where
        S: Serialize + DeserializeOwned,
        F: FnOnce(&mut S, &CallEnv, &mut OperationQueue) -> Result<()>,
    {
        if attached < Decimal::ZERO {
            return Err(ClaimvaultError::InvalidAmount { amount: attached });
        }
        let available = self.balance_of(sender);
        if available < attached {
            return Err(ClaimvaultError::InsufficientBalance {
                needed: attached,
                available,
            });
        }

        // Stage: snapshot everything this call may touch.
        let state_snapshot = serde_json::to_value(&host.state)?;
        let balance_snapshot = self.balances.clone();
        let registry_snapshot = self.registry.clone();

        self.move_currency(sender, host.address, attached);

        let env = CallEnv {
            sender,
            attached,
            self_address: host.address,
        };
        let mut ops = OperationQueue::new();

        let outcome = entry(&mut host.state, &env, &mut ops)
            .and_then(|()| self.execute_queue(host.address, ops.drain()));

        if let Err(err) = outcome {
            self.balances = balance_snapshot;
            self.registry = registry_snapshot;
            host.state = serde_json::from_value(state_snapshot)?;
            tracing::debug!(contract = %host.address, %sender, error = %err, "call rolled back");
            return Err(err);
        }

        tracing::debug!(contract = %host.address, %sender, %attached, "call committed");
        Ok(())
    }

    /// Execute the deferred operations emitted by a call, in order.
    fn execute_queue(&mut self, contract: Address, ops: Vec<Operation>) -> Result<()> {
        for op in ops {
            match op {
                Operation::Send { to, amount } => {
                    let held = self.balance_of(contract);
                    if held < amount {
                        return Err(ClaimvaultError::Internal(format!(
                            "contract overdraw: sending {amount}, holding {held}"
                        )));
                    }
                    self.move_currency(contract, to, amount);
                }
                Operation::RegistryTransfer { registry, batches } => {
                    if registry != self.registry_address {
                        return Err(ClaimvaultError::ExternalCallRejected {
                            reason: format!("no transfer entrypoint at {registry}"),
                        });
                    }
                    self.registry.transfer(&batches)?;
                }
            }
        }
        Ok(())
    }

    fn move_currency(&mut self, from: Address, to: Address, amount: Decimal) {
        if amount.is_zero() {
            return;
        }
        *self.balances.entry(from).or_insert(Decimal::ZERO) -= amount;
        *self.balances.entry(to).or_insert(Decimal::ZERO) += amount;
    }
}
