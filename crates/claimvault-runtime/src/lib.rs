//! # claimvault-runtime
//!
//! **Execution plane**: the transactional sandbox that gives every
//! entrypoint call all-or-nothing semantics.
//!
//! ## Execution model
//!
//! Each call runs to completion as a single atomic step — no intra-call
//! concurrency, no suspension. Entrypoints emit deferred [`Operation`]s
//! instead of performing effects; the sandbox executes the queue only
//! after the entrypoint returns, and if any queued operation is rejected
//! it restores the pre-call snapshot of contract state, currency balances,
//! and registry state. Exactly one of {commit-all, revert-all} is ever
//! observable.
//!
//! ```text
//! snapshot → credit attached → run entrypoint → drain queue
//!     ├─ all accepted → commit
//!     └─ anything rejected → restore snapshot, surface the error
//! ```
//!
//! Calls are serialized by construction (`&mut self`); ordering between
//! calls from different senders is whatever order they are submitted in.
//!
//! [`Operation`]: claimvault_types::Operation

pub mod registry;
pub mod sandbox;

pub use registry::{MockTokenRegistry, TokenRegistry};
pub use sandbox::{ContractHost, Sandbox};
