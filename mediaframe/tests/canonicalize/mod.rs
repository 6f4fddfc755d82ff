//! URL canonicalization tests
//!
//! Convergence of every accepted URL shape, pass-through of unknown URLs and
//! idempotence over generated input.

mod idempotence;
mod providers;
