//! Integration Tests Module
//!
//! End-to-end coverage through the public API: vault document lifecycle,
//! backend parity between the vault and session stores, and the assistant
//! directive protocol against fake shell delegates.

// Vault store document lifecycle tests
mod vault_store_test;

// Backend parity tests (vault vs. session store)
mod session_store_test;

// Assistant directive protocol tests
mod assistant_test;
