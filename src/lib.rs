/// All logic related to a single account: balance mutation rules and the
/// append-only transaction history, including the two-account transfer.
pub mod account;

/// Validated bank operations, parsed from raw driver rows and later
/// executed by [`registry`].
pub mod command;

/// The account registry. Owns every [`account::Account`], guards name
/// uniqueness at creation, and is the lookup surface callers use to
/// reach accounts.
pub mod registry;

/// Ideally, this module should exists on its own crate, as a way to
/// bootstrap core logic. However, I want to use it for integration test
/// so I put it here.
pub mod bin_utils;
