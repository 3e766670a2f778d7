//! Test utilities shared by the notedays crates.
//!
//! - [`VaultFixture`]: tempdir-backed vault builder
//! - [`TestWorld`]: fixture vault plus a pre-configured CLI command

pub mod fixtures;
pub mod world;

pub use fixtures::VaultFixture;
pub use world::TestWorld;
