//! Test utilities for the Holocron workspace.
//!
//! Tests are set up in two phases. Phase 1 declares the environment with
//! [`TestBuilder`]: which tables to create (or whether to run the real migrations) and
//! which fixtures to insert. Phase 2 works with the resulting [`TestContext`], an
//! in-memory SQLite database plus fixture helpers for inserting further records.

pub mod builder;
pub mod context;
pub mod error;
pub mod fixtures;
pub mod model;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{fixtures::factory, TestBuilder, TestContext, TestError};
}
