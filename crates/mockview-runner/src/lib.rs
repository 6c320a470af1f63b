//! Verification scenarios and run orchestration for mockview
//!
//! [`fixtures`] holds the canned backend responses, the seeded user state,
//! and the two built-in scenarios (AI chat and direct messages).
//! [`runner`] executes them: one browser session, mocks installed up
//! front, then each scenario run independently so a failure in one never
//! stops the next.

pub mod fixtures;
pub mod runner;

pub use runner::{execute_scenario, RunReport, VerificationRunner};
