//! # mockview-core
//!
//! Core types for mockview, a visual verification tool that drives a
//! headless browser against a web application whose backend is mocked at
//! the network layer.
//!
//! ## Core concepts
//!
//! - A **mock rule** substitutes a canned HTTP response for any request
//!   whose URL matches a glob pattern
//! - **Seeded client state** is key-value data written into the page's
//!   localStorage to simulate an authenticated user
//! - A **scenario** is one independent page-verification workflow:
//!   navigate, wait for expected text, optionally click, screenshot

mod config;
mod error;
mod mock;
mod scenario;
mod state;

pub use config::VerifyConfig;
pub use error::{Result, VerifyError};
pub use mock::{MockRegistry, MockRule};
pub use scenario::{Scenario, ScenarioOutcome, ScenarioStep};
pub use state::{SeededState, UserProfile};
