//! Browser automation layer for mockview
//!
//! Drives Chrome/Chromium over the Chrome DevTools Protocol and provides
//! the four capabilities the verification runner needs:
//!
//! - **Session management**: launch a scoped headless browser ([`session`])
//! - **Request mocking**: fulfill matching requests with canned responses
//!   instead of hitting the network ([`intercept`])
//! - **State seeding**: write localStorage entries simulating an
//!   authenticated user ([`storage`])
//! - **Screenshots**: full-page PNG capture to disk ([`screenshot`])
//!
//! The [`PageDriver`] trait is the seam between the runner's scenario
//! logic and the real browser; scenario execution is tested against a
//! scripted driver, not a live Chrome.
//!
//! Requires a Chrome or Chromium binary on the host.

pub mod driver;
pub mod intercept;
pub mod screenshot;
pub mod session;
pub mod storage;

pub use driver::PageDriver;
pub use intercept::install_mocks;
pub use screenshot::save_full_page;
pub use session::{BrowserConfig, BrowserSession};
pub use storage::{read_local_storage, seed_local_storage};
