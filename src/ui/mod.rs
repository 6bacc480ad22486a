//! # UI Module
//!
//! Terminal user interface for the portfolio.
//!
//! ## Components
//!
//! - [`App`] - Application state: prompt input, detail panel, navigation
//! - [`mod@render`] - Drawing the frame
//! - [`detail`] - Content for each view and notice
//! - [`boot`] / [`typing`] - Timed output, both driven by [`schedule`]
//!
//! ## Layout
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │                    Header                        │
//! ├─────────────────────┬───────────────────────────┤
//! │                     │  ← back   ⌂ home          │
//! │   Terminal          │                           │
//! │   (boot output,     │      Detail Panel         │
//! │    prompt)          │   (current view or        │
//! │                     │    notice)                │
//! ├─────────────────────┴───────────────────────────┤
//! │                    Footer                        │
//! └─────────────────────────────────────────────────┘
//! ```

pub mod app;
pub mod boot;
pub mod config;
pub mod detail;
pub mod render;
pub mod schedule;
pub mod theme;
pub mod typing;

pub use app::App;
pub use render::render;
