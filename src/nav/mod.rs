//! # Navigation Module
//!
//! Keeps track of which view the detail panel shows and how the visitor got
//! there, so the back and home controls can replay earlier views.
//!
//! ## State Machine
//!
//! ```text
//!   goto(v)     push current, current = v
//!   go_back()   current = pop()          (no push)
//!   go_home()   history = [], current = welcome   (no push)
//! ```
//!
//! `welcome` is the root. The back control is enabled while history is
//! non-empty; the home control is enabled while the current view is not
//! `welcome`.

pub mod navigator;
pub mod view;

pub use navigator::Navigator;
pub use view::{UnknownView, View};
