//! lisco-portfolio - an interactive terminal-style portfolio
//!
//! Visitors type commands such as `about` or `projects` and the detail
//! panel shows the matching page, with back and home controls to retrace
//! their steps.

pub mod command;
pub mod logging;
pub mod nav;
pub mod profile;
pub mod ui;
