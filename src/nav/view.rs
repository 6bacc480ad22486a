use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A named content page shown in the detail panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Welcome,
    About,
    Experience,
    Projects,
    Skills,
    Contact,
    Links,
}

/// Returned when a string does not name any [`View`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown view: {0}")]
pub struct UnknownView(pub String);

impl View {
    /// Every view, welcome first.
    pub const ALL: [View; 7] = [
        View::Welcome,
        View::About,
        View::Experience,
        View::Projects,
        View::Skills,
        View::Contact,
        View::Links,
    ];

    pub fn name(self) -> &'static str {
        match self {
            View::Welcome => "welcome",
            View::About => "about",
            View::Experience => "experience",
            View::Projects => "projects",
            View::Skills => "skills",
            View::Contact => "contact",
            View::Links => "links",
        }
    }

    /// Title shown in the detail panel border.
    pub fn title(self) -> &'static str {
        match self {
            View::Welcome => "Welcome",
            View::About => "About Me",
            View::Experience => "Experience",
            View::Projects => "Projects",
            View::Skills => "Skills & Technologies",
            View::Contact => "Contact",
            View::Links => "Links",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for View {
    type Err = UnknownView;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        View::ALL
            .iter()
            .copied()
            .find(|v| v.name().eq_ignore_ascii_case(needle))
            .ok_or_else(|| UnknownView(needle.to_string()))
    }
}
