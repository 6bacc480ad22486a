use crate::nav::View;

/// A command typed at the prompt or picked from a quick link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    About,
    Experience,
    Projects,
    Skills,
    Contact,
    Links,
    Help,
    Clear,
    Sudo,
    Hello,
    Exit,
    Unknown(String),
}

/// Names offered by tab completion, in the order it considers them.
/// `exit` is accepted at the prompt but never completed.
pub const COMPLETION_NAMES: [&str; 11] = [
    "about",
    "experience",
    "projects",
    "skills",
    "contact",
    "links",
    "help",
    "clear",
    "sudo",
    "hello",
    "hi",
];

impl Command {
    /// Parse raw prompt input. Returns `None` for blank input.
    pub fn parse(raw: &str) -> Option<Self> {
        let cmd = raw.trim().to_lowercase();
        if cmd.is_empty() {
            return None;
        }

        Some(match cmd.as_str() {
            "about" => Command::About,
            "experience" => Command::Experience,
            "projects" => Command::Projects,
            "skills" => Command::Skills,
            "contact" => Command::Contact,
            "links" => Command::Links,
            "help" => Command::Help,
            "clear" => Command::Clear,
            "sudo" => Command::Sudo,
            "hello" | "hi" => Command::Hello,
            "exit" => Command::Exit,
            _ => Command::Unknown(cmd),
        })
    }

    /// The view this command navigates to, if any.
    ///
    /// `help` and `clear` both lead to the welcome card.
    pub fn target_view(&self) -> Option<View> {
        match self {
            Command::About => Some(View::About),
            Command::Experience => Some(View::Experience),
            Command::Projects => Some(View::Projects),
            Command::Skills => Some(View::Skills),
            Command::Contact => Some(View::Contact),
            Command::Links => Some(View::Links),
            Command::Help | Command::Clear => Some(View::Welcome),
            Command::Sudo | Command::Hello | Command::Exit | Command::Unknown(_) => None,
        }
    }

    /// The canonical name of the command, or the raw text for unknown input.
    pub fn name(&self) -> &str {
        match self {
            Command::About => "about",
            Command::Experience => "experience",
            Command::Projects => "projects",
            Command::Skills => "skills",
            Command::Contact => "contact",
            Command::Links => "links",
            Command::Help => "help",
            Command::Clear => "clear",
            Command::Sudo => "sudo",
            Command::Hello => "hello",
            Command::Exit => "exit",
            Command::Unknown(raw) => raw,
        }
    }
}
