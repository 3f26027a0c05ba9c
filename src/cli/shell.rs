/// A line typed into the interactive shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellInput {
    Empty,
    Text(String),
    Command(ShellCommand),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    New,
    Sessions,
    /// 1-based position in the session list
    Load(usize),
    Forms,
    Dashboard,
    Help,
    Logout,
    Quit,
    Unknown(String),
}

pub const HELP: &str = "\
/new          start a new chat
/sessions     list recent chats
/load <n>     reopen chat number n
/forms        show the inventory forms
/dashboard    show the dashboard link
/logout       log out
/quit         exit";

impl ShellInput {
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Self::Empty;
        }
        let Some(rest) = trimmed.strip_prefix('/') else {
            return Self::Text(line.to_string());
        };
        let mut parts = rest.split_whitespace();
        let name = parts.next().unwrap_or_default().to_ascii_lowercase();
        let cmd = match name.as_str() {
            "new" => ShellCommand::New,
            "sessions" | "history" => ShellCommand::Sessions,
            "load" => match parts.next().and_then(|n| n.parse().ok()) {
                Some(n) if n > 0 => ShellCommand::Load(n),
                _ => ShellCommand::Unknown(trimmed.to_string()),
            },
            "forms" => ShellCommand::Forms,
            "dashboard" => ShellCommand::Dashboard,
            "help" | "?" => ShellCommand::Help,
            "logout" => ShellCommand::Logout,
            "quit" | "exit" => ShellCommand::Quit,
            _ => ShellCommand::Unknown(trimmed.to_string()),
        };
        Self::Command(cmd)
    }
}
