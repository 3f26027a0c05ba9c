use chrono::{DateTime, Local, Utc};
use console::style;

use crate::catalog::{FormLink, DASHBOARD_URL, FORM_LINKS};
use crate::session::history::{ChatSession, Message, MessageKind, Role};

pub fn success(msg: &str) -> String { style(msg).green().to_string() }
pub fn warn(msg: &str) -> String { style(msg).yellow().to_string() }

/// Renders one message for the terminal.
pub fn message(msg: &Message, assistant_name: &str) -> String {
    match msg.kind {
        MessageKind::FormList => form_list(FORM_LINKS),
        MessageKind::DashboardLink => dashboard_link(),
        MessageKind::Text => {
            let label = match msg.role {
                Role::User => style("You".to_string()).bold().to_string(),
                Role::Model => style(assistant_name.to_string()).cyan().bold().to_string(),
                Role::System => style("System".to_string()).dim().to_string(),
            };
            let mut out = format!("{} {}", label, style(clock(msg.timestamp)).dim());
            for line in msg.content.split('\n') {
                out.push_str("\n  ");
                out.push_str(line);
            }
            out
        }
    }
}

pub fn form_list(links: &[FormLink]) -> String {
    let mut out = style("Forms").bold().to_string();
    for link in links {
        out.push_str(&format!(
            "\n  {} {} - {}\n     {}",
            link.icon.glyph(),
            style(link.title).bold(),
            link.description,
            style(link.url).underlined()
        ));
    }
    out
}

pub fn dashboard_link() -> String {
    format!(
        "{}\n  Open the inventory dashboard: {}",
        style("Dashboard").bold(),
        style(DASHBOARD_URL).underlined()
    )
}

/// One line of the session list; `index` is what `/load` takes.
pub fn session_line(index: usize, session: &ChatSession, active: bool) -> String {
    let mark = if active { "*" } else { " " };
    format!(
        "{} {:>2}. {}  {}",
        mark,
        index,
        session.title,
        style(short_date(session.timestamp)).dim()
    )
}

/// `Oct 16` style date in local time.
pub fn short_date(ts: DateTime<Utc>) -> String {
    ts.with_timezone(&Local).format("%b %-d").to_string()
}

fn clock(ts: DateTime<Utc>) -> String {
    ts.with_timezone(&Local).format("%H:%M").to_string()
}
