use std::time::Duration;

use anyhow::{anyhow, Result};
use console::style;
use dialoguer::Input;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use crate::api::webhook::WebhookClient;
use crate::catalog::{placeholder, ACTION_CARDS, FORM_LINKS};
use crate::cli::args::{IoArgs, RuntimeArgs};
use crate::cli::shell::{ShellCommand, ShellInput, HELP};
use crate::config::settings::Settings;
use crate::session::history::Message;
use crate::session::state::{ChatState, Event};
use crate::utils::format;

enum ShellExit {
    Logout,
    Quit,
}

/// Applies per-run flag overrides on top of the loaded settings.
pub fn apply_overrides(mut settings: Settings, runtime: &RuntimeArgs) -> Settings {
    if let Some(url) = runtime.webhook_url.as_deref().filter(|u| !u.trim().is_empty()) {
        settings.webhook_url = url.trim().to_string();
    }
    if let Some(secs) = runtime.timeout_secs {
        settings.timeout_secs = secs;
    }
    if let Some(user) = runtime.user.as_deref().filter(|u| !u.trim().is_empty()) {
        settings.user_name = Some(user.trim().to_string());
    }
    settings
}

fn build_client(settings: &Settings) -> Result<WebhookClient> {
    WebhookClient::new(&settings.webhook_url, settings.timeout())
}

pub async fn handle_interactive(settings: &Settings) -> Result<()> {
    let client = build_client(settings)?;
    info!(endpoint = client.endpoint(), timeout_secs = settings.timeout_secs, "chat shell starting");
    println!("{}", style("LabFlow. Type /help for commands, /quit to exit.").cyan());

    let mut preset = settings.user_name.clone();
    loop {
        let name = match preset.take() {
            Some(name) => name,
            None => prompt_name()?,
        };
        let state = ChatState::new().reduce(Event::Login { name });
        let Some(user) = state.user() else { continue };
        info!(user = %user.name, "logged in");
        print_home(&user.name);

        match chat_loop(state, &client, settings).await? {
            ShellExit::Logout => println!("{}", format::warn("Logged out.")),
            ShellExit::Quit => return Ok(()),
        }
    }
}

fn prompt_name() -> Result<String> {
    let name: String = Input::new()
        .with_prompt("Enter your full name")
        .validate_with(|s: &String| if s.trim().is_empty() { Err("Name is required") } else { Ok(()) })
        .interact_text()?;
    Ok(name)
}

fn print_home(name: &str) {
    println!();
    println!("{}", style(format!("How can I help you, {}?", name)).bold());
    for card in ACTION_CARDS {
        println!("  {} {} - {}", card.icon.glyph(), style(card.title).bold(), card.description);
    }
    println!();
}

async fn chat_loop(mut state: ChatState, client: &WebhookClient, settings: &Settings) -> Result<ShellExit> {
    let mut hint = 0usize;
    loop {
        if state.visible_messages().is_empty() {
            println!("{}", style(format!("e.g. {}", placeholder(hint))).dim());
            hint += 1;
        }
        let line: String = Input::new().with_prompt("You").allow_empty(true).interact_text()?;

        match ShellInput::parse(&line) {
            ShellInput::Empty => continue,
            ShellInput::Text(text) => {
                state.apply(Event::Submit { text });
                for reply in dispatch(&mut state, client, &settings.assistant_name).await {
                    println!("{}\n", format::message(&reply, &settings.assistant_name));
                }
            }
            ShellInput::Command(cmd) => match cmd {
                ShellCommand::New => {
                    state.apply(Event::NewChat);
                    if let Some(user) = state.user() {
                        print_home(&user.name);
                    }
                }
                ShellCommand::Sessions => print_sessions(&state),
                ShellCommand::Load(n) => {
                    let id = state.sessions().sessions().get(n - 1).map(|s| s.id.clone());
                    match id {
                        Some(id) => {
                            state.apply(Event::LoadSession { id });
                            for msg in state.visible_messages() {
                                println!("{}\n", format::message(msg, &settings.assistant_name));
                            }
                        }
                        None => println!("{}", format::warn(&format!("No chat number {}", n))),
                    }
                }
                ShellCommand::Forms => println!("{}", format::form_list(FORM_LINKS)),
                ShellCommand::Dashboard => println!("{}", format::dashboard_link()),
                ShellCommand::Help => println!("{}", HELP),
                ShellCommand::Logout => {
                    state.apply(Event::Logout);
                    return Ok(ShellExit::Logout);
                }
                ShellCommand::Quit => return Ok(ShellExit::Quit),
                ShellCommand::Unknown(raw) => {
                    println!("{}", format::warn(&format!("Unknown command {}. Try /help", raw)))
                }
            },
        }
    }
}

fn print_sessions(state: &ChatState) {
    let sessions = state.sessions().sessions();
    if sessions.is_empty() {
        println!("{}", style("No recent chats").dim());
        return;
    }
    for (i, session) in sessions.iter().enumerate() {
        let active = state.current_session_id() == Some(session.id.as_str());
        println!("{}", format::session_line(i + 1, session, active));
    }
}

/// Performs the request left pending by a submit and records its outcome.
async fn dispatch(state: &mut ChatState, client: &WebhookClient, assistant_name: &str) -> Vec<Message> {
    let Some(pending) = state.pending().cloned() else {
        return Vec::new();
    };
    let pb = ProgressBar::new_spinner().with_message(format!("{} is thinking...", assistant_name));
    pb.set_style(
        ProgressStyle::with_template("{spinner} {msg}").unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.enable_steady_tick(Duration::from_millis(100));
    let messages = client.send_message(&pending.history, &pending.text, &pending.user_name).await;
    pb.finish_and_clear();
    state.apply(Event::Reply { session_id: pending.session_id, messages: messages.clone() });
    messages
}

pub async fn handle_chat(settings: &Settings, prompt: Option<String>, io: &IoArgs) -> Result<()> {
    // Prefer file input if provided
    let prompt = match (&io.input_file, &prompt) {
        (Some(path), _) => crate::utils::io::read_prompt(path)?,
        (None, Some(p)) if !p.trim().is_empty() => p.to_string(),
        _ => return Err(anyhow!("Prompt is empty. Provide text or use interactive mode.")),
    };
    if prompt.trim().is_empty() {
        return Err(anyhow!("Prompt is empty."));
    }
    let name = settings
        .user_name
        .clone()
        .ok_or_else(|| anyhow!("No user name. Pass --user <name> or run `labflow config set user <name>`"))?;

    let client = build_client(settings)?;
    let mut state = ChatState::new().reduce(Event::Login { name });
    state.apply(Event::Submit { text: prompt });
    let replies = dispatch(&mut state, &client, &settings.assistant_name).await;

    if let Some(out) = &io.output_file {
        let texts: Vec<String> = replies.iter().map(|m| m.content.clone()).collect();
        crate::utils::io::write_replies(out, &texts)?;
    }
    for reply in &replies {
        println!("{}", reply.content);
    }
    Ok(())
}

pub async fn handle_config_list(settings: &Settings) -> Result<()> {
    println!("webhook_url: {}", settings.webhook_url);
    println!("timeout_secs: {}", settings.timeout_secs);
    println!("user_name: {}", settings.user_name.as_deref().unwrap_or("(not set)"));
    println!("assistant_name: {}", settings.assistant_name);
    Ok(())
}

pub async fn handle_config_set(config_path: Option<&std::path::Path>, key: &str, value: &str) -> Result<()> {
    // Reload without env or flag overrides so they are not persisted.
    let mut stored = Settings::load_from_file(config_path)?;
    stored.set(key, value)?;
    stored.save_with(config_path)?;
    println!("{}", format::success(&format!("Set {}", key)));
    Ok(())
}

pub async fn handle_config_init(config_path: Option<&std::path::Path>, force: bool) -> Result<()> {
    let path = Settings::init(force, config_path)?;
    println!("{}", format::success(&format!("Wrote {}", path.display())));
    Ok(())
}

pub async fn handle_forms() -> Result<()> {
    println!("{}", format::form_list(FORM_LINKS));
    Ok(())
}

pub async fn handle_dashboard() -> Result<()> {
    println!("{}", format::dashboard_link());
    Ok(())
}
