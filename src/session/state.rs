//! The chat shell's state container.
//!
//! Everything the shell shows is derived from [`ChatState`], and every change
//! goes through [`ChatState::reduce`]. The network call lives outside: a
//! `Submit` leaves a [`PendingSend`] behind, the caller performs the request
//! and feeds the outcome back as a `Reply`.

use tracing::debug;

use crate::session::history::Message;
use crate::session::manager::SessionStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub name: String,
}

/// A request that has been recorded locally but not yet answered.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingSend {
    /// Session the reply must be written to, fixed at dispatch.
    pub session_id: String,
    /// Visible conversation before the new user turn.
    pub history: Vec<Message>,
    pub text: String,
    pub user_name: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum SendPhase {
    #[default]
    Idle,
    Sending(PendingSend),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Login { name: String },
    Logout,
    Submit { text: String },
    Reply { session_id: String, messages: Vec<Message> },
    NewChat,
    LoadSession { id: String },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChatState {
    user: Option<User>,
    store: SessionStore,
    current_session: Option<String>,
    visible: Vec<Message>,
    phase: SendPhase,
}

impl ChatState {
    pub fn new() -> Self { Self::default() }

    pub fn reduce(mut self, event: Event) -> Self {
        match event {
            Event::Login { name } => {
                let name = name.trim();
                if self.user.is_none() && !name.is_empty() {
                    self.user = Some(User { name: name.to_string() });
                }
                self
            }
            Event::Logout => Self::default(),
            Event::Submit { text } => self.submit(text),
            Event::Reply { session_id, messages } => {
                if self.current_session.as_deref() == Some(session_id.as_str()) {
                    self.visible.extend(messages.iter().cloned());
                } else {
                    debug!(%session_id, "reply recorded into a session that is not displayed");
                }
                self.store.append(&session_id, messages);
                self.phase = SendPhase::Idle;
                self
            }
            Event::NewChat => {
                self.current_session = None;
                self.visible.clear();
                self
            }
            Event::LoadSession { id } => {
                if let Some(session) = self.store.get(&id) {
                    self.visible = session.messages.clone();
                    self.current_session = Some(id);
                }
                self
            }
        }
    }

    /// In-place form of [`ChatState::reduce`] for callers holding `&mut`.
    pub fn apply(&mut self, event: Event) {
        *self = std::mem::take(self).reduce(event);
    }

    fn submit(mut self, text: String) -> Self {
        let Some(user_name) = self.user.as_ref().map(|u| u.name.clone()) else {
            return self;
        };
        if self.is_sending() || text.trim().is_empty() {
            return self;
        }
        let message = Message::user(text.clone());
        let history = self.visible.clone();
        self.visible.push(message.clone());
        let session_id = self.store.record_turn(self.current_session.as_deref(), message);
        self.current_session = Some(session_id.clone());
        debug!(%session_id, history = history.len(), "dispatching turn");
        self.phase = SendPhase::Sending(PendingSend { session_id, history, text, user_name });
        self
    }

    pub fn user(&self) -> Option<&User> { self.user.as_ref() }

    pub fn sessions(&self) -> &SessionStore { &self.store }

    pub fn current_session_id(&self) -> Option<&str> { self.current_session.as_deref() }

    pub fn visible_messages(&self) -> &[Message] { &self.visible }

    pub fn phase(&self) -> &SendPhase { &self.phase }

    pub fn is_sending(&self) -> bool { matches!(self.phase, SendPhase::Sending(_)) }

    pub fn pending(&self) -> Option<&PendingSend> {
        match &self.phase {
            SendPhase::Sending(pending) => Some(pending),
            SendPhase::Idle => None,
        }
    }
}
