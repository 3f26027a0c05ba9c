use chrono::Utc;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::session::history::{ChatSession, Message};
use crate::session::title::derive_title;

/// In-memory conversation list, most recently created first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionStore {
    sessions: Vec<ChatSession>,
}

impl SessionStore {
    pub fn new() -> Self { Self::default() }

    /// Records a turn and returns the id of the session it landed in.
    ///
    /// Without a session id a new session is created, titled from `message`,
    /// and placed at the front of the list. With an id the message is appended
    /// and the session's activity time refreshed; its position is unchanged.
    pub fn record_turn(&mut self, session_id: Option<&str>, message: Message) -> String {
        match session_id {
            Some(id) => {
                self.append(id, std::iter::once(message));
                id.to_string()
            }
            None => self.create(message),
        }
    }

    /// Appends messages to an existing session.
    pub fn append(&mut self, session_id: &str, messages: impl IntoIterator<Item = Message>) {
        let Some(session) = self.sessions.iter_mut().find(|s| s.id == session_id) else {
            warn!(session_id, "append to unknown session ignored");
            return;
        };
        session.messages.extend(messages);
        session.timestamp = Utc::now();
    }

    pub fn get(&self, session_id: &str) -> Option<&ChatSession> {
        self.sessions.iter().find(|s| s.id == session_id)
    }

    pub fn sessions(&self) -> &[ChatSession] { &self.sessions }

    pub fn len(&self) -> usize { self.sessions.len() }

    pub fn is_empty(&self) -> bool { self.sessions.is_empty() }

    fn create(&mut self, first: Message) -> String {
        let id = Uuid::new_v4().to_string();
        let title = derive_title(&first.content);
        debug!(session_id = %id, %title, "created session");
        self.sessions.insert(
            0,
            ChatSession {
                id: id.clone(),
                title,
                timestamp: Utc::now(),
                messages: vec![first],
            },
        );
        id
    }
}
