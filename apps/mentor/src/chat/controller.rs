//! Chat Session Controller: the state machine behind the chat modal.
//!
//! Phases: `Closed` → `OpenEmpty` (seeded, awaiting the first reply) →
//! `OpenActive` (at least one reply received). Maximize is orthogonal.
//!
//! A network round-trip is split in two: a transition returns a [`PendingTurn`],
//! the caller awaits the service, then hands the outcome to [`ChatController::complete`].
//! Each turn removes only the typing placeholder it created, and a turn that
//! outlived its session (closed or reopened meanwhile) is dropped.

use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::chat::panel::{BubbleKind, ChatPanel, PanelSize};
use crate::chat::prompts::{
    seed_prompt, SERVICE_ERROR_PREFIX, TRANSPORT_FAILURE_TEXT, TYPING_TEXT,
};
use crate::chat::service::{ChatError, ChatService};
use crate::chat::transcript::Transcript;
use crate::events::LevelSelection;
use crate::models::chat::{ChatMessage, ChatReply, ChatRequest, Role};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionPhase {
    #[default]
    Closed,
    OpenEmpty,
    OpenActive,
}

/// A request in flight, bound to the placeholder bubble and session that issued it.
#[derive(Debug, Clone)]
pub struct PendingTurn {
    placeholder: Uuid,
    session: u64,
    pub request: ChatRequest,
}

impl PendingTurn {
    pub fn placeholder(&self) -> Uuid {
        self.placeholder
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    Replied,
    ServiceError,
    Failed,
    /// The session the turn belonged to is gone; nothing was rendered.
    Stale,
}

#[derive(Debug, Default)]
pub struct ChatController {
    transcript: Transcript,
    panel: ChatPanel,
    phase: SessionPhase,
    session: u64,
}

impl ChatController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn is_open(&self) -> bool {
        self.phase() != SessionPhase::Closed
    }

    pub fn is_maximized(&self) -> bool {
        self.panel.size() == PanelSize::Maximized
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn panel(&self) -> &ChatPanel {
        &self.panel
    }

    pub fn panel_mut(&mut self) -> &mut ChatPanel {
        &mut self.panel
    }

    /// Starts a fresh conversation about the selected project and level.
    ///
    /// The seed becomes the whole transcript and is sent as-is; only the
    /// typing placeholder is rendered for it.
    pub fn open_for_project(&mut self, selection: &LevelSelection) -> PendingTurn {
        let seed = seed_prompt(
            &selection.project_name,
            selection.level.as_str(),
            &selection.matching_skills,
            &selection.missing_skills,
        );

        self.session += 1;
        self.transcript.reset_to(ChatMessage::user(seed));
        self.panel.clear();
        self.panel.show(
            selection.project_name.clone(),
            format!("Level: {}", selection.level),
        );
        self.phase = SessionPhase::OpenEmpty;

        info!(
            project = %selection.project_name,
            level = %selection.level,
            session = self.session,
            "Opened project chat"
        );

        self.begin_turn()
    }

    /// Appends a user message and starts a turn. Blank text is ignored.
    pub fn send_message(&mut self, text: &str) -> Option<PendingTurn> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        if !self.is_open() {
            debug!("Ignoring chat message while the modal is closed");
            return None;
        }

        self.transcript.push(ChatMessage::user(text));
        self.panel.append(BubbleKind::Message(Role::User), text);
        Some(self.begin_turn())
    }

    /// Sends the input field's content and clears the field.
    pub fn commit_input(&mut self) -> Option<PendingTurn> {
        let input = self.panel.input().trim().to_string();
        let turn = self.send_message(&input)?;
        self.panel.clear_input();
        Some(turn)
    }

    fn begin_turn(&mut self) -> PendingTurn {
        let placeholder = self.panel.append(BubbleKind::Typing, TYPING_TEXT);
        PendingTurn {
            placeholder,
            session: self.session,
            request: self.transcript.to_request(),
        }
    }

    /// Applies the result of a turn's round-trip.
    pub fn complete(
        &mut self,
        turn: PendingTurn,
        outcome: Result<ChatReply, ChatError>,
    ) -> TurnOutcome {
        if turn.session != self.session || !self.is_open() {
            warn!(
                turn_session = turn.session,
                session = self.session,
                "Dropping chat reply for a superseded session"
            );
            return TurnOutcome::Stale;
        }

        self.panel.remove(turn.placeholder);

        match outcome {
            Ok(ChatReply::Reply(reply)) => {
                self.transcript.push(ChatMessage::assistant(reply.clone()));
                self.panel.append(BubbleKind::Message(Role::Assistant), reply);
                self.phase = SessionPhase::OpenActive;
                TurnOutcome::Replied
            }
            Ok(ChatReply::ServiceError(message)) => {
                warn!("Chat service reported an error: {message}");
                self.panel
                    .append(BubbleKind::Notice, format!("{SERVICE_ERROR_PREFIX}{message}"));
                TurnOutcome::ServiceError
            }
            Err(e) => {
                error!("Error in chat: {e}");
                self.panel.append(BubbleKind::Notice, TRANSPORT_FAILURE_TEXT);
                TurnOutcome::Failed
            }
        }
    }

    /// Awaits `turn` on `service` and applies the result.
    pub async fn run_turn(&mut self, service: &dyn ChatService, turn: PendingTurn) -> TurnOutcome {
        debug!(placeholder = %turn.placeholder(), session = turn.session, "Awaiting chat reply");
        let outcome = service.complete(&turn.request).await;
        self.complete(turn, outcome)
    }

    pub fn toggle_maximize(&mut self) -> PanelSize {
        self.panel.toggle_size()
    }

    pub fn close(&mut self) {
        self.transcript.clear();
        self.panel.clear();
        self.panel.hide();
        self.phase = SessionPhase::Closed;
        info!(session = self.session, "Closed project chat");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::panel::Opacity;
    use crate::models::project::Level;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Answers from a script and records every request it sees.
    #[derive(Default)]
    struct ScriptedService {
        answers: Mutex<VecDeque<Result<ChatReply, ChatError>>>,
        seen: Mutex<Vec<ChatRequest>>,
    }

    impl ScriptedService {
        fn with(answers: Vec<Result<ChatReply, ChatError>>) -> Self {
            Self {
                answers: Mutex::new(answers.into()),
                seen: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> usize {
            self.seen.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl ChatService for ScriptedService {
        async fn complete(&self, request: &ChatRequest) -> Result<ChatReply, ChatError> {
            self.seen.lock().unwrap().push(request.clone());
            self.answers
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(Err(ChatError::EmptyResponse))
        }
    }

    fn reply(text: &str) -> Result<ChatReply, ChatError> {
        Ok(ChatReply::Reply(text.to_string()))
    }

    fn selection(project: &str, level: Level) -> LevelSelection {
        LevelSelection {
            project_name: project.to_string(),
            level,
            matching_skills: vec!["Python".to_string()],
            missing_skills: vec!["Go".to_string()],
        }
    }

    fn typing_count(controller: &ChatController) -> usize {
        controller
            .panel()
            .bubbles()
            .iter()
            .filter(|b| b.kind == BubbleKind::Typing)
            .count()
    }

    #[test]
    fn test_open_seeds_single_message_with_project_context() {
        let mut chat = ChatController::new();
        let turn = chat.open_for_project(&selection("Alpha", Level::Intermediate));

        assert_eq!(chat.transcript().len(), 1);
        let seed = &chat.transcript().messages()[0];
        assert_eq!(seed.role, Role::User);
        for needle in ["Alpha", "Intermediate", "Python", "Go"] {
            assert!(seed.content.contains(needle), "seed is missing {needle}");
        }
        assert_eq!(turn.request.messages, chat.transcript().messages());
        assert_eq!(chat.phase(), SessionPhase::OpenEmpty);
        assert_eq!(chat.panel().title(), "Alpha");
        assert_eq!(chat.panel().subtitle(), "Level: Intermediate");
        assert!(chat.panel().is_visible());
        assert_eq!(chat.panel().bubbles().len(), 1);
        assert_eq!(chat.panel().bubbles()[0].kind, BubbleKind::Typing);
    }

    #[tokio::test]
    async fn test_successful_send_appends_user_then_assistant() {
        let service = ScriptedService::with(vec![reply("seed answer"), reply("hi there")]);
        let mut chat = ChatController::new();
        let turn = chat.open_for_project(&selection("Alpha", Level::Beginner));
        assert_eq!(chat.run_turn(&service, turn).await, TurnOutcome::Replied);
        assert_eq!(chat.phase(), SessionPhase::OpenActive);

        let before = chat.transcript().len();
        let turn = chat.send_message("hello").unwrap();
        assert_eq!(chat.run_turn(&service, turn).await, TurnOutcome::Replied);

        let added = &chat.transcript().messages()[before..];
        assert_eq!(
            added,
            &[ChatMessage::user("hello"), ChatMessage::assistant("hi there")]
        );
        assert_eq!(typing_count(&chat), 0);

        // The second request carried the whole transcript so far.
        let seen = service.seen.lock().unwrap();
        assert_eq!(seen[1].messages.len(), 3);
        assert_eq!(seen[1].messages[2], ChatMessage::user("hello"));
    }

    #[tokio::test]
    async fn test_service_error_keeps_only_user_message() {
        let service = ScriptedService::with(vec![
            reply("seed answer"),
            Ok(ChatReply::ServiceError("Server error".to_string())),
        ]);
        let mut chat = ChatController::new();
        let turn = chat.open_for_project(&selection("Alpha", Level::Beginner));
        chat.run_turn(&service, turn).await;

        let before = chat.transcript().len();
        let turn = chat.send_message("hello").unwrap();
        assert_eq!(chat.run_turn(&service, turn).await, TurnOutcome::ServiceError);

        assert_eq!(chat.transcript().len(), before + 1);
        assert_eq!(chat.transcript().messages()[before], ChatMessage::user("hello"));
        let last = chat.panel().bubbles().last().unwrap();
        assert_eq!(last.kind, BubbleKind::Notice);
        assert_eq!(last.text, "Sorry, there was an error: Server error");
        assert_eq!(typing_count(&chat), 0);
    }

    #[tokio::test]
    async fn test_transport_failure_renders_generic_notice() {
        let service = ScriptedService::with(vec![Err(ChatError::EmptyResponse)]);
        let mut chat = ChatController::new();
        let turn = chat.open_for_project(&selection("Alpha", Level::Advanced));

        assert_eq!(chat.run_turn(&service, turn).await, TurnOutcome::Failed);
        assert_eq!(chat.transcript().len(), 1);
        assert_eq!(chat.phase(), SessionPhase::OpenEmpty);
        let bubbles = chat.panel().bubbles();
        assert_eq!(bubbles.len(), 1);
        assert_eq!(bubbles[0].text, TRANSPORT_FAILURE_TEXT);
    }

    #[tokio::test]
    async fn test_whitespace_message_is_a_no_op() {
        let service = ScriptedService::default();
        let mut chat = ChatController::new();
        chat.open_for_project(&selection("Alpha", Level::Beginner));
        let before = chat.transcript().len();

        assert!(chat.send_message("   ").is_none());
        chat.panel_mut().set_input(" \t ");
        assert!(chat.commit_input().is_none());

        assert_eq!(chat.transcript().len(), before);
        assert_eq!(service.calls(), 0);
    }

    #[test]
    fn test_commit_input_sends_trimmed_text_and_clears_field() {
        let mut chat = ChatController::new();
        chat.open_for_project(&selection("Alpha", Level::Beginner));
        chat.panel_mut().set_input("  what stack?  ");

        let turn = chat.commit_input().unwrap();
        assert_eq!(
            turn.request.messages.last().unwrap(),
            &ChatMessage::user("what stack?")
        );
        assert_eq!(chat.panel().input(), "");
    }

    #[test]
    fn test_send_while_closed_is_ignored() {
        let mut chat = ChatController::new();
        assert!(chat.send_message("hello").is_none());
        assert!(chat.transcript().is_empty());
    }

    #[test]
    fn test_toggle_maximize_twice_restores_size() {
        let mut chat = ChatController::new();
        chat.open_for_project(&selection("Alpha", Level::Beginner));
        let original = chat.panel().size();
        let transcript = chat.transcript().clone();

        assert_eq!(chat.toggle_maximize(), PanelSize::Maximized);
        assert!(chat.is_maximized());
        assert!(chat.is_open());
        chat.toggle_maximize();

        assert_eq!(chat.panel().size(), original);
        assert_eq!(chat.transcript(), &transcript);
    }

    #[tokio::test]
    async fn test_close_then_open_leaves_only_new_seed() {
        let service = ScriptedService::with(vec![reply("first"), reply("second")]);
        let mut chat = ChatController::new();
        let turn = chat.open_for_project(&selection("Alpha", Level::Beginner));
        chat.run_turn(&service, turn).await;
        let turn = chat.send_message("more please").unwrap();
        chat.run_turn(&service, turn).await;

        chat.close();
        assert_eq!(chat.phase(), SessionPhase::Closed);
        assert!(chat.transcript().is_empty());
        assert!(chat.panel().bubbles().is_empty());
        assert!(!chat.panel().is_visible());

        chat.open_for_project(&selection("Beta", Level::Advanced));
        assert_eq!(chat.transcript().len(), 1);
        let seed = &chat.transcript().messages()[0].content;
        assert!(seed.contains("Beta"));
        assert!(!seed.contains("Alpha"));
    }

    #[test]
    fn test_overlapping_turns_remove_their_own_placeholders() {
        let mut chat = ChatController::new();
        let seed_turn = chat.open_for_project(&selection("Alpha", Level::Beginner));
        chat.complete(seed_turn, reply("seed answer"));

        let first = chat.send_message("one").unwrap();
        let second = chat.send_message("two").unwrap();
        assert_eq!(typing_count(&chat), 2);

        // The later request resolves first.
        chat.complete(second.clone(), reply("answer two"));
        let remaining: Vec<_> = chat
            .panel()
            .bubbles()
            .iter()
            .filter(|b| b.kind == BubbleKind::Typing)
            .map(|b| b.id)
            .collect();
        assert_eq!(remaining, vec![first.placeholder()]);

        chat.complete(first, reply("answer one"));
        assert_eq!(typing_count(&chat), 0);
    }

    #[test]
    fn test_reply_for_superseded_session_is_dropped() {
        let mut chat = ChatController::new();
        let old = chat.open_for_project(&selection("Alpha", Level::Beginner));
        chat.open_for_project(&selection("Beta", Level::Beginner));

        assert_eq!(chat.complete(old, reply("about alpha")), TurnOutcome::Stale);
        assert_eq!(chat.transcript().len(), 1);
        assert!(chat
            .panel()
            .bubbles()
            .iter()
            .all(|b| b.kind == BubbleKind::Typing));
    }

    #[test]
    fn test_reply_after_close_is_dropped() {
        let mut chat = ChatController::new();
        let turn = chat.open_for_project(&selection("Alpha", Level::Beginner));
        chat.close();

        assert_eq!(chat.complete(turn, reply("late")), TurnOutcome::Stale);
        assert!(chat.transcript().is_empty());
        assert!(chat.panel().bubbles().is_empty());
    }

    #[test]
    fn test_new_bubbles_fade_in_after_settle() {
        let mut chat = ChatController::new();
        let turn = chat.open_for_project(&selection("Alpha", Level::Beginner));
        chat.complete(turn, reply("welcome"));
        assert_eq!(chat.panel().bubbles()[0].opacity, Opacity::Hidden);

        chat.panel_mut().settle();
        assert_eq!(chat.panel().bubbles()[0].opacity, Opacity::Visible);
    }
}
