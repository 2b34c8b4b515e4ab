//! View model of the chat modal: header, bubble list, size and input field.

use chrono::{DateTime, Local};
use uuid::Uuid;

use crate::models::chat::Role;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BubbleKind {
    Message(Role),
    Typing,
    Notice,
}

/// Bubbles are appended hidden and fade in on the next [`ChatPanel::settle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opacity {
    Hidden,
    Visible,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bubble {
    pub id: Uuid,
    pub kind: BubbleKind,
    pub text: String,
    pub timestamp: String,
    pub opacity: Opacity,
}

impl Bubble {
    pub fn align(&self) -> Align {
        match self.kind {
            BubbleKind::Message(Role::User) => Align::Right,
            _ => Align::Left,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelSize {
    #[default]
    Compact,
    Maximized,
}

impl PanelSize {
    pub fn toggled(self) -> Self {
        match self {
            PanelSize::Compact => PanelSize::Maximized,
            PanelSize::Maximized => PanelSize::Compact,
        }
    }

    /// Width, height and corner classes. The two sets never overlap.
    pub fn classes(&self) -> [&'static str; 3] {
        match self {
            PanelSize::Compact => ["w-[350px]", "h-[550px]", "rounded-xl"],
            PanelSize::Maximized => ["w-[80vw]", "h-[92vh]", "rounded-lg"],
        }
    }

    /// Glyph on the toggle button: what clicking it will do next.
    pub fn toggle_glyph(&self) -> &'static str {
        match self {
            PanelSize::Compact => "🗖",
            PanelSize::Maximized => "🗗",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ChatPanel {
    visible: bool,
    title: String,
    subtitle: String,
    bubbles: Vec<Bubble>,
    size: PanelSize,
    scrolled_to: Option<Uuid>,
    input: String,
}

impl ChatPanel {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn subtitle(&self) -> &str {
        &self.subtitle
    }

    pub fn bubbles(&self) -> &[Bubble] {
        &self.bubbles
    }

    pub fn size(&self) -> PanelSize {
        self.size
    }

    /// Bubble currently scrolled into view, always the newest one.
    pub fn scrolled_to(&self) -> Option<Uuid> {
        self.scrolled_to
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn clear_input(&mut self) {
        self.input.clear();
    }

    pub fn show(&mut self, title: impl Into<String>, subtitle: impl Into<String>) {
        self.title = title.into();
        self.subtitle = subtitle.into();
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn clear(&mut self) {
        self.bubbles.clear();
        self.scrolled_to = None;
    }

    pub fn append(&mut self, kind: BubbleKind, text: impl Into<String>) -> Uuid {
        self.append_at(kind, text, Local::now())
    }

    pub fn append_at(&mut self, kind: BubbleKind, text: impl Into<String>, at: DateTime<Local>) -> Uuid {
        let id = Uuid::new_v4();
        self.bubbles.push(Bubble {
            id,
            kind,
            text: text.into(),
            timestamp: format_timestamp(at),
            opacity: Opacity::Hidden,
        });
        self.scrolled_to = Some(id);
        id
    }

    /// Removes the bubble with `id`; returns whether it was still present.
    pub fn remove(&mut self, id: Uuid) -> bool {
        let before = self.bubbles.len();
        self.bubbles.retain(|b| b.id != id);
        if self.scrolled_to == Some(id) {
            self.scrolled_to = self.bubbles.last().map(|b| b.id);
        }
        self.bubbles.len() != before
    }

    /// Completes the fade-in of every freshly appended bubble.
    pub fn settle(&mut self) {
        for bubble in &mut self.bubbles {
            bubble.opacity = Opacity::Visible;
        }
    }

    pub fn toggle_size(&mut self) -> PanelSize {
        self.size = self.size.toggled();
        self.size
    }
}

pub fn format_timestamp(at: DateTime<Local>) -> String {
    at.format("%H:%M").to_string()
}
