//! Terminal front end for the recommendations page.
//!
//! Lines starting with `/` are page commands. Every other line is a chat
//! message committed with Enter, so chat text can never trigger a page action.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use uuid::Uuid;

use crate::chat::panel::{Align, Bubble, BubbleKind};
use crate::chat::service::ChatService;
use crate::events::{Clickable, Control};
use crate::models::project::{Level, Project};
use crate::page::{Dispatch, Page};

const COMMAND_PREFIX: char = '/';

const HELP: &str = "commands: /cards | /more | /pick <card> <level> | /max | /close | /help | /quit\n\
    anything else is sent to the chat once a project is picked";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Cards,
    More,
    Pick { card: usize, level: Level },
    Maximize,
    Close,
    Help,
    Quit,
    Say(String),
    Invalid(String),
}

pub fn parse_input(line: &str) -> Input {
    let Some(command) = line.trim_start().strip_prefix(COMMAND_PREFIX) else {
        return Input::Say(line.to_string());
    };

    let mut words = command.split_whitespace();
    match words.next() {
        Some("cards") => Input::Cards,
        Some("more") => Input::More,
        Some("max") => Input::Maximize,
        Some("close") => Input::Close,
        Some("help") => Input::Help,
        Some("quit") | Some("exit") => Input::Quit,
        Some("pick") => {
            let card = words.next().and_then(|n| n.parse::<usize>().ok());
            let level = words.next().and_then(|l| l.parse::<Level>().ok());
            match (card, level) {
                (Some(card), Some(level)) if card > 0 => Input::Pick { card, level },
                _ => Input::Invalid("usage: /pick <card number> <beginner|intermediate|advanced>".to_string()),
            }
        }
        _ => Input::Invalid(format!("unknown command; {HELP}")),
    }
}

pub fn load_projects(path: &Path) -> Result<Vec<Project>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read project list {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("Project list {} is not a JSON array of projects", path.display()))
}

/// Prints bubbles the first time they are seen.
#[derive(Default)]
struct BubblePrinter {
    printed: HashSet<Uuid>,
}

impl BubblePrinter {
    fn flush(&mut self, page: &mut Page) {
        for bubble in page.chat().panel().bubbles() {
            if self.printed.insert(bubble.id) {
                println!("{}", format_bubble(bubble));
            }
        }
        page.chat_mut().panel_mut().settle();
    }

    fn reset(&mut self) {
        self.printed.clear();
    }
}

fn format_bubble(bubble: &Bubble) -> String {
    let text = match bubble.kind {
        BubbleKind::Typing => format!("… {}", bubble.text),
        _ => bubble.text.clone(),
    };
    match bubble.align() {
        Align::Right => format!("{:>60} [{}]", text, bubble.timestamp),
        Align::Left => format!("[{}] {}", bubble.timestamp, text),
    }
}

fn print_cards(page: &Page, from: usize) {
    for (i, card) in page.cards().cards().iter().enumerate().skip(from) {
        println!("{:>3}. {}", i + 1, card.title);
        println!("     Matching Skills Count: {}", card.matching_count);
        println!("     Matching Skills: {}", card.matching_text);
        println!("     Missing Skills: {}", card.missing_text);
    }
    if page.cards().load_more_visible() {
        println!("     (type `/more` to load more projects)");
    }
}

pub async fn run(mut page: Page, service: &dyn ChatService) -> Result<()> {
    let mut printer = BubblePrinter::default();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    print_cards(&page, 0);
    println!("{HELP}");

    while let Some(line) = lines.next_line().await? {
        let line = line.trim_end();
        match parse_input(line) {
            Input::Quit => break,
            Input::Help => println!("{HELP}"),
            Input::Invalid(usage) => println!("{usage}"),
            Input::Cards => print_cards(&page, 0),
            Input::More => {
                let before = page.cards().len();
                match page.dispatch(Control::LOAD_MORE.click()) {
                    Dispatch::Loaded(outcome) if outcome.rendered > 0 => print_cards(&page, before),
                    Dispatch::Loaded(_) => println!("No more projects."),
                    _ => println!("No project list loaded."),
                }
            }
            Input::Pick { card, level } => {
                let click = page
                    .cards()
                    .cards()
                    .get(card - 1)
                    .and_then(|c| c.button(level))
                    .map(|b| b.click());
                let Some(click) = click else {
                    println!("No card {card}.");
                    continue;
                };
                if let Dispatch::Turn(turn) = page.dispatch(click) {
                    printer.reset();
                    let chat = page.chat();
                    println!("== {} ({}) ==", chat.panel().title(), chat.panel().subtitle());
                    printer.flush(&mut page);
                    page.chat_mut().run_turn(service, turn).await;
                    printer.flush(&mut page);
                }
            }
            Input::Maximize => {
                page.dispatch(Control::TOGGLE_SIZE.click());
                let size = page.chat().panel().size();
                info!(classes = ?size.classes(), "Chat resized");
                println!("[{}]", size.toggle_glyph());
            }
            Input::Close => {
                page.dispatch(Control::CLOSE_CHAT.click());
                printer.reset();
                println!("Chat closed.");
            }
            Input::Say(text) => {
                if !page.chat().is_open() {
                    if !text.trim().is_empty() {
                        println!("Pick a project first ({HELP}).");
                    }
                    continue;
                }
                page.chat_mut().panel_mut().set_input(text);
                if let Some(turn) = page.chat_mut().commit_input() {
                    printer.flush(&mut page);
                    page.chat_mut().run_turn(service, turn).await;
                    printer.flush(&mut page);
                }
            }
        }
    }

    Ok(())
}
