//! Destination folder prompt
//!
//! Asks where the checked fonts should be copied. An empty answer or Esc
//! cancels the export without any message.

use crate::action::Action;
use crate::component::Component;
use crate::components::centered_popup;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use std::path::PathBuf;

#[derive(Default)]
pub struct DestinationDialog {
    pub input: String,
    /// How many fonts the export will cover
    pub font_count: usize,
}

impl DestinationDialog {
    /// Reset the prompt before showing it
    pub fn open(&mut self, initial: Option<&std::path::Path>, font_count: usize) {
        self.input = initial
            .map(|p| p.display().to_string())
            .unwrap_or_default();
        self.font_count = font_count;
    }

    /// The chosen folder, or `None` when the answer is empty (cancel).
    ///
    /// A leading `~` is expanded to the home directory.
    pub fn chosen_path(&self) -> Option<PathBuf> {
        let raw = self.input.trim();
        if raw.is_empty() {
            return None;
        }
        if raw == "~" {
            return dirs::home_dir();
        }
        if let Some(rest) = raw.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return Some(home.join(rest));
            }
        }
        Some(PathBuf::from(raw))
    }
}

impl Component for DestinationDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc => Some(Action::CloseModal),
            KeyCode::Enter => Some(Action::ConfirmModal),
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.input.clear();
                None
            }
            KeyCode::Backspace => {
                self.input.pop();
                None
            }
            KeyCode::Char(c) => {
                self.input.push(c);
                None
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let width = area.width.saturating_sub(10).clamp(40, 90);
        let popup_area = centered_popup(area, width, 11);
        frame.render_widget(Clear, popup_area);

        let hint = match self.chosen_path() {
            Some(path) if path.is_dir() => {
                Span::styled("Folder exists", Style::default().fg(Color::Green))
            }
            Some(_) => Span::styled(
                "Folder will be created",
                Style::default().fg(Color::Yellow),
            ),
            None => Span::styled(
                "Leave empty to cancel",
                Style::default().fg(Color::DarkGray),
            ),
        };

        let content = vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("Copy {} fonts to:", self.font_count),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("> ", Style::default().fg(Color::Cyan)),
                Span::styled(
                    format!("{}_", self.input),
                    Style::default().fg(Color::Cyan),
                ),
            ]),
            Line::from(""),
            Line::from(hint),
            Line::from(""),
            Line::from(vec![
                Span::styled(
                    " Enter ",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("Export  "),
                Span::styled(
                    " Esc ",
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("Cancel"),
            ]),
        ];

        let paragraph = Paragraph::new(content)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Green))
                    .title(" Select destination folder ")
                    .title_style(
                        Style::default()
                            .fg(Color::Green)
                            .add_modifier(Modifier::BOLD),
                    ),
            )
            .alignment(Alignment::Center);

        frame.render_widget(paragraph, popup_area);
        Ok(())
    }
}
