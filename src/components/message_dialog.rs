//! Message dialog for export results, warnings and load failures

use crate::action::Action;
use crate::component::Component;
use crate::components::centered_popup;
use crate::model::MessageLevel;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub struct MessageDialog {
    pub level: MessageLevel,
    pub body: String,
}

impl Default for MessageDialog {
    fn default() -> Self {
        Self {
            level: MessageLevel::Info,
            body: String::new(),
        }
    }
}

impl MessageDialog {
    pub fn set_message(&mut self, level: MessageLevel, body: &str) {
        self.level = level;
        self.body = body.to_string();
    }

    fn color(&self) -> Color {
        match self.level {
            MessageLevel::Info => Color::Green,
            MessageLevel::Warning => Color::Yellow,
            MessageLevel::Error => Color::Red,
        }
    }
}

impl Component for MessageDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char(' ') => {
                Some(Action::CloseModal)
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let width = area.width.saturating_sub(10).clamp(40, 80);
        let body_lines = self.body.lines().count().max(1) as u16;
        let popup_area = centered_popup(area, width, body_lines + 6);
        frame.render_widget(Clear, popup_area);

        let color = self.color();

        let mut content = vec![Line::from("")];
        for line in self.body.lines() {
            content.push(Line::from(Span::styled(
                line.to_string(),
                Style::default().fg(Color::White),
            )));
        }
        content.push(Line::from(""));
        content.push(Line::from(vec![
            Span::styled(
                " Enter ",
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::raw("OK"),
        ]));

        let paragraph = Paragraph::new(content)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color))
                    .title(format!(" {} ", self.level.title()))
                    .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD)),
            )
            .wrap(Wrap { trim: false })
            .alignment(Alignment::Center);

        frame.render_widget(paragraph, popup_area);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn test_any_confirm_key_closes() {
        let mut dialog = MessageDialog::default();
        dialog.set_message(MessageLevel::Warning, "No fonts selected");
        for code in [KeyCode::Enter, KeyCode::Esc, KeyCode::Char('q')] {
            assert_eq!(
                dialog
                    .handle_key_event(KeyEvent::new(code, KeyModifiers::NONE))
                    .unwrap(),
                Some(Action::CloseModal)
            );
        }
        assert_eq!(dialog.body, "No fonts selected");
    }
}
