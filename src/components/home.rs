//! Home component - Main application screen
//!
//! Displays the search box, the font checklist, the button row and the
//! status line. Owns cursor and search-mode state; fonts and checkbox
//! state live in `FontListing`.

use crate::action::Action;
use crate::component::Component;
use crate::components::layout::{button_cells, calculate_main_layout, contains};
use crate::model::FontListing;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Rows moved by PageUp/PageDown
const PAGE_SIZE: usize = 10;

// ═══════════════════════════════════════════════════════════════════════════════
// Buttons
// ═══════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    SelectAll,
    DeselectAll,
    ExportSelected,
}

impl Button {
    pub fn all() -> [Button; 3] {
        [Button::SelectAll, Button::DeselectAll, Button::ExportSelected]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Button::SelectAll => "Select All",
            Button::DeselectAll => "Deselect All",
            Button::ExportSelected => "Export Selected",
        }
    }

    pub fn hotkey(&self) -> char {
        match self {
            Button::SelectAll => 'a',
            Button::DeselectAll => 'n',
            Button::ExportSelected => 'x',
        }
    }

    pub fn action(&self) -> Action {
        match self {
            Button::SelectAll => Action::SelectAll,
            Button::DeselectAll => Action::DeselectAll,
            Button::ExportSelected => Action::ExportSelected,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Home Component
// ═══════════════════════════════════════════════════════════════════════════════

pub struct HomeComponent {
    /// Cursor position in the visible list
    pub list_state: ListState,

    /// Whether keystrokes go to the search box
    pub search_mode: bool,

    /// Last rendered list area, for mouse hit-testing
    list_area: Rect,

    /// Last rendered button cells, in `Button::all()` order
    button_areas: Vec<Rect>,
}

impl Default for HomeComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl HomeComponent {
    pub fn new() -> Self {
        Self {
            list_state: ListState::default(),
            search_mode: false,
            list_area: Rect::default(),
            button_areas: Vec::new(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────

    pub fn focused_index(&self) -> Option<usize> {
        self.list_state.selected()
    }

    /// Select next item in the list, wrapping to the first
    pub fn next(&mut self, listing: &FontListing) {
        let len = listing.visible_len();
        if len == 0 {
            self.list_state.select(None);
            return;
        }
        let next = match self.list_state.selected() {
            Some(i) if i + 1 < len => i + 1,
            _ => 0,
        };
        self.list_state.select(Some(next));
    }

    /// Select previous item in the list, wrapping to the last
    pub fn previous(&mut self, listing: &FontListing) {
        let len = listing.visible_len();
        if len == 0 {
            self.list_state.select(None);
            return;
        }
        let prev = match self.list_state.selected() {
            Some(i) if i > 0 => i - 1,
            _ => len - 1,
        };
        self.list_state.select(Some(prev));
    }

    pub fn select_first(&mut self, listing: &FontListing) {
        if listing.visible_len() == 0 {
            self.list_state.select(None);
        } else {
            self.list_state.select(Some(0));
        }
    }

    pub fn select_last(&mut self, listing: &FontListing) {
        let len = listing.visible_len();
        self.list_state.select(len.checked_sub(1));
    }

    pub fn page_down(&mut self, listing: &FontListing) {
        let len = listing.visible_len();
        if len == 0 {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        self.list_state.select(Some((current + PAGE_SIZE).min(len - 1)));
    }

    pub fn page_up(&mut self, listing: &FontListing) {
        if listing.visible_len() == 0 {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        self.list_state.select(Some(current.saturating_sub(PAGE_SIZE)));
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Search
    // ─────────────────────────────────────────────────────────────────────────

    pub fn enter_search_mode(&mut self) {
        self.search_mode = true;
    }

    pub fn exit_search_mode(&mut self) {
        self.search_mode = false;
    }

    /// Key handling while the search box has focus
    pub fn handle_search_key_event(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::ClearSearch)
            }
            KeyCode::Esc | KeyCode::Enter => Some(Action::ExitSearchMode),
            KeyCode::Backspace => Some(Action::SearchBackspace),
            KeyCode::Down => Some(Action::NextItem),
            KeyCode::Up => Some(Action::PrevItem),
            KeyCode::Char(c) => Some(Action::SearchInput(c)),
            _ => None,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for HomeComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if self.search_mode {
            return Ok(self.handle_search_key_event(key));
        }

        let action = match key.code {
            // Navigation
            KeyCode::Char('j') | KeyCode::Down => Some(Action::NextItem),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::PrevItem),
            KeyCode::Char('g') | KeyCode::Home => Some(Action::FirstItem),
            KeyCode::Char('G') | KeyCode::End => Some(Action::LastItem),
            KeyCode::PageDown => Some(Action::PageDown),
            KeyCode::PageUp => Some(Action::PageUp),

            // Search
            KeyCode::Char('/') => Some(Action::EnterSearchMode),
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::ClearSearch)
            }

            // Selection
            KeyCode::Char(' ') => Some(Action::ToggleFocused),
            KeyCode::Char('a') => Some(Action::SelectAll),
            KeyCode::Char('n') => Some(Action::DeselectAll),

            // Export
            KeyCode::Char('x') | KeyCode::Enter => Some(Action::ExportSelected),
            KeyCode::Char('R') => Some(Action::ReloadManifest),

            // Modals
            KeyCode::Char('q') => Some(Action::OpenQuitDialog),
            KeyCode::Char('?') => Some(Action::OpenHelp),

            _ => None,
        };
        Ok(action)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {}
            MouseEventKind::ScrollDown => return Ok(Some(Action::NextItem)),
            MouseEventKind::ScrollUp => return Ok(Some(Action::PrevItem)),
            _ => return Ok(None),
        }

        for (button, area) in Button::all().iter().zip(&self.button_areas) {
            if contains(*area, mouse.column, mouse.row) {
                return Ok(Some(button.action()));
            }
        }

        // Rows start inside the list border
        let inner = Rect::new(
            self.list_area.x.saturating_add(1),
            self.list_area.y.saturating_add(1),
            self.list_area.width.saturating_sub(2),
            self.list_area.height.saturating_sub(2),
        );
        if contains(inner, mouse.column, mouse.row) {
            let row = (mouse.row - inner.y) as usize + self.list_state.offset();
            return Ok(Some(Action::ToggleRow(row)));
        }

        Ok(None)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // Drawing is done through draw_home_screen which takes full context
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Rendering Functions
// ═══════════════════════════════════════════════════════════════════════════════

/// Context needed for rendering the home screen
pub struct HomeRenderContext<'a> {
    pub listing: &'a FontListing,
    pub status_message: &'a str,
}

pub fn draw_home_screen(
    frame: &mut Frame,
    area: Rect,
    home: &mut HomeComponent,
    ctx: &HomeRenderContext,
) -> Result<()> {
    let layout = calculate_main_layout(area);

    render_search_box(frame, layout.search, home, ctx.listing);
    render_font_list(frame, layout.list, home, ctx.listing);
    render_buttons(frame, layout.buttons, home, ctx.listing);
    render_status_bar(frame, layout.status, ctx.status_message);
    render_help_bar(frame, layout.help, home);

    Ok(())
}

fn render_search_box(frame: &mut Frame, area: Rect, home: &HomeComponent, listing: &FontListing) {
    let border_color = if home.search_mode {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let mut spans = vec![Span::styled(
        listing.filter().to_string(),
        Style::default().fg(Color::White),
    )];
    if home.search_mode {
        spans.push(Span::styled("_", Style::default().fg(Color::Cyan)));
    } else if listing.filter().is_empty() {
        spans.push(Span::styled(
            "press / to filter by family name",
            Style::default().fg(Color::DarkGray),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Search font ")
            .border_style(Style::default().fg(border_color)),
    );
    frame.render_widget(paragraph, area);
}

/// Pad `text` with spaces to `width` terminal columns
fn pad_to_width(text: &str, width: usize) -> String {
    let current = UnicodeWidthStr::width(text);
    format!("{}{}", text, " ".repeat(width.saturating_sub(current)))
}

fn render_font_list(
    frame: &mut Frame,
    area: Rect,
    home: &mut HomeComponent,
    listing: &FontListing,
) {
    home.list_area = area;

    let name_width = listing
        .visible()
        .map(|font| UnicodeWidthStr::width(font.name.as_str()))
        .max()
        .unwrap_or(0);

    let items: Vec<ListItem> = listing
        .visible()
        .map(|font| {
            let is_selected = listing.is_selected(&font.id);
            let (marker, marker_style, name_style) = if is_selected {
                (
                    "[x] ",
                    Style::default().fg(Color::Green),
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                ("[ ] ", Style::default().fg(Color::DarkGray), Style::default().fg(Color::White))
            };

            ListItem::new(Line::from(vec![
                Span::styled(marker, marker_style),
                Span::styled(pad_to_width(&font.name, name_width), name_style),
                Span::styled("  ", Style::default()),
                Span::styled(font.weight.clone(), Style::default().fg(Color::Cyan)),
            ]))
        })
        .collect();

    let mut title = format!(" Fonts ({}/{}) ", listing.visible_len(), listing.total_len());
    if listing.selected_count() > 0 {
        title = format!("{}[{}✓] ", title, listing.selected_count());
    }

    // Keep the cursor inside the visible range after filtering
    match home.list_state.selected() {
        Some(i) if i >= listing.visible_len() => home.select_last(listing),
        None if listing.visible_len() > 0 => home.select_first(listing),
        _ => {}
    }

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .highlight_style(
            Style::default()
                .bg(Color::Blue)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    frame.render_stateful_widget(list, area, &mut home.list_state);
}

fn render_buttons(frame: &mut Frame, area: Rect, home: &mut HomeComponent, listing: &FontListing) {
    let buttons = Button::all();
    let cells = button_cells(area, buttons.len());

    for (button, cell) in buttons.iter().zip(&cells) {
        let mut label = button.label().to_string();
        if *button == Button::ExportSelected && listing.selected_count() > 0 {
            label = format!("{} ({})", label, listing.selected_count());
        }

        let color = match button {
            Button::ExportSelected => Color::Green,
            _ => Color::Cyan,
        };

        let paragraph = Paragraph::new(Line::from(vec![
            Span::styled(
                format!(" {} ", button.hotkey()),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::raw(label),
        ]))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        );
        frame.render_widget(paragraph, *cell);
    }

    home.button_areas = cells;
}

fn render_status_bar(frame: &mut Frame, area: Rect, status_message: &str) {
    let paragraph = Paragraph::new(Line::from(Span::styled(
        format!(" {} ", status_message),
        Style::default().fg(Color::Yellow),
    )));
    frame.render_widget(paragraph, area);
}

fn render_help_bar(frame: &mut Frame, area: Rect, home: &HomeComponent) {
    let key_style = |color: Color| Style::default().fg(color).add_modifier(Modifier::BOLD);

    let help_spans = if home.search_mode {
        vec![
            Span::styled(" Esc/Enter ", key_style(Color::Yellow)),
            Span::raw("Done  "),
            Span::styled(" Ctrl-u ", key_style(Color::Yellow)),
            Span::raw("Clear  "),
            Span::styled("typing filters the list", Style::default().fg(Color::DarkGray)),
        ]
    } else {
        vec![
            Span::styled(" q ", key_style(Color::Yellow)),
            Span::raw("Quit "),
            Span::styled(" Space ", key_style(Color::Green)),
            Span::raw("Toggle "),
            Span::styled(" / ", key_style(Color::Cyan)),
            Span::raw("Search "),
            Span::styled(" R ", key_style(Color::Cyan)),
            Span::raw("Reload "),
            Span::styled(" ? ", key_style(Color::White)),
            Span::raw("Help"),
        ]
    };

    let paragraph = Paragraph::new(Line::from(help_spans)).alignment(Alignment::Left);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FontRecord;

    fn listing(n: usize) -> FontListing {
        FontListing::new(
            (0..n)
                .map(|i| FontRecord::new(i.to_string(), format!("Font {}", i), "Regular"))
                .collect(),
        )
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_next_and_previous_wrap() {
        let fonts = listing(3);
        let mut home = HomeComponent::new();
        home.select_first(&fonts);

        home.next(&fonts);
        home.next(&fonts);
        assert_eq!(home.focused_index(), Some(2));
        home.next(&fonts);
        assert_eq!(home.focused_index(), Some(0));
        home.previous(&fonts);
        assert_eq!(home.focused_index(), Some(2));
    }

    #[test]
    fn test_navigation_on_empty_list() {
        let fonts = listing(0);
        let mut home = HomeComponent::new();
        home.next(&fonts);
        assert_eq!(home.focused_index(), None);
        home.select_last(&fonts);
        assert_eq!(home.focused_index(), None);
    }

    #[test]
    fn test_paging_clamps() {
        let fonts = listing(15);
        let mut home = HomeComponent::new();
        home.select_first(&fonts);
        home.page_down(&fonts);
        assert_eq!(home.focused_index(), Some(10));
        home.page_down(&fonts);
        assert_eq!(home.focused_index(), Some(14));
        home.page_up(&fonts);
        home.page_up(&fonts);
        assert_eq!(home.focused_index(), Some(0));
    }

    #[test]
    fn test_key_bindings() {
        let mut home = HomeComponent::new();
        assert_eq!(
            home.handle_key_event(key(KeyCode::Char('a'))).unwrap(),
            Some(Action::SelectAll)
        );
        assert_eq!(
            home.handle_key_event(key(KeyCode::Char('n'))).unwrap(),
            Some(Action::DeselectAll)
        );
        assert_eq!(
            home.handle_key_event(key(KeyCode::Char('x'))).unwrap(),
            Some(Action::ExportSelected)
        );
        assert_eq!(
            home.handle_key_event(key(KeyCode::Char(' '))).unwrap(),
            Some(Action::ToggleFocused)
        );
    }

    #[test]
    fn test_search_mode_captures_characters() {
        let mut home = HomeComponent::new();
        home.enter_search_mode();
        assert_eq!(
            home.handle_key_event(key(KeyCode::Char('a'))).unwrap(),
            Some(Action::SearchInput('a'))
        );
        assert_eq!(
            home.handle_key_event(key(KeyCode::Esc)).unwrap(),
            Some(Action::ExitSearchMode)
        );
    }

    #[test]
    fn test_button_actions() {
        let actions: Vec<Action> = Button::all().iter().map(|b| b.action()).collect();
        assert_eq!(
            actions,
            vec![Action::SelectAll, Action::DeselectAll, Action::ExportSelected]
        );
    }

    #[test]
    fn test_pad_to_width_handles_wide_characters() {
        assert_eq!(pad_to_width("ab", 4), "ab  ");
        assert_eq!(UnicodeWidthStr::width(pad_to_width("明朝", 6).as_str()), 6);
        assert_eq!(pad_to_width("long", 2), "long");
    }
}
