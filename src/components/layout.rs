//! Layout calculations for the UI

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main screen layout areas
pub struct MainLayout {
    pub search: Rect,
    pub list: Rect,
    pub buttons: Rect,
    pub status: Rect,
    pub help: Rect,
}

/// Calculate centered popup area
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let popup_x = area.x + (area.width.saturating_sub(width)) / 2;
    let popup_y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect::new(
        popup_x,
        popup_y,
        width.min(area.width),
        height.min(area.height),
    )
}

/// Calculate main screen layout: search box, checklist, button row,
/// status line and help bar, top to bottom
pub fn calculate_main_layout(area: Rect) -> MainLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    MainLayout {
        search: chunks[0],
        list: chunks[1],
        buttons: chunks[2],
        status: chunks[3],
        help: chunks[4],
    }
}

/// Split the button row into `count` equal cells
pub fn button_cells(area: Rect, count: usize) -> Vec<Rect> {
    if count == 0 {
        return Vec::new();
    }
    let constraints: Vec<Constraint> = (0..count)
        .map(|_| Constraint::Ratio(1, count as u32))
        .collect();
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area)
        .to_vec()
}

/// Whether the terminal cell (`column`, `row`) falls inside `area`
pub fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_popup_fits_inside() {
        let area = Rect::new(0, 0, 100, 40);
        let popup = centered_popup(area, 60, 10);
        assert_eq!(popup, Rect::new(20, 15, 60, 10));

        let small = centered_popup(Rect::new(0, 0, 30, 5), 60, 10);
        assert_eq!(small.width, 30);
        assert_eq!(small.height, 5);
    }

    #[test]
    fn test_main_layout_stacks_sections() {
        let layout = calculate_main_layout(Rect::new(0, 0, 80, 30));
        assert_eq!(layout.search.height, 3);
        assert_eq!(layout.buttons.height, 3);
        assert_eq!(layout.status.height, 1);
        assert_eq!(layout.help.y, 29);
        assert_eq!(layout.list.y, 3);
        assert_eq!(layout.list.height, 30 - 3 - 3 - 1 - 1);
    }

    #[test]
    fn test_button_cells_cover_row() {
        let cells = button_cells(Rect::new(0, 10, 90, 3), 3);
        assert_eq!(cells.len(), 3);
        assert_eq!(cells[0].x, 0);
        assert_eq!(cells.iter().map(|c| c.width).sum::<u16>(), 90);
    }

    #[test]
    fn test_contains() {
        let area = Rect::new(5, 5, 10, 2);
        assert!(contains(area, 5, 5));
        assert!(contains(area, 14, 6));
        assert!(!contains(area, 15, 6));
        assert!(!contains(area, 5, 7));
    }
}
