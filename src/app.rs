//! Root application component
//!
//! The App struct implements the Component trait, acting as the root component
//! that delegates event handling and rendering to child components.
//! It wires user actions to the listing and the export pipeline but holds
//! no filesystem logic of its own.

use crate::action::Action;
use crate::component::Component;
use crate::components::{
    draw_home_screen, DestinationDialog, HelpDialog, HomeComponent, HomeRenderContext,
    MessageDialog, QuitDialog,
};
use crate::config::{Config, LibraryPaths};
use crate::model::{FontListing, MessageLevel, Modal, ModalStack};
use crate::services::{self, Exporter, FileVisibility, FontLocator};
use anyhow::Result;
use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use ratatui::{layout::Rect, Frame};
use std::path::Path;

// ═══════════════════════════════════════════════════════════════════════════════
// App Struct
// ═══════════════════════════════════════════════════════════════════════════════

pub struct App {
    /// Loaded fonts, filter and checkbox state
    pub listing: FontListing,

    /// Resolved cache locations
    pub paths: LibraryPaths,

    pub config: Config,

    exporter: Exporter,

    /// Modal overlay stack
    pub modals: ModalStack,

    /// Flag to indicate the app should quit
    pub should_quit: bool,

    /// Text of the status line
    pub status_message: String,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    pub home: HomeComponent,
    pub quit_dialog: QuitDialog,
    pub help_dialog: HelpDialog,
    pub destination_dialog: DestinationDialog,
    pub message_dialog: MessageDialog,
}

// ═══════════════════════════════════════════════════════════════════════════════
// App Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl App {
    /// Create the app and load the manifest
    pub fn new(config: Config, paths: LibraryPaths, visibility: Box<dyn FileVisibility>) -> App {
        let locator = FontLocator::new(paths.root.clone(), paths.font_subdirs.clone());
        let mut app = App {
            listing: FontListing::new(Vec::new()),
            paths,
            config,
            exporter: Exporter::new(locator, visibility),
            modals: ModalStack::new(),
            should_quit: false,
            status_message: "Ready".to_string(),
            home: HomeComponent::new(),
            quit_dialog: QuitDialog::default(),
            help_dialog: HelpDialog::default(),
            destination_dialog: DestinationDialog::default(),
            message_dialog: MessageDialog::default(),
        };
        app.load_fonts();
        app
    }

    /// (Re)load the manifest; a failure leaves the listing empty and shows
    /// an error dialog
    pub fn load_fonts(&mut self) {
        log::info!("Font directory: {}", self.exporter.locator().root().display());

        match services::load_manifest(&self.paths.manifest) {
            Ok(records) => {
                let count = records.len();
                self.listing.set_records(records);
                self.home.select_first(&self.listing);
                self.status_message = format!("Loaded {} fonts", count);
            }
            Err(e) => {
                let msg = format!("Could not load fonts: {}", e);
                log::error!("{}", msg);
                self.listing.set_records(Vec::new());
                self.home.select_first(&self.listing);
                self.show_message(MessageLevel::Error, msg);
                self.status_message = "Error loading fonts".to_string();
            }
        }
    }

    fn show_message(&mut self, level: MessageLevel, body: impl Into<String>) {
        let body = body.into();
        self.message_dialog.set_message(level, &body);
        self.modals.push(Modal::message(level, body));
    }

    /// Start an export: warn when nothing is checked, otherwise ask for
    /// the destination folder
    fn begin_export(&mut self) {
        let count = self.listing.selected_records().len();
        if count == 0 {
            self.show_message(MessageLevel::Warning, "No fonts selected");
            return;
        }
        self.destination_dialog
            .open(self.config.default_export_dir.as_deref(), count);
        self.modals.push(Modal::Destination);
    }

    /// Run the export pipeline and report the outcome
    pub fn export_to(&mut self, dest: &Path) {
        let selected = self.listing.selected_records();
        match self.exporter.export(&selected, dest) {
            Ok(outcome) => {
                let summary = outcome.summary();
                self.status_message =
                    format!("{} at {}", summary, Local::now().format("%H:%M:%S"));
                self.show_message(MessageLevel::Info, summary);
            }
            Err(e) => {
                let msg = format!("Error exporting fonts: {}", e);
                log::error!("{}", msg);
                self.status_message = "Export error".to_string();
                self.show_message(MessageLevel::Error, msg);
            }
        }
    }

    fn confirm_modal(&mut self) {
        if matches!(self.modals.top(), Some(Modal::Destination)) {
            self.modals.pop();
            match self.destination_dialog.chosen_path() {
                Some(dest) => self.export_to(&dest),
                None => log::debug!("Export cancelled: no destination chosen"),
            }
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for App {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(Some(Action::ForceQuit));
        }

        match self.modals.top() {
            Some(Modal::QuitConfirm) => self.quit_dialog.handle_key_event(key),
            Some(Modal::Help) => self.help_dialog.handle_key_event(key),
            Some(Modal::Destination) => self.destination_dialog.handle_key_event(key),
            Some(Modal::Message { .. }) => self.message_dialog.handle_key_event(key),
            None => self.home.handle_key_event(key),
        }
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        if self.modals.is_empty() {
            self.home.handle_mouse_event(mouse)
        } else {
            Ok(None)
        }
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            // ─────────────────────────────────────────────────────────────────
            // App Lifecycle
            // ─────────────────────────────────────────────────────────────────
            Action::Tick | Action::Resize(_, _) => {}
            Action::ForceQuit => {
                self.should_quit = true;
            }

            // ─────────────────────────────────────────────────────────────────
            // Navigation
            // ─────────────────────────────────────────────────────────────────
            Action::NextItem => self.home.next(&self.listing),
            Action::PrevItem => self.home.previous(&self.listing),
            Action::FirstItem => self.home.select_first(&self.listing),
            Action::LastItem => self.home.select_last(&self.listing),
            Action::PageDown => self.home.page_down(&self.listing),
            Action::PageUp => self.home.page_up(&self.listing),

            // ─────────────────────────────────────────────────────────────────
            // Modals
            // ─────────────────────────────────────────────────────────────────
            Action::OpenQuitDialog => {
                self.quit_dialog.pending_selection = self.listing.selected_count();
                self.modals.push(Modal::QuitConfirm);
            }
            Action::OpenHelp => {
                self.help_dialog.scroll_offset = 0;
                self.modals.push(Modal::Help);
            }
            Action::CloseModal => {
                self.modals.pop();
                // Reveal the message underneath, if any
                if let Some(Modal::Message { level, body }) = self.modals.top().cloned() {
                    self.message_dialog.set_message(level, &body);
                }
            }
            Action::ConfirmModal => self.confirm_modal(),

            // ─────────────────────────────────────────────────────────────────
            // Search
            // ─────────────────────────────────────────────────────────────────
            Action::EnterSearchMode => self.home.enter_search_mode(),
            Action::ExitSearchMode => self.home.exit_search_mode(),
            Action::SearchInput(c) => {
                self.listing.push_filter_char(c);
                self.home.select_first(&self.listing);
            }
            Action::SearchBackspace => {
                self.listing.pop_filter_char();
                self.home.select_first(&self.listing);
            }
            Action::ClearSearch => {
                self.listing.set_filter("");
                self.home.select_first(&self.listing);
            }

            // ─────────────────────────────────────────────────────────────────
            // Selection
            // ─────────────────────────────────────────────────────────────────
            Action::ToggleFocused => {
                if let Some(index) = self.home.focused_index() {
                    self.listing.toggle_at(index);
                }
            }
            Action::ToggleRow(index) => {
                if self.listing.toggle_at(index).is_some() {
                    self.home.list_state.select(Some(index));
                }
            }
            Action::SelectAll => self.listing.select_all(),
            Action::DeselectAll => self.listing.deselect_all(),

            // ─────────────────────────────────────────────────────────────────
            // Fonts
            // ─────────────────────────────────────────────────────────────────
            Action::ExportSelected => self.begin_export(),
            Action::ReloadManifest => self.load_fonts(),
        }

        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let ctx = HomeRenderContext {
            listing: &self.listing,
            status_message: &self.status_message,
        };
        draw_home_screen(frame, area, &mut self.home, &ctx)?;

        match self.modals.top() {
            Some(Modal::QuitConfirm) => self.quit_dialog.draw(frame, area)?,
            Some(Modal::Help) => self.help_dialog.draw(frame, area)?,
            Some(Modal::Destination) => self.destination_dialog.draw(frame, area)?,
            Some(Modal::Message { .. }) => self.message_dialog.draw(frame, area)?,
            None => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io;
    use tempfile::TempDir;

    struct NoopVisibility;

    impl FileVisibility for NoopVisibility {
        fn make_visible_and_writable(&self, _path: &Path) -> io::Result<()> {
            Ok(())
        }
    }

    const MANIFEST: &str = "<typekitSyncState><fonts>\
        <font><id>42</id><properties><familyName>Sample</familyName><variationName>Bold</variationName></properties></font>\
        <font><id>43</id><properties><familyName>Other</familyName><variationName>Italic</variationName></properties></font>\
        </fonts></typekitSyncState>";

    fn cache() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("c")).unwrap();
        fs::write(dir.path().join("c").join("entitlements.xml"), MANIFEST).unwrap();
        fs::create_dir_all(dir.path().join("r")).unwrap();
        fs::write(dir.path().join("r").join("42"), b"OTTO").unwrap();
        dir
    }

    fn app_for(cache: &TempDir) -> App {
        let paths = LibraryPaths {
            root: cache.path().to_path_buf(),
            manifest: cache.path().join("c").join("entitlements.xml"),
            font_subdirs: vec!["e".into(), "r".into(), "t".into()],
        };
        App::new(Config::default(), paths, Box::new(NoopVisibility))
    }

    #[test]
    fn test_loads_fonts_on_start() {
        let cache = cache();
        let app = app_for(&cache);
        assert_eq!(app.listing.total_len(), 2);
        assert_eq!(app.status_message, "Loaded 2 fonts");
        assert!(app.modals.is_empty());
    }

    #[test]
    fn test_missing_manifest_shows_error_and_empty_list() {
        let cache = TempDir::new().unwrap();
        let app = app_for(&cache);
        assert_eq!(app.listing.total_len(), 0);
        assert!(matches!(
            app.modals.top(),
            Some(Modal::Message {
                level: MessageLevel::Error,
                ..
            })
        ));
        assert_eq!(app.status_message, "Error loading fonts");
    }

    #[test]
    fn test_export_without_selection_warns() {
        let cache = cache();
        let mut app = app_for(&cache);
        app.update(Action::ExportSelected).unwrap();
        assert_eq!(
            app.modals.top(),
            Some(&Modal::message(MessageLevel::Warning, "No fonts selected"))
        );
    }

    #[test]
    fn test_export_flow() {
        let cache = cache();
        let dest = TempDir::new().unwrap();
        let mut app = app_for(&cache);

        for c in "sample".chars() {
            app.update(Action::SearchInput(c)).unwrap();
        }
        app.update(Action::SelectAll).unwrap();
        app.update(Action::ExportSelected).unwrap();
        assert_eq!(app.modals.top(), Some(&Modal::Destination));

        app.destination_dialog.input = dest.path().display().to_string();
        app.update(Action::ConfirmModal).unwrap();

        assert_eq!(
            app.modals.top(),
            Some(&Modal::message(
                MessageLevel::Info,
                "Successfully exported 1 fonts"
            ))
        );
        assert!(app.status_message.starts_with("Successfully exported 1 fonts at "));
        assert!(dest.path().join("Sample - Bold.otf").is_file());
    }

    #[test]
    fn test_blank_destination_cancels_silently() {
        let cache = cache();
        let mut app = app_for(&cache);
        app.update(Action::SelectAll).unwrap();
        app.update(Action::ExportSelected).unwrap();

        app.destination_dialog.input.clear();
        app.update(Action::ConfirmModal).unwrap();

        assert!(app.modals.is_empty());
        assert_eq!(app.status_message, "Loaded 2 fonts");
    }

    #[test]
    fn test_search_resets_checked_fonts() {
        let cache = cache();
        let mut app = app_for(&cache);
        app.update(Action::SelectAll).unwrap();
        assert_eq!(app.listing.selected_count(), 2);

        app.update(Action::SearchInput('o')).unwrap();
        assert_eq!(app.listing.selected_count(), 0);
    }

    #[test]
    fn test_toggle_focused_and_row() {
        let cache = cache();
        let mut app = app_for(&cache);
        app.update(Action::ToggleFocused).unwrap();
        assert!(app.listing.is_selected("42"));

        app.update(Action::ToggleRow(1)).unwrap();
        assert!(app.listing.is_selected("43"));
        assert_eq!(app.home.focused_index(), Some(1));

        app.update(Action::ToggleRow(9)).unwrap();
        assert_eq!(app.home.focused_index(), Some(1));
    }

    #[test]
    fn test_ctrl_c_quits_from_anywhere() {
        let cache = cache();
        let mut app = app_for(&cache);
        app.update(Action::OpenHelp).unwrap();
        let action = app
            .handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))
            .unwrap();
        assert_eq!(action, Some(Action::ForceQuit));
        app.update(Action::ForceQuit).unwrap();
        assert!(app.should_quit);
    }
}
