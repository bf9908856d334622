//! The view controller: translates input events into UI state
//! transitions and enforces the single-select invariants over the
//! navigation. Rendering is a pure projection of [`UiState`] done by the
//! `ui` modules, so everything here is testable without a terminal.

use eyre::Result;

use crate::content::{ContentRecord, ContentStore};
use crate::prefs::PrefStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn flipped(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// The string written to the preference store.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Anything other than a stored "dark" means light, including an
    /// absent or unrecognized value.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    /// The status-line affordance shows the theme a toggle would switch
    /// to, not the current one.
    pub fn toggle_hint(self) -> &'static str {
        match self {
            Theme::Light => "dark",
            Theme::Dark => "light",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Content,
    Sidebar,
}

/// The one explicit UI state object. Mutated only by the controller's
/// handlers; read by the projection each draw.
#[derive(Debug, Clone, PartialEq)]
pub struct UiState {
    pub theme: Theme,
    pub is_narrow: bool,
    pub sidebar_open: bool,
    pub active_key: String,
    pub expanded_section: Option<String>,
    pub focus: Focus,
    pub sidebar_cursor: usize,
    pub scroll_row: usize,
    pub show_help: bool,
    pub should_quit: bool,
}

/// One row of the flattened sidebar: section headers always, links only
/// under the expanded section.
#[derive(Debug, Clone, PartialEq)]
pub enum SidebarRow {
    Header {
        id: &'static str,
        title: &'static str,
        expanded: bool,
    },
    Link {
        key: &'static str,
        label: &'static str,
        active: bool,
    },
}

pub struct Controller {
    store: ContentStore,
    prefs: Box<dyn PrefStore>,
    narrow_width: u16,
    pub ui: UiState,
}

impl Controller {
    /// Builds the initial state: persisted theme (default light), layout
    /// mode from the current width, the first lesson active with its
    /// section expanded. Fails fast if the navigation references a
    /// lesson the store does not have.
    pub fn new(
        store: ContentStore,
        prefs: Box<dyn PrefStore>,
        narrow_width: u16,
        width: u16,
        start_key: Option<&str>,
    ) -> Result<Self> {
        store.validate()?;

        let theme = Theme::from_stored(prefs.theme()?.as_deref());
        let active_key = start_key.unwrap_or_else(|| store.first_key()).to_string();
        let expanded_section = store.section_of(&active_key).map(str::to_string);

        let ui = UiState {
            theme,
            is_narrow: width <= narrow_width,
            sidebar_open: false,
            active_key,
            expanded_section,
            focus: Focus::Content,
            sidebar_cursor: 0,
            scroll_row: 0,
            show_help: false,
            should_quit: false,
        };

        Ok(Self {
            store,
            prefs,
            narrow_width,
            ui,
        })
    }

    pub fn store(&self) -> &ContentStore {
        &self.store
    }

    pub fn prefs(&self) -> &dyn PrefStore {
        self.prefs.as_ref()
    }

    /// The record the content pane shows right now. Unknown keys come
    /// back as the placeholder, so this always renders something.
    pub fn active_record(&self) -> &ContentRecord {
        self.store.lookup(&self.ui.active_key)
    }

    /// Flip light/dark and write the choice through to the preference
    /// store. Two calls restore the original theme.
    pub fn toggle_theme(&mut self) -> Result<()> {
        self.ui.theme = self.ui.theme.flipped();
        self.prefs.set_theme(self.ui.theme.as_str())?;
        Ok(())
    }

    /// Accordion toggle: collapse everything else, then flip the target.
    /// Toggling the expanded section leaves nothing expanded.
    pub fn toggle_section(&mut self, section_id: &str) {
        if self.ui.expanded_section.as_deref() == Some(section_id) {
            self.ui.expanded_section = None;
        } else {
            self.ui.expanded_section = Some(section_id.to_string());
        }
        self.clamp_sidebar_cursor();
    }

    /// Activate a navigation link: the key becomes the active one, the
    /// pane scrolls back to the top, and on a narrow layout an open
    /// overlay closes.
    pub fn handle_nav_click(&mut self, key: &str) {
        self.ui.active_key = key.to_string();
        self.ui.scroll_row = 0;

        if self.ui.is_narrow && self.ui.sidebar_open {
            self.close_sidebar();
        }
    }

    /// Narrow layout only: flip the overlay. The backdrop, the toggle
    /// affordance and the suppressed content scrolling all derive from
    /// this flag in the projection.
    pub fn toggle_sidebar(&mut self) {
        self.ui.sidebar_open = !self.ui.sidebar_open;
        if self.ui.sidebar_open {
            self.clamp_sidebar_cursor();
        }
    }

    /// Guarded no-op when the overlay is already closed.
    pub fn close_sidebar(&mut self) {
        if self.ui.sidebar_open {
            self.toggle_sidebar();
        }
    }

    /// What the menu key does depends on the layout: overlay toggle when
    /// narrow, focus switch between panel and pane when wide.
    pub fn handle_menu_key(&mut self) {
        if self.ui.is_narrow {
            self.toggle_sidebar();
        } else {
            self.ui.focus = match self.ui.focus {
                Focus::Content => Focus::Sidebar,
                Focus::Sidebar => Focus::Content,
            };
            if self.ui.focus == Focus::Sidebar {
                self.clamp_sidebar_cursor();
            }
        }
    }

    /// Escape dismisses whatever is on top: help, then the overlay, then
    /// sidebar focus.
    pub fn handle_escape(&mut self) {
        if self.ui.show_help {
            self.ui.show_help = false;
        } else if self.ui.is_narrow {
            self.close_sidebar();
        } else if self.ui.focus == Focus::Sidebar {
            self.ui.focus = Focus::Content;
        }
    }

    /// Recompute the layout mode on every resize event; only the final
    /// width matters. Leaving narrow mode with the overlay up would
    /// strand it over the fixed panel, so it is forced closed.
    pub fn handle_resize(&mut self, width: u16) {
        let was_narrow = self.ui.is_narrow;
        self.ui.is_narrow = width <= self.narrow_width;

        if was_narrow && !self.ui.is_narrow {
            self.close_sidebar();
        }
        if !was_narrow && self.ui.is_narrow && self.ui.focus == Focus::Sidebar {
            self.ui.focus = Focus::Content;
        }
    }

    /// Whether keyboard input currently goes to the sidebar.
    pub fn sidebar_focused(&self) -> bool {
        if self.ui.is_narrow {
            self.ui.sidebar_open
        } else {
            self.ui.focus == Focus::Sidebar
        }
    }

    /// The sidebar flattened for rendering and cursor movement.
    pub fn sidebar_rows(&self) -> Vec<SidebarRow> {
        let mut rows = Vec::new();
        for section in self.store.sections() {
            let expanded = self.ui.expanded_section.as_deref() == Some(section.id);
            rows.push(SidebarRow::Header {
                id: section.id,
                title: section.title,
                expanded,
            });
            if expanded {
                for link in section.links {
                    rows.push(SidebarRow::Link {
                        key: link.key,
                        label: link.label,
                        active: self.ui.active_key == link.key,
                    });
                }
            }
        }
        rows
    }

    pub fn sidebar_cursor_down(&mut self) {
        let rows = self.sidebar_rows().len();
        if rows > 0 {
            self.ui.sidebar_cursor = (self.ui.sidebar_cursor + 1).min(rows - 1);
        }
    }

    pub fn sidebar_cursor_up(&mut self) {
        self.ui.sidebar_cursor = self.ui.sidebar_cursor.saturating_sub(1);
    }

    /// Enter on the sidebar: headers toggle their section, links
    /// activate their lesson.
    pub fn activate_sidebar_cursor(&mut self) {
        let row = self.sidebar_rows().into_iter().nth(self.ui.sidebar_cursor);
        match row {
            Some(SidebarRow::Header { id, .. }) => self.toggle_section(id),
            Some(SidebarRow::Link { key, .. }) => self.handle_nav_click(key),
            None => {}
        }
    }

    fn clamp_sidebar_cursor(&mut self) {
        let rows = self.sidebar_rows().len();
        if rows == 0 {
            self.ui.sidebar_cursor = 0;
        } else if self.ui.sidebar_cursor >= rows {
            self.ui.sidebar_cursor = rows - 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefs::MemoryPrefs;

    const WIDE: u16 = 120;
    const NARROW: u16 = 60;

    fn controller_at(width: u16) -> Controller {
        Controller::new(
            ContentStore::curriculum(),
            Box::new(MemoryPrefs::new()),
            crate::settings::DEFAULT_NARROW_WIDTH,
            width,
            None,
        )
        .unwrap()
    }

    fn expanded_count(controller: &Controller) -> usize {
        controller
            .sidebar_rows()
            .iter()
            .filter(|row| matches!(row, SidebarRow::Header { expanded: true, .. }))
            .count()
    }

    #[test]
    fn test_fresh_start_defaults() {
        let controller = controller_at(WIDE);
        assert_eq!(controller.ui.theme, Theme::Light);
        assert_eq!(controller.ui.active_key, "html-introduction");
        assert_eq!(controller.active_record().title, "HTML Introduction");
        assert!(!controller.ui.is_narrow);
        assert!(!controller.ui.sidebar_open);
        // The section holding the first lesson starts expanded
        assert_eq!(
            controller.ui.expanded_section.as_deref(),
            Some("getting-started")
        );
    }

    #[test]
    fn test_stored_theme_is_honored() {
        let controller = Controller::new(
            ContentStore::curriculum(),
            Box::new(MemoryPrefs::with_theme("dark")),
            crate::settings::DEFAULT_NARROW_WIDTH,
            WIDE,
            None,
        )
        .unwrap();
        assert_eq!(controller.ui.theme, Theme::Dark);
    }

    #[test]
    fn test_unrecognized_stored_theme_defaults_to_light() {
        let controller = Controller::new(
            ContentStore::curriculum(),
            Box::new(MemoryPrefs::with_theme("solarized")),
            crate::settings::DEFAULT_NARROW_WIDTH,
            WIDE,
            None,
        )
        .unwrap();
        assert_eq!(controller.ui.theme, Theme::Light);
    }

    #[test]
    fn test_toggle_theme_is_an_involution() {
        let mut controller = controller_at(WIDE);
        let original = controller.ui.theme;

        controller.toggle_theme().unwrap();
        assert_eq!(controller.ui.theme, Theme::Dark);
        assert_eq!(controller.prefs().theme().unwrap().as_deref(), Some("dark"));

        controller.toggle_theme().unwrap();
        assert_eq!(controller.ui.theme, original);
        assert_eq!(
            controller.prefs().theme().unwrap().as_deref(),
            Some("light")
        );
    }

    #[test]
    fn test_toggle_hint_names_the_other_theme() {
        assert_eq!(Theme::Light.toggle_hint(), "dark");
        assert_eq!(Theme::Dark.toggle_hint(), "light");
    }

    #[test]
    fn test_accordion_single_select() {
        let mut controller = controller_at(WIDE);

        controller.toggle_section("fundamentals");
        assert_eq!(
            controller.ui.expanded_section.as_deref(),
            Some("fundamentals")
        );
        assert_eq!(expanded_count(&controller), 1);

        controller.toggle_section("core-tags");
        assert_eq!(controller.ui.expanded_section.as_deref(), Some("core-tags"));
        assert_eq!(expanded_count(&controller), 1);

        // Toggling the expanded section collapses it, none re-expands
        controller.toggle_section("core-tags");
        assert_eq!(controller.ui.expanded_section, None);
        assert_eq!(expanded_count(&controller), 0);
    }

    #[test]
    fn test_at_most_one_section_expanded_for_any_sequence() {
        let mut controller = controller_at(WIDE);
        let sequence = [
            "getting-started",
            "getting-started",
            "fundamentals",
            "core-tags",
            "fundamentals",
            "fundamentals",
            "getting-started",
        ];
        for id in sequence {
            controller.toggle_section(id);
            assert!(expanded_count(&controller) <= 1);
        }
    }

    #[test]
    fn test_nav_click_marks_exactly_one_link_active() {
        let mut controller = controller_at(WIDE);
        controller.toggle_section("fundamentals");
        controller.handle_nav_click("html-tags");

        assert_eq!(controller.ui.active_key, "html-tags");
        assert_eq!(controller.active_record().title, "HTML Tags");

        let active: Vec<_> = controller
            .sidebar_rows()
            .into_iter()
            .filter(|row| matches!(row, SidebarRow::Link { active: true, .. }))
            .collect();
        assert_eq!(active.len(), 1);
        assert!(
            matches!(active[0], SidebarRow::Link { key, .. } if key == "html-tags")
        );
    }

    #[test]
    fn test_nav_click_resets_scroll() {
        let mut controller = controller_at(WIDE);
        controller.ui.scroll_row = 42;
        controller.handle_nav_click("html-elements");
        assert_eq!(controller.ui.scroll_row, 0);
    }

    #[test]
    fn test_nav_click_on_unknown_key_renders_placeholder() {
        let mut controller = controller_at(WIDE);
        controller.handle_nav_click("css-introduction");
        assert_eq!(controller.active_record().title, "Content Not Found");
    }

    #[test]
    fn test_narrow_nav_click_closes_open_overlay() {
        let mut controller = controller_at(NARROW);
        assert!(controller.ui.is_narrow);

        controller.toggle_sidebar();
        assert!(controller.ui.sidebar_open);

        controller.handle_nav_click("html-working");
        assert!(!controller.ui.sidebar_open);
        assert_eq!(controller.ui.active_key, "html-working");
    }

    #[test]
    fn test_wide_nav_click_leaves_sidebar_alone() {
        let mut controller = controller_at(WIDE);
        controller.handle_nav_click("html-working");
        assert!(!controller.ui.sidebar_open);
    }

    #[test]
    fn test_close_sidebar_is_a_guarded_no_op() {
        let mut controller = controller_at(NARROW);
        assert!(!controller.ui.sidebar_open);
        controller.close_sidebar();
        assert!(!controller.ui.sidebar_open);
    }

    #[test]
    fn test_resize_to_wide_closes_open_overlay() {
        let mut controller = controller_at(NARROW);
        controller.toggle_sidebar();
        assert!(controller.ui.sidebar_open);

        controller.handle_resize(WIDE);
        assert!(!controller.ui.is_narrow);
        assert!(!controller.ui.sidebar_open);
    }

    #[test]
    fn test_resize_to_wide_with_closed_overlay_stays_closed() {
        let mut controller = controller_at(NARROW);
        controller.handle_resize(WIDE);
        assert!(!controller.ui.sidebar_open);
    }

    #[test]
    fn test_resize_to_narrow_drops_sidebar_focus() {
        let mut controller = controller_at(WIDE);
        controller.handle_menu_key();
        assert_eq!(controller.ui.focus, Focus::Sidebar);

        controller.handle_resize(NARROW);
        assert_eq!(controller.ui.focus, Focus::Content);
        assert!(controller.ui.is_narrow);
    }

    #[test]
    fn test_menu_key_per_layout() {
        let mut narrow = controller_at(NARROW);
        narrow.handle_menu_key();
        assert!(narrow.ui.sidebar_open);
        narrow.handle_menu_key();
        assert!(!narrow.ui.sidebar_open);

        let mut wide = controller_at(WIDE);
        wide.handle_menu_key();
        assert_eq!(wide.ui.focus, Focus::Sidebar);
        assert!(!wide.ui.sidebar_open);
        wide.handle_menu_key();
        assert_eq!(wide.ui.focus, Focus::Content);
    }

    #[test]
    fn test_escape_dismisses_topmost() {
        let mut controller = controller_at(NARROW);
        controller.toggle_sidebar();
        controller.ui.show_help = true;

        controller.handle_escape();
        assert!(!controller.ui.show_help);
        assert!(controller.ui.sidebar_open);

        controller.handle_escape();
        assert!(!controller.ui.sidebar_open);
    }

    #[test]
    fn test_sidebar_cursor_activation() {
        let mut controller = controller_at(WIDE);
        // Row 0 is the expanded "Getting Started" header; collapse it
        controller.ui.sidebar_cursor = 0;
        controller.activate_sidebar_cursor();
        assert_eq!(controller.ui.expanded_section, None);
        assert_eq!(controller.sidebar_rows().len(), 3);

        // Expand it again and activate its second link
        controller.activate_sidebar_cursor();
        controller.ui.sidebar_cursor = 2;
        controller.activate_sidebar_cursor();
        assert_eq!(controller.ui.active_key, "html-working");
    }

    #[test]
    fn test_sidebar_cursor_clamps_after_collapse() {
        let mut controller = controller_at(WIDE);
        // Cursor deep inside the expanded section
        controller.ui.sidebar_cursor = 4;
        controller.toggle_section("getting-started");
        assert!(controller.ui.sidebar_cursor < controller.sidebar_rows().len());
    }

    #[test]
    fn test_sidebar_cursor_bounds() {
        let mut controller = controller_at(WIDE);
        let rows = controller.sidebar_rows().len();
        for _ in 0..rows + 5 {
            controller.sidebar_cursor_down();
        }
        assert_eq!(controller.ui.sidebar_cursor, rows - 1);

        for _ in 0..rows + 5 {
            controller.sidebar_cursor_up();
        }
        assert_eq!(controller.ui.sidebar_cursor, 0);
    }

    #[test]
    fn test_start_key_expands_its_section() {
        let controller = Controller::new(
            ContentStore::curriculum(),
            Box::new(MemoryPrefs::new()),
            crate::settings::DEFAULT_NARROW_WIDTH,
            WIDE,
            Some("heading-tags"),
        )
        .unwrap();
        assert_eq!(controller.ui.active_key, "heading-tags");
        assert_eq!(controller.ui.expanded_section.as_deref(), Some("core-tags"));
    }
}
