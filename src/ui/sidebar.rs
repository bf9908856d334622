use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, List, ListItem},
};

use crate::controller::SidebarRow;
use crate::ui::windows::centered_popup_area;

/// The navigation sidebar: section headers with their fold marker, the
/// expanded section's links underneath, the active lesson marked. Drawn
/// either as the fixed left panel (wide layout) or as a centered overlay
/// popup (narrow layout).
pub struct Sidebar;

impl Sidebar {
    pub fn render_panel(
        frame: &mut Frame,
        area: Rect,
        rows: &[SidebarRow],
        cursor: usize,
        focused: bool,
        base: Style,
    ) {
        Self::render_list(frame, area, rows, cursor, focused, base, " Lessons ");
    }

    /// The narrow-layout overlay. Clearing the popup area is what plays
    /// the backdrop role: content under it is hidden while the menu is
    /// up.
    pub fn render_overlay(frame: &mut Frame, area: Rect, rows: &[SidebarRow], cursor: usize, base: Style) {
        let popup_area = centered_popup_area(area, 70, 80);
        frame.render_widget(Clear, popup_area);
        Self::render_list(frame, popup_area, rows, cursor, true, base, " Lessons (Esc closes) ");
    }

    fn render_list(
        frame: &mut Frame,
        area: Rect,
        rows: &[SidebarRow],
        cursor: usize,
        focused: bool,
        base: Style,
        title: &str,
    ) {
        let items: Vec<ListItem> = rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let (content, mut style) = match row {
                    SidebarRow::Header {
                        title, expanded, ..
                    } => {
                        let marker = if *expanded { "v" } else { ">" };
                        (
                            format!("{} {}", marker, title),
                            base.add_modifier(Modifier::BOLD),
                        )
                    }
                    SidebarRow::Link { label, active, .. } => {
                        let marker = if *active { "*" } else { " " };
                        let style = if *active {
                            base.add_modifier(Modifier::UNDERLINED)
                        } else {
                            base
                        };
                        (format!("  {} {}", marker, label), style)
                    }
                };

                if focused && i == cursor {
                    style = Style::default().bg(Color::Blue).fg(Color::White);
                }

                ListItem::new(Line::from(content)).style(style)
            })
            .collect();

        let border_style = if focused {
            base
        } else {
            base.add_modifier(Modifier::DIM)
        };
        let list = List::new(items).block(
            Block::default()
                .title(title.to_string())
                .borders(Borders::ALL)
                .border_style(border_style)
                .style(base),
        );

        frame.render_widget(list, area);
    }
}
