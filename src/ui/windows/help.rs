use ratatui::{
    Frame,
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::settings::Keymap;

pub struct HelpWindow;

impl HelpWindow {
    /// Help text assembled from the active keymap, so rebound keys show
    /// up correctly.
    pub fn lines(keymap: &Keymap) -> Vec<String> {
        vec![
            " Key Bindings:".to_string(),
            format!("   {:<12} Line Up", format!("{} / Up", keymap.scroll_up)),
            format!("   {:<12} Line Down", format!("{} / Down", keymap.scroll_down)),
            format!("   {:<12} Page Up", format!("{} / PgUp", keymap.page_up)),
            format!("   {:<12} Page Down", format!("{} / PgDn", keymap.page_down)),
            format!("   {:<12} Top", keymap.top),
            format!("   {:<12} Bottom", keymap.bottom),
            String::new(),
            " Navigation:".to_string(),
            format!("   {:<12} Lesson Menu", keymap.toggle_menu),
            "   Enter        Open Lesson / Fold Section".to_string(),
            "   Esc          Close Menu / Back".to_string(),
            String::new(),
            " Appearance:".to_string(),
            format!("   {:<12} Switch Light/Dark", keymap.switch_color),
            String::new(),
            format!("   {:<12} Help", keymap.help),
            format!("   {:<12} Quit / Close Window", keymap.quit),
        ]
    }

    pub fn get_total_lines(keymap: &Keymap) -> usize {
        Self::lines(keymap).len()
    }

    pub fn render(frame: &mut Frame, area: Rect, keymap: &Keymap, scroll_offset: u16) {
        let help_content: Vec<Line> = Self::lines(keymap).into_iter().map(Line::from).collect();

        let max_width = help_content.iter().map(|l| l.width()).max().unwrap_or(0) as u16;
        let width = (max_width + 4).min(area.width);
        let height = (help_content.len() as u16 + 2).min(area.height);

        let x = area.x + (area.width - width) / 2;
        let y = area.y + (area.height - height) / 2;
        let popup_area = Rect::new(x, y, width, height);

        frame.render_widget(Clear, popup_area);

        let help_paragraph = Paragraph::new(help_content)
            .block(Block::default().title("Help").borders(Borders::ALL))
            .scroll((scroll_offset, 0));

        frame.render_widget(help_paragraph, popup_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_reflects_rebound_keys() {
        let mut keymap = Keymap::default();
        keymap.toggle_menu = "m".to_string();
        let text = HelpWindow::lines(&keymap).join("\n");
        assert!(text.contains("m"));
        assert!(text.contains("Lesson Menu"));
    }

    #[test]
    fn test_total_lines_matches() {
        let keymap = Keymap::default();
        assert_eq!(
            HelpWindow::get_total_lines(&keymap),
            HelpWindow::lines(&keymap).len()
        );
    }
}
