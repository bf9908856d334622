use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::content::ContentRecord;

/// Rows inside the pane taken by chrome rather than body text: the meta
/// line and the blank line under it.
const META_ROWS: u16 = 2;

/// The content pane: a bordered pane titled with the record, a pinned
/// meta line (reading time, difficulty), then the body lines from the
/// current scroll row down.
pub struct ContentPane;

impl ContentPane {
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        record: &ContentRecord,
        body: &[String],
        scroll_row: usize,
        base: Style,
    ) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", record.title))
            .style(base);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if inner.height == 0 {
            return;
        }

        let meta_area = Rect {
            height: inner.height.min(1),
            ..inner
        };
        let meta = Line::from(vec![
            Span::styled(
                record.reading_time,
                base.add_modifier(Modifier::ITALIC | Modifier::DIM),
            ),
            Span::styled("  |  ", base.add_modifier(Modifier::DIM)),
            Span::styled(
                record.difficulty.to_string(),
                base.add_modifier(Modifier::ITALIC | Modifier::DIM),
            ),
        ]);
        frame.render_widget(Paragraph::new(meta), meta_area);

        if inner.height <= META_ROWS {
            return;
        }
        let body_area = Rect {
            y: inner.y + META_ROWS,
            height: inner.height - META_ROWS,
            ..inner
        };

        let height = body_area.height as usize;
        let start_line = scroll_row.min(body.len());
        let end_line = (start_line + height).min(body.len());

        let visible_lines: Vec<Line> = body
            .get(start_line..end_line)
            .unwrap_or(&[])
            .iter()
            .map(|line| Line::from(line.clone()))
            .collect();

        frame.render_widget(Paragraph::new(visible_lines), body_area);
    }

    /// Rows of body text visible in a pane of the given height.
    pub fn view_height(area_height: u16) -> usize {
        area_height.saturating_sub(2 + META_ROWS) as usize
    }

    /// Largest useful scroll row: past this the pane only shrinks.
    pub fn max_scroll(total_lines: usize, view_height: usize) -> usize {
        total_lines.saturating_sub(view_height.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_height_accounts_for_chrome() {
        // 2 border rows plus meta rows
        assert_eq!(ContentPane::view_height(30), 30 - 2 - META_ROWS as usize);
        assert_eq!(ContentPane::view_height(3), 0);
    }

    #[test]
    fn test_max_scroll() {
        assert_eq!(ContentPane::max_scroll(100, 20), 80);
        assert_eq!(ContentPane::max_scroll(10, 20), 0);
        assert_eq!(ContentPane::max_scroll(10, 0), 9);
    }
}
