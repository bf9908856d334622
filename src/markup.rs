use crate::content::ContentRecord;

/// Below this the wrapped output stops being readable; clamp instead of
/// shrinking further.
pub const MIN_RENDER_WIDTH: usize = 20;

/// Convert a lesson body (an HTML fragment) into terminal lines wrapped
/// to `width` columns.
pub fn render(body: &str, width: usize) -> Vec<String> {
    let width = width.max(MIN_RENDER_WIDTH);
    match html2text::from_read(body.as_bytes(), width) {
        Ok(text) => text.lines().map(str::to_string).collect(),
        Err(err) => {
            crate::logging::debug(format!("falling back to plain wrapping: {}", err));
            textwrap::wrap(body, width)
                .into_iter()
                .map(|line| line.into_owned())
                .collect()
        }
    }
}

/// Plain-text rendition of a whole record, for the --dump flag.
pub fn render_plain(record: &ContentRecord, width: usize) -> String {
    let mut out = String::new();
    out.push_str(record.title);
    out.push('\n');
    out.push_str(&format!(
        "{} | {}\n\n",
        record.reading_time, record.difficulty
    ));
    for line in render(record.body, width) {
        out.push_str(&line);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentStore;

    #[test]
    fn test_render_strips_markup() {
        let lines = render("<p>Hello, <strong>World</strong>!</p>", 40);
        let text = lines.join(" ");
        assert!(text.contains("Hello"));
        assert!(!text.contains("<p>"));
        assert!(!text.contains("<strong>"));
    }

    #[test]
    fn test_render_wraps_to_width() {
        let body = "<p>one two three four five six seven eight nine ten \
                    eleven twelve thirteen fourteen</p>";
        for line in render(body, 30) {
            assert!(line.chars().count() <= 30, "line too wide: {:?}", line);
        }
    }

    #[test]
    fn test_render_clamps_tiny_width() {
        // A width below the minimum must not panic or produce nothing.
        let lines = render("<p>some words here</p>", 3);
        assert!(!lines.is_empty());
    }

    #[test]
    fn test_render_entities() {
        let lines = render("<p>&lt;br&gt; inserts a break</p>", 60);
        assert!(lines.join(" ").contains("<br> inserts a break"));
    }

    #[test]
    fn test_render_plain_has_header() {
        let store = ContentStore::curriculum();
        let record = store.lookup("html-introduction");
        let text = render_plain(record, 72);
        assert!(text.starts_with("HTML Introduction\n"));
        assert!(text.contains("5 min read | Beginner"));
    }

    #[test]
    fn test_every_lesson_renders() {
        let store = ContentStore::curriculum();
        for key in store.keys() {
            let record = store.lookup(key);
            let lines = render(record.body, 72);
            assert!(!lines.is_empty(), "lesson {} rendered empty", key);
        }
    }
}
