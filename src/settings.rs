use serde::{Deserialize, Serialize};

/// Terminal width at or below which the layout switches to the
/// narrow (overlay sidebar) mode.
pub const DEFAULT_NARROW_WIDTH: u16 = 90;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub mouse_support: bool,
    pub narrow_width: u16,
    pub sidebar_width: u16,
    pub dark_color_fg: i16,
    pub dark_color_bg: i16,
    pub light_color_fg: i16,
    pub light_color_bg: i16,
}

impl Settings {
    pub fn merge(&mut self, other: Self) {
        self.mouse_support = other.mouse_support;
        self.narrow_width = other.narrow_width;
        self.sidebar_width = other.sidebar_width;
        self.dark_color_fg = other.dark_color_fg;
        self.dark_color_bg = other.dark_color_bg;
        self.light_color_fg = other.light_color_fg;
        self.light_color_bg = other.light_color_bg;
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mouse_support: false,
            narrow_width: DEFAULT_NARROW_WIDTH,
            sidebar_width: 32,
            dark_color_fg: 252,
            dark_color_bg: 235,
            light_color_fg: 238,
            light_color_bg: 253,
        }
    }
}

/// Single-key bindings, rebindable from the configuration file.
/// Arrow keys, Enter and Escape are fixed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Keymap {
    pub scroll_up: String,
    pub scroll_down: String,
    pub page_up: String,
    pub page_down: String,
    pub top: String,
    pub bottom: String,
    pub toggle_menu: String,
    pub switch_color: String,
    pub help: String,
    pub quit: String,
}

impl Default for Keymap {
    fn default() -> Self {
        Self {
            scroll_up: "k".to_string(),
            scroll_down: "j".to_string(),
            page_up: "h".to_string(),
            page_down: "l".to_string(),
            top: "g".to_string(),
            bottom: "G".to_string(),
            toggle_menu: "t".to_string(),
            switch_color: "c".to_string(),
            help: "?".to_string(),
            quit: "q".to_string(),
        }
    }
}

impl Keymap {
    pub fn merge(&mut self, other: Self) {
        self.scroll_up = other.scroll_up;
        self.scroll_down = other.scroll_down;
        self.page_up = other.page_up;
        self.page_down = other.page_down;
        self.top = other.top;
        self.bottom = other.bottom;
        self.toggle_menu = other.toggle_menu;
        self.switch_color = other.switch_color;
        self.help = other.help;
        self.quit = other.quit;
    }

    /// First character of a binding, for matching against key events.
    /// Empty bindings never match.
    pub fn key_of(binding: &str) -> Option<char> {
        binding.chars().next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_default() {
        let settings = Settings::default();
        assert_eq!(settings.narrow_width, DEFAULT_NARROW_WIDTH);
        assert_eq!(settings.sidebar_width, 32);
        assert!(!settings.mouse_support);
    }

    #[test]
    fn test_settings_merge() {
        let mut settings = Settings::default();
        let other = Settings {
            narrow_width: 60,
            dark_color_bg: 16,
            ..Settings::default()
        };
        settings.merge(other);
        assert_eq!(settings.narrow_width, 60);
        assert_eq!(settings.dark_color_bg, 16);
    }

    #[test]
    fn test_settings_partial_json() {
        let settings: Settings = serde_json::from_str(r#"{"narrow_width": 72}"#).unwrap();
        assert_eq!(settings.narrow_width, 72);
        // Unspecified fields keep their defaults
        assert_eq!(settings.light_color_bg, 253);
    }

    #[test]
    fn test_keymap_default_keys() {
        let keymap = Keymap::default();
        assert_eq!(Keymap::key_of(&keymap.toggle_menu), Some('t'));
        assert_eq!(Keymap::key_of(&keymap.switch_color), Some('c'));
        assert_eq!(Keymap::key_of(""), None);
    }
}
