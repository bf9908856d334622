use eyre::Result;
use std::collections::HashMap;
use std::fmt;

use crate::lessons;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        };
        write!(f, "{}", label)
    }
}

/// One lesson: what the content pane renders. The body is a trusted,
/// compiled-in HTML fragment; it goes through html2text, never a browser.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentRecord {
    pub title: &'static str,
    pub reading_time: &'static str,
    pub difficulty: Difficulty,
    pub body: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NavLink {
    pub key: &'static str,
    pub label: &'static str,
}

/// A collapsible group of navigation links. At most one section is
/// expanded at a time; that state lives in the controller, not here.
#[derive(Debug, Clone, PartialEq)]
pub struct NavSection {
    pub id: &'static str,
    pub title: &'static str,
    pub links: &'static [NavLink],
}

/// Returned for any key with no record, so lookup always renders
/// something.
pub const PLACEHOLDER: ContentRecord = ContentRecord {
    title: "Content Not Found",
    reading_time: "1 min read",
    difficulty: Difficulty::Beginner,
    body: "<p>This content is under construction. Please check back later.</p>",
};

pub struct ContentStore {
    records: HashMap<&'static str, &'static ContentRecord>,
    sections: &'static [NavSection],
}

impl ContentStore {
    /// The compiled-in HTML curriculum.
    pub fn curriculum() -> Self {
        let mut records = HashMap::new();
        for (key, record) in lessons::LESSONS {
            records.insert(*key, record);
        }
        Self {
            records,
            sections: lessons::SECTIONS,
        }
    }

    pub fn get(&self, key: &str) -> Option<&ContentRecord> {
        self.records.get(key).copied()
    }

    /// Exact key match; unknown keys degrade to [`PLACEHOLDER`] rather
    /// than erroring.
    pub fn lookup(&self, key: &str) -> &ContentRecord {
        self.get(key).unwrap_or(&PLACEHOLDER)
    }

    pub fn sections(&self) -> &[NavSection] {
        self.sections
    }

    /// The curriculum's first lesson, rendered on startup. An empty
    /// navigation yields a key that resolves to the placeholder.
    pub fn first_key(&self) -> &'static str {
        self.sections
            .iter()
            .flat_map(|s| s.links.iter())
            .map(|l| l.key)
            .next()
            .unwrap_or("")
    }

    /// Id of the section whose links contain `key`.
    pub fn section_of(&self, key: &str) -> Option<&'static str> {
        self.sections
            .iter()
            .find(|s| s.links.iter().any(|l| l.key == key))
            .map(|s| s.id)
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.sections
            .iter()
            .flat_map(|s| s.links.iter())
            .map(|l| l.key)
    }

    /// Startup check that the navigation structure and the record table
    /// are mutually consistent. A dangling link key is an authoring bug
    /// and should surface here, not as a placeholder pane at click time.
    pub fn validate(&self) -> Result<()> {
        let dangling: Vec<&str> = self
            .keys()
            .filter(|key| !self.records.contains_key(key))
            .collect();

        if dangling.is_empty() {
            Ok(())
        } else {
            Err(eyre::eyre!(
                "navigation links without content records: {}",
                dangling.join(", ")
            ))
        }
    }
}
