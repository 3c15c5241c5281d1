//! Character records returned by the remote API.
//!
//! The list endpoint answers with a [`CharacterPage`]: an `info` block with
//! paging metadata and a `results` array of [`Character`] values. Only `id`,
//! `name` and `image` are needed for the grid; everything else feeds the
//! detail modal and defaults to empty when the API leaves it out.

use serde::{Deserialize, Serialize};

/// A named reference to a place, as embedded in a character record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationRef {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// A single character as returned by the API.
///
/// Treated as an immutable snapshot: the page state keeps the latest fetched
/// list and the modal shows a clone of one entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub species: String,
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub origin: LocationRef,
    #[serde(default)]
    pub location: LocationRef,
    #[serde(default)]
    pub episode: Vec<String>,
    #[serde(default)]
    pub created: String,
}

impl Character {
    /// Creates a character carrying only the summary fields.
    ///
    /// # Examples
    ///
    /// ```
    /// use character_browser::Character;
    ///
    /// let rick = Character::summary(1, "Rick Sanchez", "https://example.com/1.jpeg");
    /// assert_eq!(rick.name, "Rick Sanchez");
    /// assert!(rick.species.is_empty());
    /// ```
    #[must_use]
    pub fn summary(id: u64, name: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            image: image.into(),
            status: String::new(),
            species: String::new(),
            kind: String::new(),
            gender: String::new(),
            origin: LocationRef::default(),
            location: LocationRef::default(),
            episode: Vec::new(),
            created: String::new(),
        }
    }

    /// Number of episodes the character appears in.
    #[must_use]
    pub fn episode_count(&self) -> usize {
        self.episode.len()
    }

    /// Formats the creation timestamp as a calendar date.
    ///
    /// Returns `None` when the API sent no timestamp or one that is not
    /// RFC 3339.
    ///
    /// # Examples
    ///
    /// ```
    /// use character_browser::Character;
    ///
    /// let mut morty = Character::summary(2, "Morty Smith", "");
    /// morty.created = "2017-11-04T18:50:21.651Z".to_string();
    /// assert_eq!(morty.created_date().as_deref(), Some("2017-11-04"));
    /// ```
    #[must_use]
    pub fn created_date(&self) -> Option<String> {
        if self.created.is_empty() {
            return None;
        }
        chrono::DateTime::parse_from_rfc3339(&self.created)
            .ok()
            .map(|dt| dt.format("%Y-%m-%d").to_string())
    }

    /// Short secondary line shown under the name on a grid card.
    #[must_use]
    pub fn tagline(&self) -> String {
        match (self.status.is_empty(), self.species.is_empty()) {
            (false, false) => format!("{} - {}", self.status, self.species),
            (false, true) => self.status.clone(),
            (true, false) => self.species.clone(),
            (true, true) => String::new(),
        }
    }
}

/// Paging metadata attached to every list response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    #[serde(default)]
    pub count: u32,
    pub pages: u32,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub prev: Option<String>,
}

/// One page of characters plus its metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterPage {
    pub info: PageInfo,
    #[serde(default)]
    pub results: Vec<Character>,
}
