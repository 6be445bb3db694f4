//! The prompt catalog: the fixed, ordered list of prompts a game draws from.
//!
//! A [`Catalog`] is built once at startup, either from the built-in
//! [`DEFAULT_PROMPTS`] or from a file (see [`Catalog::from_path`]), and is
//! never mutated afterwards. Every [`PromptPool`](crate::pool::PromptPool)
//! owns its own clone of the catalog.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The prompts shipped with the game.
pub const DEFAULT_PROMPTS: &[&str] = &[
    "Everyone Drinks",
    "Mate to your left drinks",
    "Mate to your right drinks",
    "Your neighbours drink",
    "You and a mate drink",
    "Switch drinks with the mate on your right",
    "Pick a mate to drink",
    "Skip your go",
    "Girls Drink",
    "Boys Drink",
    "Host Drinks",
    "Singles Drink",
    "Smokers Drink",
    "Mates with blond hair drink",
    "Mates with brunette hair drink",
    "Mates with dyed hair drink",
    "Mates with blue eyes drink",
    "Mates with brown eyes drink",
    "Mates with separated parents drink",
    "Mates with cracked phone screens drink",
    "Mates with a tattoo drink",
    "Mates with basic names drink",
    "Mates that don\u{2019}t have an iPhone drink",
    "Mates that can\u{2019}t drive drink",
    "Mates that posted a story today drink",
    "Mates wearing a bra drink",
    "Mates born between January - June drink",
    "Mates born between July - December drink",
    "All mates sip for every ex they have",
    "All mates sip for every piercing they have",
    "Last mate to use the toilet drink",
    "Sip for the amount of mates playing",
    "Youngest & oldest mate drink",
    "Tallest & shortest mate drink",
    "First & Last mate to arrive drink",
    "Most & least drunk mate drink",
    "Most & least followed mate on Instagram drink",
    "Swap clothes with the mate on your left",
    "Let a mate text off your phone",
    "Say \u{201c}i love you\u{201d} to the last person you texted",
    "Impersonate another player",
    "Call a parent",
    "Reveal your search history",
    "Pick the next song",
    "Take a group picture",
    "Mystery drink",
    "Body shot",
    "Staring contest",
    "Arm wrestle",
    "Race",
    "Heaven",
    "Paranoia",
    "Mr & Mrs",
    "Shot roulette",
    "Thumb war",
    "Rock Paper Scissors",
    "Fuck Marry Kill",
    "Truth or Dare",
    "Never have I ever\u{2026}",
    "Waterfall",
    "Medusa",
    "Spin the bottle",
    "Suck & blow",
    "Thunderstruck",
    "Floor is lava",
    "Rhyme",
    "Categories",
    "Nose goes",
];

// ── Prompt ────────────────────────────────────────────────────────────

/// A single game instruction shown to the active player.
///
/// Cheap to clone: the text is reference-counted.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Prompt(Arc<str>);

impl Prompt {
    pub fn new(text: &str) -> Self {
        Self(Arc::from(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Prompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Prompt {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ── Errors ────────────────────────────────────────────────────────────

/// Failure to build a catalog from user-supplied prompts.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog contains no prompts")]
    Empty,
    #[error("failed to read catalog file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse catalog file '{path}': {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

// ── Catalog ───────────────────────────────────────────────────────────

/// Ordered, de-duplicated, non-empty list of prompts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Catalog {
    prompts: Vec<Prompt>,
}

impl Catalog {
    /// Build a catalog from raw strings.
    ///
    /// Entries are trimmed; blank entries are skipped and repeated texts
    /// keep only their first occurrence.
    pub fn new<I, S>(entries: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut prompts: Vec<Prompt> = Vec::new();
        for entry in entries {
            let text = entry.as_ref().trim();
            if text.is_empty() || prompts.iter().any(|p| p.as_str() == text) {
                continue;
            }
            prompts.push(Prompt::new(text));
        }
        if prompts.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(Self { prompts })
    }

    /// Parse catalog file contents.
    ///
    /// `json` selects a JSON array of strings; otherwise the text holds one
    /// prompt per line, with blank lines and `#` comments skipped.
    pub fn parse(content: &str, json: bool) -> Result<Self, CatalogError> {
        if json {
            let entries: Vec<String> =
                serde_json::from_str(content).map_err(|source| CatalogError::Json {
                    path: "<inline>".to_string(),
                    source,
                })?;
            return Self::new(entries);
        }
        Self::new(
            content
                .lines()
                .filter(|line| !line.trim_start().starts_with('#')),
        )
    }

    /// Load a catalog file. Paths ending in `.json` are parsed as JSON.
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let display = path.display().to_string();
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: display.clone(),
            source,
        })?;
        let json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        match Self::parse(&content, json) {
            Err(CatalogError::Json { source, .. }) => Err(CatalogError::Json {
                path: display,
                source,
            }),
            other => other,
        }
    }

    pub fn len(&self) -> usize {
        self.prompts.len()
    }

    /// Always `false`: catalogs are never empty.
    pub fn is_empty(&self) -> bool {
        self.prompts.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Prompt> {
        self.prompts.get(index)
    }

    pub fn prompts(&self) -> &[Prompt] {
        &self.prompts
    }

    pub fn contains(&self, prompt: &Prompt) -> bool {
        self.prompts.contains(prompt)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            prompts: DEFAULT_PROMPTS.iter().map(|p| Prompt::new(p)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_catalog_has_every_prompt() {
        let catalog = Catalog::default();
        assert_eq!(catalog.len(), 68);
        assert_eq!(catalog.get(0).unwrap().as_str(), "Everyone Drinks");
        assert_eq!(catalog.get(67).unwrap().as_str(), "Nose goes");
    }

    #[test]
    fn default_prompts_are_unique() {
        let rebuilt = Catalog::new(DEFAULT_PROMPTS.iter()).unwrap();
        assert_eq!(rebuilt, Catalog::default());
    }

    #[test]
    fn new_trims_and_dedupes() {
        let catalog = Catalog::new(["  A ", "B", "A", "", "   "]).unwrap();
        let texts: Vec<&str> = catalog.prompts().iter().map(Prompt::as_str).collect();
        assert_eq!(texts, vec!["A", "B"]);
    }

    #[test]
    fn new_rejects_empty() {
        assert!(matches!(Catalog::new(Vec::<String>::new()), Err(CatalogError::Empty)));
        assert!(matches!(Catalog::new([" ", ""]), Err(CatalogError::Empty)));
    }

    #[test]
    fn parse_plain_text_skips_comments() {
        let content = "# party pack\nWaterfall\n\n  # indented comment\nMedusa\n";
        let catalog = Catalog::parse(content, false).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(1).unwrap().as_str(), "Medusa");
    }

    #[test]
    fn parse_json_array() {
        let catalog = Catalog::parse(r#"["Race", "Rhyme"]"#, true).unwrap();
        assert_eq!(catalog.len(), 2);
        assert!(catalog.contains(&Prompt::new("Rhyme")));
    }

    #[test]
    fn parse_json_rejects_objects() {
        let err = Catalog::parse(r#"{"prompts": []}"#, true).unwrap_err();
        assert!(matches!(err, CatalogError::Json { .. }));
    }

    #[test]
    fn from_path_picks_format_by_extension() {
        let mut json = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(json, r#"["Heaven", "Paranoia", "Heaven"]"#).unwrap();
        let catalog = Catalog::from_path(json.path()).unwrap();
        assert_eq!(catalog.len(), 2);

        let mut txt = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        writeln!(txt, "[\"not json\"]").unwrap();
        let catalog = Catalog::from_path(txt.path()).unwrap();
        assert_eq!(catalog.get(0).unwrap().as_str(), "[\"not json\"]");
    }

    #[test]
    fn from_path_reports_path_on_error() {
        let mut json = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(json, "not json").unwrap();
        let err = Catalog::from_path(json.path()).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains(&json.path().display().to_string()));

        let err = Catalog::from_path(Path::new("/definitely/missing/prompts.txt")).unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }

    #[test]
    fn prompt_serializes_as_plain_string() {
        let json = serde_json::to_string(&Prompt::new("Race")).unwrap();
        assert_eq!(json, "\"Race\"");
        let back: Prompt = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Prompt::new("Race"));
    }
}
