use serde::{Deserialize, Serialize};

use crate::intent::CitationClass;

/// Option lists offered by the wizard for each question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default = "default_archetypes")]
    pub archetypes: Vec<Archetype>,
    /// Academic disciplines (e.g., "humanities", "law").
    #[serde(default = "default_fields")]
    pub fields: Vec<CatalogEntry>,
    #[serde(default = "default_author_formats")]
    pub author_formats: Vec<CatalogEntry>,
    #[serde(default = "default_citation_presets")]
    pub citation_presets: Vec<Preset>,
    #[serde(default = "default_bibliography_presets")]
    pub bibliography_presets: Vec<Preset>,
}

/// A plain labelled choice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Value stored in the intent (e.g., "family-given").
    pub id: String,
    /// Display label (e.g., "Smith, John").
    pub label: String,
}

/// A base style the new style derives from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Archetype {
    /// Style id (e.g., "apa", "chicago-notes").
    pub id: String,
    pub label: String,
    pub class: CitationClass,
}

/// A preconfigured formatting choice.
///
/// Without `classes` the preset applies to every citation class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    pub id: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<CitationClass>,
}

impl Preset {
    pub fn applies_to(&self, class: CitationClass) -> bool {
        self.classes.is_empty() || self.classes.contains(&class)
    }
}

impl Catalog {
    /// Archetypes of the given class, in catalog order.
    pub fn archetypes_for(&self, class: CitationClass) -> impl Iterator<Item = &Archetype> {
        self.archetypes.iter().filter(move |a| a.class == class)
    }

    /// Citation presets usable with the given class.
    pub fn citation_presets_for(&self, class: CitationClass) -> impl Iterator<Item = &Preset> {
        self.citation_presets
            .iter()
            .filter(move |p| p.applies_to(class))
    }

    /// Bibliography presets usable with the given class, or all of them
    /// while the class is still unanswered.
    pub fn bibliography_presets_for(
        &self,
        class: Option<CitationClass>,
    ) -> impl Iterator<Item = &Preset> {
        self.bibliography_presets
            .iter()
            .filter(move |p| class.map_or(true, |c| p.applies_to(c)))
    }

    pub fn archetype(&self, id: &str) -> Option<&Archetype> {
        self.archetypes.iter().find(|a| a.id == id)
    }
}

fn entry(id: &str, label: &str) -> CatalogEntry {
    CatalogEntry {
        id: id.to_string(),
        label: label.to_string(),
    }
}

fn preset(id: &str, label: &str, classes: &[CitationClass]) -> Preset {
    Preset {
        id: id.to_string(),
        label: label.to_string(),
        classes: classes.to_vec(),
    }
}

fn archetype(id: &str, label: &str, class: CitationClass) -> Archetype {
    Archetype {
        id: id.to_string(),
        label: label.to_string(),
        class,
    }
}

fn default_archetypes() -> Vec<Archetype> {
    use CitationClass::*;
    vec![
        archetype("apa", "APA 7th edition", AuthorDate),
        archetype("chicago-author-date", "Chicago (author-date)", AuthorDate),
        archetype("harvard", "Harvard", AuthorDate),
        archetype("ieee", "IEEE", Numeric),
        archetype("vancouver", "Vancouver", Numeric),
        archetype("nature", "Nature", Numeric),
        archetype("chicago-notes", "Chicago (notes and bibliography)", Footnote),
        archetype("oscola", "OSCOLA", Footnote),
        archetype("turabian-endnotes", "Turabian (endnotes)", Endnote),
    ]
}

fn default_fields() -> Vec<CatalogEntry> {
    vec![
        entry("humanities", "Humanities"),
        entry("social-sciences", "Social sciences"),
        entry("sciences", "Natural sciences"),
        entry("medicine", "Medicine"),
        entry("engineering", "Engineering"),
        entry("law", "Law"),
    ]
}

fn default_author_formats() -> Vec<CatalogEntry> {
    vec![
        entry("family-given", "Smith, John"),
        entry("family-initials", "Smith, J."),
        entry("given-family", "John Smith"),
        entry("initials-family", "J. Smith"),
    ]
}

fn default_citation_presets() -> Vec<Preset> {
    use CitationClass::*;
    vec![
        preset("parenthetical", "(Smith, 2020)", &[AuthorDate]),
        preset("parenthetical-no-comma", "(Smith 2020)", &[AuthorDate]),
        preset("brackets", "[1]", &[Numeric]),
        preset("superscript", "¹", &[Numeric]),
        preset("parentheses", "(1)", &[Numeric]),
        preset("full-note", "Full note on first cite", &[Footnote, Endnote]),
        preset("short-note", "Short notes only", &[Footnote, Endnote]),
    ]
}

fn default_bibliography_presets() -> Vec<Preset> {
    vec![
        preset("hanging-indent", "Hanging indent", &[]),
        preset("numbered-list", "Numbered list", &[CitationClass::Numeric]),
        preset("compact", "Compact, no indent", &[]),
    ]
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            archetypes: default_archetypes(),
            fields: default_fields(),
            author_formats: default_author_formats(),
            citation_presets: default_citation_presets(),
            bibliography_presets: default_bibliography_presets(),
        }
    }
}
