use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Current revision of the [`StyleIntent`] field set.
///
/// Revision 1 carried four fields (`base_archetype`, `class`,
/// `author_format`, `has_bibliography`). Revision 2 added `field`,
/// `citation_preset`, `bibliography_preset` and `detailed_config`.
/// Bump this and extend [`IntentField`] together.
pub const SCHEMA_VERSION: u32 = 2;

/// Errors raised while reading or patching a [`StyleIntent`].
#[derive(Debug, Error)]
pub enum IntentError {
    #[error("Unknown intent field '{name}'")]
    UnknownField { name: String },

    #[error("Invalid value for intent field '{field}': {source}")]
    InvalidValue {
        field: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Choice value must be an object of field updates")]
    InvalidChoice,

    #[error("Malformed intent document: {source}")]
    Malformed {
        #[source]
        source: serde_json::Error,
    },
}

/// CSL style class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CitationClass {
    AuthorDate,
    Numeric,
    #[serde(alias = "note")]
    Footnote,
    Endnote,
}

impl CitationClass {
    pub fn all() -> &'static [CitationClass] {
        &[
            Self::AuthorDate,
            Self::Numeric,
            Self::Footnote,
            Self::Endnote,
        ]
    }

    /// Stable wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AuthorDate => "author-date",
            Self::Numeric => "numeric",
            Self::Footnote => "footnote",
            Self::Endnote => "endnote",
        }
    }

    /// Display label for wizard choices.
    pub fn label(&self) -> &'static str {
        match self {
            Self::AuthorDate => "Author-date",
            Self::Numeric => "Numeric",
            Self::Footnote => "Footnotes",
            Self::Endnote => "Endnotes",
        }
    }

    /// Note styles cite in footnotes or endnotes.
    pub fn is_note(&self) -> bool {
        matches!(self, Self::Footnote | Self::Endnote)
    }
}

/// The user's in-progress answers to the style questionnaire.
///
/// Every field is always present. `None` means "not answered yet" and
/// serializes as `null`; absent keys in an incoming document (for example a
/// revision 1 record) deserialize as `None`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StyleIntent {
    #[serde(default)]
    pub base_archetype: Option<String>,
    #[serde(default)]
    pub field: Option<String>,
    #[serde(default)]
    pub class: Option<CitationClass>,
    #[serde(default)]
    pub citation_preset: Option<String>,
    #[serde(default)]
    pub bibliography_preset: Option<String>,
    #[serde(default)]
    pub detailed_config: Option<Value>,
    #[serde(default)]
    pub author_format: Option<String>,
    #[serde(default)]
    pub has_bibliography: Option<bool>,
}

impl StyleIntent {
    /// Parse a JSON document, filling fields it predates with `None`.
    pub fn from_json(input: &str) -> Result<Self, IntentError> {
        serde_json::from_str(input).map_err(|source| IntentError::Malformed { source })
    }

    /// Same as [`from_json`](Self::from_json) for an already parsed value.
    pub fn from_value(value: Value) -> Result<Self, IntentError> {
        serde_json::from_value(value).map_err(|source| IntentError::Malformed { source })
    }

    pub fn to_value(&self) -> Value {
        // Only strings, bools, enums and an existing Value: cannot fail.
        serde_json::to_value(self).unwrap_or(Value::Null)
    }

    /// Whether the given field has been answered.
    pub fn is_answered(&self, field: IntentField) -> bool {
        match field {
            IntentField::BaseArchetype => self.base_archetype.is_some(),
            IntentField::Field => self.field.is_some(),
            IntentField::Class => self.class.is_some(),
            IntentField::CitationPreset => self.citation_preset.is_some(),
            IntentField::BibliographyPreset => self.bibliography_preset.is_some(),
            IntentField::DetailedConfig => self.detailed_config.is_some(),
            IntentField::AuthorFormat => self.author_format.is_some(),
            IntentField::HasBibliography => self.has_bibliography.is_some(),
        }
    }

    /// Return a copy with one field replaced.
    pub fn with(mut self, update: FieldUpdate) -> Self {
        match update {
            FieldUpdate::BaseArchetype(v) => self.base_archetype = v,
            FieldUpdate::Field(v) => self.field = v,
            FieldUpdate::Class(v) => self.class = v,
            FieldUpdate::CitationPreset(v) => self.citation_preset = v,
            FieldUpdate::BibliographyPreset(v) => self.bibliography_preset = v,
            FieldUpdate::DetailedConfig(v) => self.detailed_config = v,
            FieldUpdate::AuthorFormat(v) => self.author_format = v,
            FieldUpdate::HasBibliography(v) => self.has_bibliography = v,
        }
        self
    }
}

/// Identifier for each recognized [`StyleIntent`] field.
///
/// Adding a field: add a variant here, the matching `StyleIntent` member,
/// a [`FieldUpdate`] variant, and bump [`SCHEMA_VERSION`].
/// The `as_str()` value is the JSON key; once published, do not rename.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntentField {
    BaseArchetype,
    Field,
    Class,
    CitationPreset,
    BibliographyPreset,
    DetailedConfig,
    AuthorFormat,
    HasBibliography,
}

impl IntentField {
    /// Stable JSON key.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BaseArchetype => "base_archetype",
            Self::Field => "field",
            Self::Class => "class",
            Self::CitationPreset => "citation_preset",
            Self::BibliographyPreset => "bibliography_preset",
            Self::DetailedConfig => "detailed_config",
            Self::AuthorFormat => "author_format",
            Self::HasBibliography => "has_bibliography",
        }
    }

    /// All variants, in declaration order.
    pub fn all() -> &'static [IntentField] {
        &[
            Self::BaseArchetype,
            Self::Field,
            Self::Class,
            Self::CitationPreset,
            Self::BibliographyPreset,
            Self::DetailedConfig,
            Self::AuthorFormat,
            Self::HasBibliography,
        ]
    }

    /// Parse from JSON key.
    pub fn parse(s: &str) -> Result<Self, IntentError> {
        Self::all()
            .iter()
            .copied()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| IntentError::UnknownField {
                name: s.to_string(),
            })
    }
}

impl std::fmt::Display for IntentField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A typed replacement value for exactly one field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldUpdate {
    BaseArchetype(Option<String>),
    Field(Option<String>),
    Class(Option<CitationClass>),
    CitationPreset(Option<String>),
    BibliographyPreset(Option<String>),
    DetailedConfig(Option<Value>),
    AuthorFormat(Option<String>),
    HasBibliography(Option<bool>),
}

impl FieldUpdate {
    /// Build an update from a field name and an untyped JSON value.
    ///
    /// `null` clears the field. Fails on an unrecognized name or on a value
    /// of the wrong type for the field.
    pub fn parse(name: &str, value: Value) -> Result<Self, IntentError> {
        let field = IntentField::parse(name)?;
        Self::for_field(field, value)
    }

    pub fn for_field(field: IntentField, value: Value) -> Result<Self, IntentError> {
        fn typed<T: serde::de::DeserializeOwned>(
            field: IntentField,
            value: Value,
        ) -> Result<Option<T>, IntentError> {
            serde_json::from_value(value).map_err(|source| IntentError::InvalidValue {
                field: field.as_str(),
                source,
            })
        }

        Ok(match field {
            IntentField::BaseArchetype => Self::BaseArchetype(typed(field, value)?),
            IntentField::Field => Self::Field(typed(field, value)?),
            IntentField::Class => Self::Class(typed(field, value)?),
            IntentField::CitationPreset => Self::CitationPreset(typed(field, value)?),
            IntentField::BibliographyPreset => Self::BibliographyPreset(typed(field, value)?),
            // Any JSON is acceptable here; only `null` means unanswered.
            IntentField::DetailedConfig => {
                Self::DetailedConfig(if value.is_null() { None } else { Some(value) })
            }
            IntentField::AuthorFormat => Self::AuthorFormat(typed(field, value)?),
            IntentField::HasBibliography => Self::HasBibliography(typed(field, value)?),
        })
    }

    /// The field this update targets.
    pub fn field(&self) -> IntentField {
        match self {
            Self::BaseArchetype(_) => IntentField::BaseArchetype,
            Self::Field(_) => IntentField::Field,
            Self::Class(_) => IntentField::Class,
            Self::CitationPreset(_) => IntentField::CitationPreset,
            Self::BibliographyPreset(_) => IntentField::BibliographyPreset,
            Self::DetailedConfig(_) => IntentField::DetailedConfig,
            Self::AuthorFormat(_) => IntentField::AuthorFormat,
            Self::HasBibliography(_) => IntentField::HasBibliography,
        }
    }
}
