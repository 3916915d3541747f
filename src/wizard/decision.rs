use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::catalog::Catalog;
use crate::intent::{CitationClass, FieldUpdate, IntentError, IntentField, StyleIntent};
use crate::wizard::steps::{effective_has_bibliography, is_complete, missing_fields, next_step};

/// What the wizard should show next for a given intent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    /// The next question, or `None` once the intent is complete.
    pub question: Option<Question>,
    /// Required, unanswered fields in asking order.
    pub missing: Vec<IntentField>,
    pub complete: bool,
    /// `has_bibliography` after implied answers are applied.
    pub has_bibliography: Option<bool>,
}

/// A single wizard question with its selectable answers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub field: IntentField,
    pub prompt: String,
    pub choices: Vec<Choice>,
}

/// One selectable answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Choice {
    pub label: String,
    /// Patch to merge into the intent, e.g. `{"class": "numeric"}`.
    pub value: Value,
}

impl Choice {
    fn new(field: IntentField, label: impl Into<String>, value: Value) -> Self {
        let mut patch = Map::new();
        patch.insert(field.as_str().to_string(), value);
        Self {
            label: label.into(),
            value: Value::Object(patch),
        }
    }

    /// Typed field updates this choice applies.
    ///
    /// # Errors
    /// Fails if the patch is not an object, names an unknown field, or
    /// carries a value of the wrong type.
    pub fn updates(&self) -> Result<Vec<FieldUpdate>, IntentError> {
        let Value::Object(patch) = &self.value else {
            return Err(IntentError::InvalidChoice);
        };
        patch
            .iter()
            .map(|(name, value)| FieldUpdate::parse(name, value.clone()))
            .collect()
    }

    /// Merge this choice into a copy of `intent`.
    pub fn apply(&self, intent: &StyleIntent) -> Result<StyleIntent, IntentError> {
        Ok(self
            .updates()?
            .into_iter()
            .fold(intent.clone(), StyleIntent::with))
    }
}

/// Work out the next question for `intent`.
pub fn decide(intent: &StyleIntent, catalog: &Catalog) -> Decision {
    let question = next_step(intent).map(|field| question_for(field, intent, catalog));
    Decision {
        question,
        missing: missing_fields(intent),
        complete: is_complete(intent),
        has_bibliography: effective_has_bibliography(intent),
    }
}

/// Build the question for `field`, with choices filtered by earlier answers.
pub fn question_for(field: IntentField, intent: &StyleIntent, catalog: &Catalog) -> Question {
    let class = intent.class;
    let (prompt, choices): (&str, Vec<Choice>) = match field {
        IntentField::Field => (
            "Which field is this style for?",
            catalog
                .fields
                .iter()
                .map(|e| Choice::new(field, &e.label, json!(e.id)))
                .collect(),
        ),
        IntentField::Class => (
            "How should citations appear in the text?",
            CitationClass::all()
                .iter()
                .map(|c| Choice::new(field, c.label(), json!(c)))
                .collect(),
        ),
        IntentField::BaseArchetype => (
            "Which existing style is closest to what you need?",
            match class {
                Some(class) => catalog
                    .archetypes_for(class)
                    .map(|a| Choice::new(field, &a.label, json!(a.id)))
                    .collect(),
                None => catalog
                    .archetypes
                    .iter()
                    .map(|a| Choice::new(field, &a.label, json!(a.id)))
                    .collect(),
            },
        ),
        IntentField::AuthorFormat => (
            "How should author names be written?",
            catalog
                .author_formats
                .iter()
                .map(|e| Choice::new(field, &e.label, json!(e.id)))
                .collect(),
        ),
        IntentField::CitationPreset => (
            "Pick an in-text citation format.",
            match class {
                Some(class) => catalog
                    .citation_presets_for(class)
                    .map(|p| Choice::new(field, &p.label, json!(p.id)))
                    .collect(),
                None => catalog
                    .citation_presets
                    .iter()
                    .map(|p| Choice::new(field, &p.label, json!(p.id)))
                    .collect(),
            },
        ),
        IntentField::HasBibliography => (
            "Should the style include a bibliography?",
            vec![
                Choice::new(field, "Yes", json!(true)),
                Choice::new(field, "No", json!(false)),
            ],
        ),
        IntentField::BibliographyPreset => (
            "Pick a bibliography layout.",
            catalog
                .bibliography_presets_for(class)
                .map(|p| Choice::new(field, &p.label, json!(p.id)))
                .collect(),
        ),
        // Free-form; there is nothing to pick from.
        IntentField::DetailedConfig => ("Fine-tune individual options.", Vec::new()),
    };

    Question {
        field,
        prompt: prompt.to_string(),
        choices,
    }
}
