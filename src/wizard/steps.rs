//! Step ordering and derivation rules.
//!
//! Steps are revealed progressively. A step is *required* when the current
//! answers make it relevant, and *ready* once the answers it depends on are
//! present.

use crate::intent::{IntentField, StyleIntent};

/// Order in which the wizard asks questions. `detailed_config` is never asked.
pub const STEP_ORDER: &[IntentField] = &[
    IntentField::Field,
    IntentField::Class,
    IntentField::BaseArchetype,
    IntentField::AuthorFormat,
    IntentField::CitationPreset,
    IntentField::HasBibliography,
    IntentField::BibliographyPreset,
];

/// Whether the style will have a bibliography, taking implied answers into
/// account.
///
/// An explicit answer wins. Otherwise author-date and numeric styles imply a
/// bibliography; note styles leave it open.
pub fn effective_has_bibliography(intent: &StyleIntent) -> Option<bool> {
    intent
        .has_bibliography
        .or_else(|| intent.class.filter(|c| !c.is_note()).map(|_| true))
}

/// Whether the step must be answered before the intent is complete.
pub fn is_required(intent: &StyleIntent, field: IntentField) -> bool {
    match field {
        IntentField::DetailedConfig => false,
        IntentField::HasBibliography => intent.class.map_or(true, |c| c.is_note()),
        IntentField::BibliographyPreset => effective_has_bibliography(intent) != Some(false),
        _ => true,
    }
}

/// Whether everything the step depends on has been answered.
pub fn is_ready(intent: &StyleIntent, field: IntentField) -> bool {
    match field {
        IntentField::BaseArchetype
        | IntentField::CitationPreset
        | IntentField::HasBibliography => intent.class.is_some(),
        IntentField::BibliographyPreset => effective_has_bibliography(intent) == Some(true),
        _ => true,
    }
}

/// Required, unanswered steps in asking order.
///
/// Steps that are not ready yet are included.
pub fn missing_fields(intent: &StyleIntent) -> Vec<IntentField> {
    STEP_ORDER
        .iter()
        .copied()
        .filter(|field| is_required(intent, *field) && !intent.is_answered(*field))
        .collect()
}

/// The next question to ask, if any.
pub fn next_step(intent: &StyleIntent) -> Option<IntentField> {
    missing_fields(intent)
        .into_iter()
        .find(|field| is_ready(intent, *field))
}

pub fn is_complete(intent: &StyleIntent) -> bool {
    missing_fields(intent).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intent::CitationClass;

    fn with_class(class: CitationClass) -> StyleIntent {
        StyleIntent {
            class: Some(class),
            ..Default::default()
        }
    }

    #[test]
    fn fresh_intent_starts_with_field() {
        assert_eq!(next_step(&StyleIntent::default()), Some(IntentField::Field));
    }

    #[test]
    fn archetype_waits_for_class() {
        let intent = StyleIntent {
            field: Some("law".into()),
            ..Default::default()
        };
        assert_eq!(next_step(&intent), Some(IntentField::Class));
        assert!(missing_fields(&intent).contains(&IntentField::BaseArchetype));
        assert!(!is_ready(&intent, IntentField::BaseArchetype));
    }

    #[test]
    fn author_date_implies_bibliography() {
        let intent = with_class(CitationClass::AuthorDate);
        assert_eq!(effective_has_bibliography(&intent), Some(true));
        assert!(!missing_fields(&intent).contains(&IntentField::HasBibliography));
        assert!(missing_fields(&intent).contains(&IntentField::BibliographyPreset));
    }

    #[test]
    fn note_class_asks_about_bibliography() {
        let intent = with_class(CitationClass::Footnote);
        assert_eq!(effective_has_bibliography(&intent), None);
        assert!(missing_fields(&intent).contains(&IntentField::HasBibliography));
        assert!(!is_ready(&intent, IntentField::BibliographyPreset));
    }

    #[test]
    fn no_bibliography_skips_preset() {
        let intent = StyleIntent {
            has_bibliography: Some(false),
            ..with_class(CitationClass::Endnote)
        };
        assert!(!is_required(&intent, IntentField::BibliographyPreset));
        assert!(!missing_fields(&intent).contains(&IntentField::BibliographyPreset));
    }

    #[test]
    fn explicit_answer_overrides_implied_bibliography() {
        let intent = StyleIntent {
            has_bibliography: Some(false),
            ..with_class(CitationClass::Numeric)
        };
        assert_eq!(effective_has_bibliography(&intent), Some(false));
    }

    #[test]
    fn detailed_config_is_never_required() {
        assert!(!is_required(&StyleIntent::default(), IntentField::DetailedConfig));
        assert!(!STEP_ORDER.contains(&IntentField::DetailedConfig));
    }

    #[test]
    fn fully_answered_numeric_intent_is_complete() {
        let intent = StyleIntent {
            field: Some("sciences".into()),
            base_archetype: Some("ieee".into()),
            author_format: Some("initials-family".into()),
            citation_preset: Some("brackets".into()),
            bibliography_preset: Some("numbered-list".into()),
            ..with_class(CitationClass::Numeric)
        };
        assert!(is_complete(&intent));
        assert_eq!(next_step(&intent), None);
    }
}
