//! Per-session wizard context.
//!
//! A [`Session`] owns the stores one user works with. It is created by the
//! host application and handed by reference to whatever needs the state;
//! independent sessions never share anything.

use thiserror::Error;

use crate::bookmarks::BookmarkStore;
use crate::catalog::Catalog;
use crate::intent::{IntentError, IntentField, IntentStore, StyleIntent};
use crate::wizard::{self, Choice, Decision};

/// Errors that can occur when submitting an intent.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("Intent is incomplete, missing: {}", format_fields(.missing))]
    Incomplete { missing: Vec<IntentField> },

    #[error("Submission handler '{handler}' failed: {source}")]
    Handler {
        handler: &'static str,
        #[source]
        source: anyhow::Error,
    },
}

fn format_fields(fields: &[IntentField]) -> String {
    fields
        .iter()
        .map(IntentField::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Downstream consumer of completed intents (style generation, persistence).
pub trait SubmissionHandler {
    /// Returns the name of this handler for logging.
    fn name(&self) -> &'static str;

    /// Accept a completed intent.
    fn submit(&mut self, intent: &StyleIntent) -> anyhow::Result<()>;
}

/// One user's wizard state: current intent, bookmarks and option catalog.
pub struct Session {
    intent: IntentStore,
    bookmarks: BookmarkStore,
    catalog: Catalog,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Catalog::default())
    }
}

impl Session {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            intent: IntentStore::new(),
            bookmarks: BookmarkStore::new(),
            catalog,
        }
    }

    pub fn intent(&self) -> &IntentStore {
        &self.intent
    }

    pub fn bookmarks(&self) -> &BookmarkStore {
        &self.bookmarks
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Next question for the current intent.
    pub fn decide(&self) -> Decision {
        wizard::decide(&self.intent.get(), &self.catalog)
    }

    /// Apply a selected answer. Subscribers see a single change even when
    /// the choice patches several fields.
    pub fn choose(&self, choice: &Choice) -> Result<(), IntentError> {
        let next = choice.apply(&self.intent.get())?;
        self.intent.set(next);
        Ok(())
    }

    /// Hand the current intent to `handler` and start over on success.
    ///
    /// # Errors
    /// `Incomplete` if required answers are missing; `Handler` if the
    /// handler fails. The intent is kept in both cases.
    pub fn submit<H>(&self, handler: &mut H) -> Result<StyleIntent, SubmitError>
    where
        H: SubmissionHandler + ?Sized,
    {
        let intent = self.intent.get();
        let missing = wizard::missing_fields(&intent);
        if !missing.is_empty() {
            return Err(SubmitError::Incomplete { missing });
        }

        handler
            .submit(&intent)
            .map_err(|source| SubmitError::Handler {
                handler: handler.name(),
                source,
            })?;

        tracing::info!(handler = handler.name(), "Intent submitted");
        self.intent.reset();
        Ok(intent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intent::CitationClass;

    struct Recorder {
        received: Vec<StyleIntent>,
        fail: bool,
    }

    impl SubmissionHandler for Recorder {
        fn name(&self) -> &'static str {
            "recorder"
        }

        fn submit(&mut self, intent: &StyleIntent) -> anyhow::Result<()> {
            if self.fail {
                anyhow::bail!("generator offline");
            }
            self.received.push(intent.clone());
            Ok(())
        }
    }

    fn complete_intent() -> StyleIntent {
        StyleIntent {
            field: Some("medicine".into()),
            class: Some(CitationClass::Numeric),
            base_archetype: Some("vancouver".into()),
            author_format: Some("family-initials".into()),
            citation_preset: Some("superscript".into()),
            bibliography_preset: Some("numbered-list".into()),
            ..Default::default()
        }
    }

    #[test]
    fn submit_incomplete_lists_missing_fields() {
        let session = Session::default();
        let mut handler = Recorder {
            received: vec![],
            fail: false,
        };
        let err = session.submit(&mut handler).unwrap_err();
        match err {
            SubmitError::Incomplete { missing } => {
                assert_eq!(missing.first(), Some(&IntentField::Field));
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(handler.received.is_empty());
    }

    #[test]
    fn submit_success_resets_intent() {
        let session = Session::default();
        session.intent().set(complete_intent());
        let mut handler = Recorder {
            received: vec![],
            fail: false,
        };

        let submitted = session.submit(&mut handler).unwrap();

        assert_eq!(submitted, complete_intent());
        assert_eq!(handler.received, vec![complete_intent()]);
        assert_eq!(session.intent().get(), StyleIntent::default());
    }

    #[test]
    fn handler_failure_keeps_intent() {
        let session = Session::default();
        session.intent().set(complete_intent());
        let mut handler = Recorder {
            received: vec![],
            fail: true,
        };

        let err = session.submit(&mut handler).unwrap_err();

        assert!(matches!(err, SubmitError::Handler { handler: "recorder", .. }));
        assert_eq!(session.intent().get(), complete_intent());
    }

    #[test]
    fn choose_applies_question_choice() {
        let session = Session::default();
        let question = session.decide().question.unwrap();
        let choice = &question.choices[0];
        session.choose(choice).unwrap();
        assert_eq!(
            session.intent().get().field.as_deref(),
            Some(session.catalog().fields[0].id.as_str())
        );
        assert_eq!(
            session.decide().question.map(|q| q.field),
            Some(IntentField::Class)
        );
    }
}
