use crate::intent::action::IntentAction;
use crate::intent::model::StyleIntent;
use crate::reducer::Reducer;

pub struct IntentReducer;

impl Reducer for IntentReducer {
    type State = StyleIntent;
    type Action = IntentAction;

    const STORE: &'static str = "intent";

    fn reduce(state: Self::State, action: Self::Action) -> Self::State {
        match action {
            IntentAction::Set(intent) => intent,
            IntentAction::Update(update) => state.with(update),
            IntentAction::Reset => StyleIntent::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intent::model::{CitationClass, FieldUpdate};

    fn answered() -> StyleIntent {
        StyleIntent {
            base_archetype: Some("apa".into()),
            class: Some(CitationClass::AuthorDate),
            has_bibliography: Some(true),
            ..Default::default()
        }
    }

    #[test]
    fn set_replaces_whole_record() {
        let next = IntentReducer::reduce(answered(), IntentAction::Set(StyleIntent::default()));
        assert_eq!(next, StyleIntent::default());
    }

    #[test]
    fn update_keeps_other_fields() {
        let next = IntentReducer::reduce(
            answered(),
            IntentAction::Update(FieldUpdate::AuthorFormat(Some("family-given".into()))),
        );
        assert_eq!(next.author_format.as_deref(), Some("family-given"));
        assert_eq!(next.base_archetype.as_deref(), Some("apa"));
        assert_eq!(next.class, Some(CitationClass::AuthorDate));
    }

    #[test]
    fn reset_returns_initial_record() {
        let next = IntentReducer::reduce(answered(), IntentAction::Reset);
        assert_eq!(next, StyleIntent::default());
    }
}
