//! Wizard engine: which question comes next and what can be picked.

mod decision;
mod steps;

pub use decision::{decide, question_for, Choice, Decision, Question};
pub use steps::{
    effective_has_bibliography, is_complete, is_ready, is_required, missing_fields, next_step,
    STEP_ORDER,
};
