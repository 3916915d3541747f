//! State model behind a citation style creation wizard.
//!
//! - [`intent`]: the [`StyleIntent`](intent::StyleIntent) record and its observable store
//! - [`bookmarks`]: bookmarked style ids
//! - [`wizard`]: step ordering, derivation rules and next-question decisions
//! - [`catalog`]: option lists offered for each question
//! - [`session`]: the per-user context that owns the stores

pub mod bookmarks;
pub mod catalog;
pub mod intent;
pub mod logging;
pub mod observable;
pub mod reducer;
pub mod session;
pub mod wizard;

pub use session::{Session, SubmissionHandler, SubmitError};
