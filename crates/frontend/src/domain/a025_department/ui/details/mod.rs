//! Department Edit UI Module
//!
//! Simplified MVVM pattern implementation:
//! - model.rs: flat form state and the record <-> form mappings
//! - flow.rs: load/submit lifecycle against abstract collaborators
//! - view_model.rs: reactive state and commands
//! - view.rs: Leptos component (pure UI)

mod flow;
mod model;
mod view;
mod view_model;

pub use flow::{DepartmentGateway, FormPhase, LoadOutcome, SubmitOutcome};
pub use model::{to_form_state, to_payload, DepartmentForm, FormField};
pub use view::DepartmentEditForm;
pub use view_model::{DepartmentEditServices, DepartmentEditViewModel};
