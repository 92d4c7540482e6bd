//! Department Edit - lifecycle
//!
//! `Loading -> Ready -> Submitting`, leaving through `NavigatedAway` on a
//! successful save or a failed load. A failed save falls back to `Ready`
//! with the edits kept. Framework-free so the sequence can be driven
//! with in-memory collaborators.

use async_trait::async_trait;
use contracts::domain::a025_department::aggregate::{Department, UpdateDepartmentDto};

use super::model::{to_form_state, to_payload, DepartmentForm};
use crate::shared::config::HOME_ROUTE;
use crate::shared::notify::UserFeedback;

pub const LOAD_FAILED_NOTICE: &str = "Erro ao carregar departamento.";
pub const SAVED_NOTICE: &str = "Departamento atualizado com sucesso!";
pub const SAVE_FAILED_NOTICE: &str = "Erro ao atualizar departamento.";

/// Read and write access to department records
#[async_trait(?Send)]
pub trait DepartmentGateway {
    async fn view_department(&self, id: &str) -> Result<Department, String>;
    async fn update_department(&self, id: &str, payload: &UpdateDepartmentDto)
        -> Result<(), String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Loading,
    Ready,
    Submitting,
    NavigatedAway,
}

impl FormPhase {
    /// Submit is only reachable from an interactive form
    pub fn can_submit(self) -> bool {
        self == FormPhase::Ready
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded(DepartmentForm),
    Aborted,
}

impl LoadOutcome {
    pub fn next_phase(&self) -> FormPhase {
        match self {
            LoadOutcome::Loaded(_) => FormPhase::Ready,
            LoadOutcome::Aborted => FormPhase::NavigatedAway,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Saved,
    Rejected,
}

impl SubmitOutcome {
    pub fn next_phase(self) -> FormPhase {
        match self {
            SubmitOutcome::Saved => FormPhase::NavigatedAway,
            SubmitOutcome::Rejected => FormPhase::Ready,
        }
    }
}

/// Fetch the record and flatten it. Any failure, including a missing route
/// parameter, shows one notice and leaves for the home route.
pub async fn load(
    gateway: &dyn DepartmentGateway,
    feedback: &dyn UserFeedback,
    id: Option<&str>,
) -> LoadOutcome {
    let result = match id {
        Some(id) => gateway.view_department(id).await,
        None => Err("missing route parameter `id`".to_string()),
    };

    match result {
        Ok(record) => {
            log::debug!("department {:?} loaded", id);
            LoadOutcome::Loaded(to_form_state(record))
        }
        Err(e) => {
            log::warn!("department {:?} load failed: {}", id, e);
            feedback.notify(LOAD_FAILED_NOTICE);
            feedback.navigate(HOME_ROUTE);
            LoadOutcome::Aborted
        }
    }
}

/// Send the current form as an update. The form itself is never modified.
pub async fn submit(
    gateway: &dyn DepartmentGateway,
    feedback: &dyn UserFeedback,
    id: &str,
    form: &DepartmentForm,
) -> SubmitOutcome {
    let payload = to_payload(form);

    match gateway.update_department(id, &payload).await {
        Ok(()) => {
            log::debug!("department {} saved", id);
            feedback.notify(SAVED_NOTICE);
            feedback.navigate(HOME_ROUTE);
            SubmitOutcome::Saved
        }
        Err(e) => {
            log::warn!("department {} save failed: {}", id, e);
            feedback.notify(SAVE_FAILED_NOTICE);
            SubmitOutcome::Rejected
        }
    }
}
