use super::flow::{self, DepartmentGateway, FormPhase, LoadOutcome};
use super::model::{DepartmentForm, FormField};
use crate::shared::notify::UserFeedback;
use leptos::prelude::*;
use std::rc::Rc;

/// Collaborators the form talks to
pub struct DepartmentEditServices {
    pub gateway: Box<dyn DepartmentGateway>,
    pub feedback: Box<dyn UserFeedback>,
}

/// ViewModel for the department edit form
#[derive(Clone, Copy)]
pub struct DepartmentEditViewModel {
    pub form: RwSignal<DepartmentForm>,
    pub phase: RwSignal<FormPhase>,
    /// Set once the record for this id has loaded
    pub department_id: RwSignal<Option<String>>,
}

impl DepartmentEditViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(DepartmentForm::default()),
            phase: RwSignal::new(FormPhase::Loading),
            department_id: RwSignal::new(None),
        }
    }

    pub fn is_loading(&self) -> impl Fn() -> bool + Copy + Send + Sync + 'static {
        let phase = self.phase;
        move || phase.get() == FormPhase::Loading
    }

    pub fn can_submit(&self) -> impl Fn() -> bool + Copy + Send + Sync + 'static {
        let phase = self.phase;
        move || phase.get().can_submit()
    }

    pub fn field_value(&self, field: FormField) -> impl Fn() -> String + Copy + Send + Sync + 'static {
        let form = self.form;
        move || form.with(|f| f.get(field).to_string())
    }

    /// Fetch the record once on mount
    pub fn load_command(&self, services: Rc<DepartmentEditServices>, id: Option<String>) {
        let form = self.form;
        let phase = self.phase;
        let department_id = self.department_id;
        phase.set(FormPhase::Loading);
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = flow::load(
                services.gateway.as_ref(),
                services.feedback.as_ref(),
                id.as_deref(),
            )
            .await;
            let next = outcome.next_phase();
            if let LoadOutcome::Loaded(loaded) = outcome {
                let _ = form.try_set(loaded);
                let _ = department_id.try_set(id);
            }
            let _ = phase.try_set(next);
        });
    }

    /// Input event keyed by the input's `name` attribute
    pub fn change_command(&self, name: &str, value: String) {
        let Some(field) = FormField::from_input_name(name) else {
            log::warn!("input event for unknown field {:?}", name);
            return;
        };
        self.form.update(|f| f.set(field, value));
    }

    /// Id to submit against, only while the form is ready
    fn submit_target(&self) -> Option<String> {
        if !self.phase.get_untracked().can_submit() {
            return None;
        }
        self.department_id.get_untracked()
    }

    /// Save the current edits; ignored unless the form is ready
    pub fn submit_command(&self, services: Rc<DepartmentEditServices>) {
        let Some(id) = self.submit_target() else {
            return;
        };

        let phase = self.phase;
        let snapshot = self.form.get_untracked();
        phase.set(FormPhase::Submitting);
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = flow::submit(
                services.gateway.as_ref(),
                services.feedback.as_ref(),
                &id,
                &snapshot,
            )
            .await;
            let _ = phase.try_set(outcome.next_phase());
        });
    }
}

impl Default for DepartmentEditViewModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use contracts::domain::a025_department::aggregate::{Department, UpdateDepartmentDto};

    struct UnreachableGateway;

    #[async_trait(?Send)]
    impl DepartmentGateway for UnreachableGateway {
        async fn view_department(&self, _id: &str) -> Result<Department, String> {
            Err("not expected".into())
        }

        async fn update_department(
            &self,
            _id: &str,
            _payload: &UpdateDepartmentDto,
        ) -> Result<(), String> {
            Err("not expected".into())
        }
    }

    struct SilentFeedback;

    impl UserFeedback for SilentFeedback {
        fn notify(&self, _message: &str) {}
        fn navigate(&self, _path: &str) {}
    }

    fn services() -> Rc<DepartmentEditServices> {
        Rc::new(DepartmentEditServices {
            gateway: Box::new(UnreachableGateway),
            feedback: Box::new(SilentFeedback),
        })
    }

    #[test]
    fn test_submit_ignored_unless_ready() {
        let vm = DepartmentEditViewModel::new();
        vm.department_id.set(Some("42".into()));

        vm.submit_command(services());
        assert_eq!(vm.phase.get_untracked(), FormPhase::Loading);

        vm.phase.set(FormPhase::Submitting);
        vm.submit_command(services());
        assert_eq!(vm.phase.get_untracked(), FormPhase::Submitting);

        vm.phase.set(FormPhase::NavigatedAway);
        vm.submit_command(services());
        assert_eq!(vm.phase.get_untracked(), FormPhase::NavigatedAway);
    }

    #[test]
    fn test_submit_ignored_before_record_loaded() {
        let vm = DepartmentEditViewModel::new();
        vm.phase.set(FormPhase::Ready);

        vm.submit_command(services());
        assert_eq!(vm.phase.get_untracked(), FormPhase::Ready);
    }

    #[test]
    fn test_change_command_updates_named_field_only() {
        let vm = DepartmentEditViewModel::new();
        vm.form.update(|f| f.name = "Sales".into());

        vm.change_command("telefone", "11888888888".into());
        vm.change_command("bogus", "ignored".into());

        let form = vm.form.get_untracked();
        assert_eq!(form.phone, "11888888888");
        assert_eq!(
            form,
            DepartmentForm {
                name: "Sales".into(),
                phone: "11888888888".into(),
                ..Default::default()
            }
        );
    }
}
