use super::model::FormField;
use super::view_model::{DepartmentEditServices, DepartmentEditViewModel};
use crate::domain::a025_department::api::HttpDepartmentGateway;
use crate::shared::config::{DEPARTMENTS_ROUTE, HOME_ROUTE};
use crate::shared::notify::BrowserFeedback;
use leptos::ev;
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};
use std::rc::Rc;

fn on_field_input(vm: DepartmentEditViewModel, ev: ev::Event) {
    let name = event_target::<web_sys::Element>(&ev)
        .get_attribute("name")
        .unwrap_or_default();
    vm.change_command(&name, event_target_value(&ev));
}

fn field_input(vm: DepartmentEditViewModel, field: FormField) -> impl IntoView {
    view! {
        <input
            type=field.input_type()
            name=field.input_name()
            placeholder=field.placeholder()
            pattern=field.pattern()
            maxlength=field.max_length()
            class="input input-bordered w-full"
            required=true
            prop:value=vm.field_value(field)
            on:input=move |ev| on_field_input(vm, ev)
        />
    }
}

fn labeled_input(vm: DepartmentEditViewModel, field: FormField) -> impl IntoView {
    view! {
        <label class="form-control">
            <div class="label">
                <span class="label-text">{field.label()}</span>
            </div>
            {field_input(vm, field)}
        </label>
    }
}

/// Edit form for the department named by the `:id` route parameter
#[component]
pub fn DepartmentEditForm() -> impl IntoView {
    let params = use_params_map();
    let id = params.with_untracked(|p| p.get("id"));

    let services = Rc::new(DepartmentEditServices {
        gateway: Box::new(HttpDepartmentGateway),
        feedback: Box::new(BrowserFeedback::new(use_navigate())),
    });

    let vm = DepartmentEditViewModel::new();
    vm.load_command(services.clone(), id);

    let is_loading = vm.is_loading();
    let can_submit = vm.can_submit();
    let description = FormField::Description;

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        vm.submit_command(services.clone());
    };

    view! {
        <div class="w-full min-h-screen bg-base-200 flex justify-center items-start p-6">
            <div class="bg-base-100 rounded-xl shadow-lg w-full max-w-4xl p-8">
                <div class="breadcrumbs text-sm mb-4">
                    <ul>
                        <li><a href=HOME_ROUTE>"Dashboard"</a></li>
                        <li><a href=DEPARTMENTS_ROUTE rel="external">"Departamentos"</a></li>
                        <li>"Editar Departamento"</li>
                    </ul>
                </div>

                <h1 class="text-3xl font-bold mb-6">"Editar Departamento"</h1>

                {move || is_loading().then(|| view! {
                    <div class="loading-indicator">"Carregando..."</div>
                })}

                <form on:submit=on_submit class="flex flex-col gap-4">
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                        {labeled_input(vm, FormField::Name)}
                        {labeled_input(vm, FormField::Phone)}
                    </div>

                    <label class="form-control">
                        <div class="label">
                            <span class="label-text">{description.label()}</span>
                        </div>
                        <textarea
                            name=description.input_name()
                            placeholder=description.placeholder()
                            class="textarea textarea-bordered w-full"
                            rows="3"
                            required=true
                            prop:value=vm.field_value(description)
                            on:input=move |ev| on_field_input(vm, ev)
                        />
                    </label>

                    {labeled_input(vm, FormField::Manager)}

                    <div class="overflow-x-auto">
                        <h2 class="font-bold pl-4 text-2xl">"Endereço"</h2>
                        <table class="table">
                            <thead>
                                <tr>
                                    {FormField::ADDRESS
                                        .into_iter()
                                        .map(|field| view! { <th>{field.label()}</th> })
                                        .collect_view()}
                                </tr>
                            </thead>
                            <tbody>
                                <tr>
                                    {FormField::ADDRESS
                                        .into_iter()
                                        .map(|field| view! { <td>{field_input(vm, field)}</td> })
                                        .collect_view()}
                                </tr>
                            </tbody>
                        </table>
                    </div>

                    <div class="flex justify-end gap-2 mt-6">
                        <button
                            type="submit"
                            class="btn btn-primary"
                            disabled=move || !can_submit()
                        >
                            "Salvar Alterações"
                        </button>
                        <a href=HOME_ROUTE>
                            <button type="button" class="btn btn-error">"Cancelar"</button>
                        </a>
                    </div>
                </form>
            </div>
        </div>
    }
}
