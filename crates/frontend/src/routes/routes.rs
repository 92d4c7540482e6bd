use crate::domain::a025_department::ui::details::DepartmentEditForm;
use crate::system::pages::home::HomePage;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="p-6">
            <h1 class="text-2xl font-bold">"Página não encontrada"</h1>
            <a href="/">"Voltar ao início"</a>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=HomePage />
                <Route path=path!("/departamentos/:id/editar") view=DepartmentEditForm />
            </Routes>
        </Router>
    }
}
