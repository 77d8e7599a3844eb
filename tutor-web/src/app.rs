use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use crate::components::answer_form::AnswerForm;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/tutor-web.css"/>
        <Title text="AI Education Tutor"/>
        <Meta name="description" content="Ask an AI tutor questions for your level and subject"/>

        <Router>
            <main>
                <Routes fallback=|| "Page not found.">
                    <Route path=path!("/") view=AnswerForm/>
                </Routes>
            </main>
        </Router>
    }
}
