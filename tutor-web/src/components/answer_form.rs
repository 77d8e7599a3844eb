use leptos::prelude::*;

#[server]
pub async fn ask_tutor(
    level: String,
    subject: String,
    question: String,
) -> Result<String, ServerFnError> {
    use crate::server::tutor;
    use std::time::Instant;
    use tutor_core::AskRequest;

    let start = Instant::now();

    let request = AskRequest::new(level, subject, question);
    let result = tutor::ask(&request).await;
    let duration_ms = start.elapsed().as_millis();

    match &result {
        Ok(response) => {
            tracing::info!(
                subject = %request.subject,
                level = %request.level,
                duration_ms = %duration_ms,
                "Ask completed"
            );
            Ok(response.answer_or_default().to_string())
        }
        Err(e) => {
            tracing::error!(
                subject = %request.subject,
                error = %e,
                duration_ms = %duration_ms,
                "Ask failed"
            );
            Err(ServerFnError::new(e.to_string()))
        }
    }
}

/// Question form: level, subject, and question in; answer out.
///
/// Each input drives its own signal, and only the ask completion handler
/// writes the answer. The original frontend dropped errors on the floor;
/// here a failed ask surfaces a message and leaves the answer untouched.
#[component]
pub fn AnswerForm() -> impl IntoView {
    let (level, set_level) = signal(String::new());
    let (subject, set_subject) = signal(String::new());
    let (question, set_question) = signal(String::new());
    let (answer, set_answer) = signal(String::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(Option::<String>::None);

    let do_ask = move || {
        if loading.get() {
            return;
        }

        set_loading.set(true);
        set_error.set(None);

        let (level, subject, question) = (level.get(), subject.get(), question.get());

        leptos::task::spawn_local(async move {
            match ask_tutor(level, subject, question).await {
                Ok(text) => {
                    set_answer.set(text);
                    set_error.set(None);
                }
                Err(e) => {
                    set_error.set(Some(format!("Error: {}", e)));
                    leptos::logging::error!("API Error: {}", e);
                }
            }
            set_loading.set(false);
        });
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        do_ask();
    };

    view! {
        <div class="tutor-container">
            <header class="hero">
                <h1>"🎓 AI Education Tutor"</h1>
                <p class="tagline">"Ask a question for your level and subject"</p>
            </header>

            <form class="ask-form" on:submit=on_submit>
                <input
                    class="ask-input"
                    placeholder="Level (e.g. Class 10)"
                    prop:value=level
                    on:input=move |ev| set_level.set(event_target_value(&ev))
                />

                <input
                    class="ask-input"
                    placeholder="Subject (e.g. Math)"
                    prop:value=subject
                    on:input=move |ev| set_subject.set(event_target_value(&ev))
                />

                <textarea
                    class="ask-input"
                    placeholder="Ask your question"
                    rows="3"
                    prop:value=question
                    on:input=move |ev| set_question.set(event_target_value(&ev))
                />

                <button
                    type="submit"
                    class="ask-button"
                    prop:disabled=loading
                >
                    {move || if loading.get() { "Asking..." } else { "Ask AI" }}
                </button>
            </form>

            // Errors
            {move || error.get().map(|err| view! {
                <div class="error-message">
                    <span class="icon">"⚠️"</span>
                    <span>{err}</span>
                </div>
            })}

            // Answer
            <section class="answer-section">
                <h3>"Answer:"</h3>
                <p class="answer-text">{answer}</p>
            </section>
        </div>
    }
}
