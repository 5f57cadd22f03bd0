use crate::analyzer::api::{analyze_video, load_credential_status, AnalysisState};
use crate::analyzer::components::{
    ApiKeySidebar, ErrorMessage, InfoMessage, NotFoundMessage, UrlForm, VideoReport,
};
use crate::analyzer::storage::{get_stored_api_key, store_api_key};
use crate::env_variable_utils::get_app_name;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <AnalyzerApp /> },
        Route::NotFound => html! {
            <div class="min-h-screen flex items-center justify-center bg-gray-700">
                <div class="bg-white p-8 rounded-lg shadow-lg text-center">
                    <h1 class="text-2xl font-bold text-gray-800 mb-4">{"404 - Page Not Found"}</h1>
                    <Link<Route> to={Route::Home} classes="text-blue-600 hover:underline">
                        {"Go back to the analyzer"}
                    </Link<Route>>
                </div>
            </div>
        },
    }
}

#[function_component(AnalyzerApp)]
pub fn analyzer_app() -> Html {
    let api_key = use_state(|| get_stored_api_key().unwrap_or_default());
    let server_key_configured = use_state(|| false);
    let video_url = use_state(String::new);
    let analysis = use_state(AnalysisState::default);

    // Ask the backend once whether it holds a key of its own
    {
        let server_key_configured = server_key_configured.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match load_credential_status().await {
                    Ok(status) => server_key_configured.set(status.server_key_configured),
                    Err(e) => log::warn!("Failed to load credential status: {e}"),
                }
            });
            || ()
        });
    }

    let on_api_key_change = {
        let api_key = api_key.clone();
        Callback::from(move |value: String| {
            if let Err(e) = store_api_key(&value) {
                log::warn!("{e}");
            }
            api_key.set(value);
        })
    };

    let has_credential = !api_key.trim().is_empty() || *server_key_configured;

    let on_submit = {
        let api_key = api_key.clone();
        let video_url = video_url.clone();
        let analysis = analysis.clone();

        Callback::from(move |url: String| {
            video_url.set(url.clone());
            if url.trim().is_empty() || !has_credential {
                analysis.set(AnalysisState::Idle);
                return;
            }

            analysis.set(AnalysisState::Loading);
            let key = (*api_key).clone();
            let analysis = analysis.clone();
            wasm_bindgen_futures::spawn_local(async move {
                analyze_video(url, key, analysis).await;
            });
        })
    };

    let credential_prompt = (!has_credential)
        .then(|| "Enter your YouTube API key in the sidebar on the left.".to_string());

    html! {
        <div class="min-h-screen flex flex-col md:flex-row bg-gray-700">
            <ApiKeySidebar
                api_key={(*api_key).clone()}
                server_key_configured={*server_key_configured}
                on_api_key_change={on_api_key_change}
            />
            <main class="flex-grow p-4">
                <div class="bg-white p-8 rounded-lg shadow-lg w-full max-w-5xl mx-auto">
                    <h1 class="text-3xl font-bold text-gray-800 mb-2">
                        {format!("📺 {}", get_app_name())}
                    </h1>
                    <p class="text-gray-600 mb-6">
                        {"Enter a video URL to see its statistics and thumbnail."}
                    </p>

                    <UrlForm
                        url={(*video_url).clone()}
                        loading={*analysis == AnalysisState::Loading}
                        on_submit={on_submit}
                    />

                    <InfoMessage message={credential_prompt} />

                    {
                        match &*analysis {
                            AnalysisState::Idle => html! {},
                            AnalysisState::Loading => html! {
                                <p class="text-center text-gray-500">{"Loading video details..."}</p>
                            },
                            AnalysisState::Loaded(details) => html! {
                                <VideoReport details={details.clone()} />
                            },
                            state @ AnalysisState::NotFound(msg) => html! {
                                <NotFoundMessage
                                    heading={state.failure_heading()}
                                    message={Some(msg.clone())}
                                />
                            },
                            state @ AnalysisState::Failed(msg) => html! {
                                <ErrorMessage
                                    heading={state.failure_heading()}
                                    message={Some(msg.clone())}
                                />
                            },
                        }
                    }
                </div>
            </main>
        </div>
    }
}
