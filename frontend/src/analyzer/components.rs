use crate::models::VideoDetails;
use crate::utils::{metric_cards, summary_rows};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct MessageProps {
    pub message: Option<String>,
    #[prop_or_default]
    pub heading: Option<&'static str>,
}

#[function_component(ErrorMessage)]
pub fn error_message(props: &MessageProps) -> Html {
    if let Some(msg) = &props.message {
        html! {
            <div class="bg-red-100 border border-red-400 text-red-700 px-4 py-3 rounded mb-4">
                { for props.heading.map(|heading| html! { <p class="font-bold">{heading}</p> }) }
                { msg }
            </div>
        }
    } else {
        html! {}
    }
}

// Shown instead of metrics when the API returned no item for the ID.
#[function_component(NotFoundMessage)]
pub fn not_found_message(props: &MessageProps) -> Html {
    if let Some(msg) = &props.message {
        html! {
            <div class="bg-yellow-50 border border-yellow-400 text-yellow-800 px-4 py-6 rounded mb-4 text-center">
                { for props.heading.map(|heading| html! { <h2 class="text-xl font-bold mb-2">{heading}</h2> }) }
                <p>{ msg }</p>
            </div>
        }
    } else {
        html! {}
    }
}

#[function_component(InfoMessage)]
pub fn info_message(props: &MessageProps) -> Html {
    if let Some(msg) = &props.message {
        html! {
            <div class="bg-blue-100 border border-blue-400 text-blue-700 px-4 py-3 rounded mb-4">
                { msg }
            </div>
        }
    } else {
        html! {}
    }
}

#[derive(Properties, PartialEq)]
pub struct ApiKeySidebarProps {
    pub api_key: String,
    pub server_key_configured: bool,
    pub on_api_key_change: Callback<String>,
}

#[function_component(ApiKeySidebar)]
pub fn api_key_sidebar(props: &ApiKeySidebarProps) -> Html {
    let on_input = {
        let on_api_key_change = props.on_api_key_change.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            on_api_key_change.emit(value);
        })
    };

    html! {
        <aside class="w-full md:w-72 bg-gray-800 text-gray-100 p-6 md:min-h-screen">
            <h2 class="text-xl font-bold mb-4">{"Settings ⚙️"}</h2>
            <label class="block text-sm font-semibold mb-2">
                {"YouTube API Key"}
            </label>
            <input
                type="password"
                class="w-full p-2 rounded text-gray-900 focus:outline-none focus:ring-2 focus:ring-blue-500"
                placeholder="Enter your YouTube API key..."
                value={props.api_key.clone()}
                oninput={on_input}
            />
            {
                if props.server_key_configured {
                    html! {
                        <p class="text-xs text-gray-400 mt-2">
                            {"The server has a key configured. A key entered here takes precedence."}
                        </p>
                    }
                } else {
                    html! {}
                }
            }
        </aside>
    }
}

#[derive(Properties, PartialEq)]
pub struct UrlFormProps {
    pub url: String,
    pub loading: bool,
    pub on_submit: Callback<String>,
}

#[function_component(UrlForm)]
pub fn url_form(props: &UrlFormProps) -> Html {
    let current_input = use_state(|| props.url.clone());

    let on_input = {
        let current_input = current_input.clone();
        Callback::from(move |e: InputEvent| {
            let input_value = e.target_unchecked_into::<HtmlInputElement>().value();
            current_input.set(input_value);
        })
    };

    let on_submit = {
        let on_submit = props.on_submit.clone();
        let current_input = current_input.clone();
        Callback::from(move |e: web_sys::SubmitEvent| {
            e.prevent_default();
            on_submit.emit((*current_input).clone());
        })
    };

    html! {
        <form onsubmit={on_submit} class="flex mb-4">
            <input
                type="text"
                class="flex-grow p-3 border border-gray-300 rounded-l-lg focus:outline-none focus:ring-2 focus:ring-blue-500"
                placeholder="https://www.youtube.com/watch?v=..."
                value={(*current_input).clone()}
                oninput={on_input}
                disabled={props.loading}
            />
            <button
                type="submit"
                class="bg-blue-600 text-white p-3 rounded-r-lg hover:bg-blue-700 focus:outline-none focus:ring-2 focus:ring-blue-500 disabled:opacity-50"
                disabled={props.loading}
            >
                { if props.loading { "Analyzing..." } else { "Analyze" } }
            </button>
        </form>
    }
}

#[derive(Properties, PartialEq)]
pub struct VideoReportProps {
    pub details: VideoDetails,
}

#[function_component(ThumbnailPanel)]
pub fn thumbnail_panel(props: &VideoReportProps) -> Html {
    let thumbnail_url = &props.details.thumbnail_url;

    html! {
        <div>
            <h2 class="text-xl font-semibold text-gray-800 mb-3">{"🖼️ Thumbnail"}</h2>
            {
                if thumbnail_url.is_empty() {
                    html! { <p class="text-gray-500">{"No thumbnail available."}</p> }
                } else {
                    html! {
                        <>
                            <img src={thumbnail_url.clone()} alt={props.details.title.clone()} class="w-full rounded-lg shadow" />
                            <a href={thumbnail_url.clone()} target="_blank" class="inline-block mt-2 text-blue-600 hover:underline">
                                {"🔗 Download high-resolution thumbnail"}
                            </a>
                        </>
                    }
                }
            }
        </div>
    }
}

#[function_component(MetricsPanel)]
pub fn metrics_panel(props: &VideoReportProps) -> Html {
    html! {
        <div>
            <h2 class="text-xl font-semibold text-gray-800 mb-3">{"📊 Key Metrics"}</h2>
            <div class="grid grid-cols-2 gap-4">
                { for metric_cards(&props.details).into_iter().map(|(label, value)| html! {
                    <div class="bg-gray-100 p-4 rounded-lg">
                        <p class="text-sm text-gray-500">{label}</p>
                        <p class="text-2xl font-bold text-gray-800">{value}</p>
                    </div>
                })}
            </div>
        </div>
    }
}

#[function_component(SummaryTable)]
pub fn summary_table(props: &VideoReportProps) -> Html {
    html! {
        <div class="mt-8">
            <h2 class="text-xl font-semibold text-gray-800 mb-3">{"📝 Video Summary"}</h2>
            <table class="min-w-full bg-white border border-gray-300">
                <thead class="bg-gray-50">
                    <tr>
                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Field"}</th>
                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Value"}</th>
                    </tr>
                </thead>
                <tbody class="bg-white divide-y divide-gray-200">
                    { for summary_rows(&props.details).into_iter().map(|(label, value)| html! {
                        <tr key={label}>
                            <td class="px-6 py-4 whitespace-nowrap text-sm font-medium text-gray-700">{label}</td>
                            <td class="px-6 py-4 text-sm text-gray-900">{value}</td>
                        </tr>
                    })}
                </tbody>
            </table>
        </div>
    }
}

#[function_component(VideoReport)]
pub fn video_report(props: &VideoReportProps) -> Html {
    html! {
        <div>
            <hr class="my-6 border-gray-300" />
            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                <ThumbnailPanel details={props.details.clone()} />
                <MetricsPanel details={props.details.clone()} />
            </div>
            <SummaryTable details={props.details.clone()} />
        </div>
    }
}
