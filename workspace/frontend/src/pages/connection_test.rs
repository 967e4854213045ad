use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::api_client::summary::check_backend;
use crate::api_client::use_api_client;
use crate::hooks::{use_cancel_token, FetchState};
use crate::settings::AppSettings;
use crate::ui::error::ErrorDisplay;
use crate::ui::loading::Loading;
use crate::ui::toast::ToastContext;

#[derive(Clone, PartialEq)]
struct CheckResult {
    status: u16,
    checked_at: String,
}

#[function_component(ConnectionTestPage)]
pub fn connection_test_page() -> Html {
    let client = use_api_client();
    let cancel = use_cancel_token();
    let toast_ctx = use_context::<ToastContext>();
    let check = use_state(FetchState::<CheckResult>::default);
    let url_input = use_state(|| client.base_url().to_string());

    let run_check = {
        let client = client.clone();
        let check = check.clone();

        use_callback((), move |_: (), _| {
            let client = client.clone();
            let cancel = cancel.clone();
            let check = check.clone();

            check.set(FetchState::Loading);

            wasm_bindgen_futures::spawn_local(async move {
                let result = check_backend(&client).await;
                if cancel.is_cancelled() {
                    return;
                }

                let checked_at = chrono::Local::now().format("%H:%M:%S").to_string();
                check.set(match result {
                    Ok(status) => FetchState::Success(CheckResult { status, checked_at }),
                    Err(e) => FetchState::Error(format!("{} (checked at {})", e, checked_at)),
                });
            });
        })
    };

    {
        let run_check = run_check.clone();
        use_effect_with((), move |_| {
            run_check.emit(());
            || ()
        });
    }

    let on_url_input = {
        let url_input = url_input.clone();
        Callback::from(move |e: InputEvent| {
            url_input.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };

    let on_save = {
        let url_input = url_input.clone();
        let toast_ctx = toast_ctx.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let outcome = AppSettings::save_backend_url(&url_input);
            notify_saved(toast_ctx.as_ref(), outcome.map_err(|e| format!("{:?}", e)));
        })
    };

    let on_reset = {
        let toast_ctx = toast_ctx.clone();
        Callback::from(move |_| {
            let outcome = AppSettings::clear_backend_url();
            notify_saved(toast_ctx.as_ref(), outcome.map_err(|e| format!("{:?}", e)));
        })
    };

    html! {
        <div class="bg-slate-900/60 border border-white/10 rounded-2xl p-5 space-y-6">
            <div>
                <h2 class="text-white font-semibold">{"Connection test"}</h2>
                <p class="text-slate-400 text-sm">
                    {"Backend: "}<code class="text-slate-200">{client.base_url()}</code>
                </p>
            </div>

            {match &*check {
                FetchState::NotStarted => html! {},
                FetchState::Loading => html! { <Loading text={AttrValue::Static("Contacting backend...")} /> },
                FetchState::Success(result) => html! {
                    <div class="flex flex-col gap-3">
                        <div class="flex items-center gap-3 rounded-xl border border-emerald-500/20 bg-emerald-500/10 p-4 text-emerald-200">
                            <i class="fas fa-check-circle text-xl"></i>
                            <span>{format!("Connected (HTTP {}) at {}", result.status, result.checked_at)}</span>
                        </div>
                        <button
                            onclick={run_check.reform(|_| ())}
                            class="self-start text-xs text-slate-300 hover:text-white"
                        >
                            {"Run again"}
                        </button>
                    </div>
                },
                FetchState::Error(message) => html! {
                    <ErrorDisplay title="Connection check failed" message={message.clone()} on_retry={run_check.clone()} />
                },
            }}

            <form onsubmit={on_save} class="grid sm:grid-cols-[1fr_auto_auto] gap-3">
                <input
                    value={(*url_input).clone()}
                    oninput={on_url_input}
                    placeholder="http://localhost:8000"
                    class="bg-slate-800 text-slate-100 border border-white/10 rounded-lg px-3 py-2"
                />
                <button type="submit" class="bg-blue-600 hover:bg-blue-500 text-white px-3 py-2 rounded-lg">
                    {"Save backend URL"}
                </button>
                <button type="button" onclick={on_reset} class="text-sm text-slate-300 hover:text-white">
                    {"Use default"}
                </button>
            </form>
        </div>
    }
}

fn notify_saved(toast_ctx: Option<&ToastContext>, outcome: Result<(), String>) {
    match (toast_ctx, outcome) {
        (Some(toast_ctx), Ok(())) => {
            toast_ctx.show_info("Backend URL saved. Reload the page to use it.".to_string())
        }
        (Some(toast_ctx), Err(e)) => toast_ctx.show_error(format!("Could not save backend URL: {}", e)),
        (None, Ok(())) => log::info!("Backend URL override updated"),
        (None, Err(e)) => log::error!("Could not save backend URL: {}", e),
    }
}
