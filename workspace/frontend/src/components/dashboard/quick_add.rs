use common::{Collection, CreateOutcome, QuickAddAction, SubmitStep};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::api_client::records::create_record;
use crate::api_client::use_api_client;
use crate::hooks::use_cancel_token;
use crate::state::QuickAddState;
use crate::ui::alert::blocking_alert;
use crate::ui::toast::ToastContext;

#[derive(Properties, PartialEq)]
pub struct QuickAddProps {
    /// Called with the collection of every record created
    #[prop_or_default]
    pub on_create: Option<Callback<Collection>>,
}

#[function_component(QuickAdd)]
pub fn quick_add(props: &QuickAddProps) -> Html {
    let client = use_api_client();
    let cancel = use_cancel_token();
    let toast_ctx = use_context::<ToastContext>();
    let form = use_reducer(QuickAddState::default);

    let on_toggle = {
        let form = form.dispatcher();
        Callback::from(move |_| form.dispatch(QuickAddAction::Toggle))
    };

    let on_collection_change = {
        let form = form.dispatcher();
        Callback::from(move |e: Event| {
            let raw = e.target_unchecked_into::<HtmlSelectElement>().value();
            match raw.parse::<Collection>() {
                Ok(selected) => {
                    log::debug!("Quick add switched to {}", selected);
                    form.dispatch(QuickAddAction::Select(selected));
                }
                Err(e) => log::warn!("Ignoring selector value: {}", e),
            }
        })
    };

    let on_submit = {
        let form = form.clone();
        let on_create = props.on_create.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let payload = match form.prepare_submit() {
                SubmitStep::Busy => return,
                SubmitStep::Alert(message) => {
                    blocking_alert(&message);
                    return;
                }
                SubmitStep::Send(payload) => payload,
            };

            let selected = form.collection;
            let client = client.clone();
            let cancel = cancel.clone();
            let toast_ctx = toast_ctx.clone();
            let on_create = on_create.clone();
            let dispatcher = form.dispatcher();

            dispatcher.dispatch(QuickAddAction::SubmitStarted);

            wasm_bindgen_futures::spawn_local(async move {
                let result = create_record(&client, selected, &payload).await;

                let outcome = CreateOutcome::new(&result, cancel.is_cancelled());
                if outcome.update_form {
                    dispatcher.dispatch(QuickAddAction::SubmitFinished {
                        created: outcome.created,
                    });
                    if outcome.created {
                        if let Some(toast_ctx) = toast_ctx {
                            toast_ctx.show_success(format!("{} created", selected.label()));
                        }
                        if let Some(on_create) = on_create {
                            on_create.emit(selected);
                        }
                    }
                } else {
                    log::debug!("Quick add unmounted before {} creation finished", selected);
                }
                if let Some(message) = outcome.alert {
                    blocking_alert(&message);
                }
            });
        })
    };

    let fields = form.fields().iter().map(|field| {
        let name = field.name;
        let oninput = {
            let form = form.dispatcher();
            Callback::from(move |e: InputEvent| {
                let value = e.target_unchecked_into::<HtmlInputElement>().value();
                form.dispatch(QuickAddAction::SetField {
                    name: name.to_string(),
                    value,
                });
            })
        };

        html! {
            <input
                key={name}
                name={name}
                placeholder={name}
                value={form.value(name).to_string()}
                {oninput}
                class="bg-slate-800 text-slate-100 border border-white/10 rounded-lg px-3 py-2"
            />
        }
    });

    html! {
        <div class="bg-slate-900/60 border border-white/10 rounded-2xl p-5">
            <div class="flex items-center justify-between mb-4">
                <h3 class="text-white font-semibold">{"Quick add"}</h3>
                <button
                    onclick={on_toggle}
                    class="flex items-center gap-2 bg-blue-600 hover:bg-blue-500 text-white px-3 py-1.5 rounded-lg transition"
                >
                    <i class="fas fa-plus"></i>{" New"}
                </button>
            </div>
            if form.open {
                <form onsubmit={on_submit} class="grid sm:grid-cols-2 gap-3">
                    <select
                        onchange={on_collection_change}
                        class="col-span-2 bg-slate-800 text-slate-100 border border-white/10 rounded-lg px-3 py-2"
                    >
                        { for Collection::ALL.iter().map(|c| html! {
                            <option value={c.as_str()} selected={*c == form.collection}>{c.label()}</option>
                        })}
                    </select>
                    { for fields }
                    <button
                        type="submit"
                        disabled={form.submitting}
                        class="col-span-2 bg-emerald-600 hover:bg-emerald-500 text-white px-4 py-2 rounded-lg"
                    >
                        {if form.submitting { "Saving..." } else { "Save" }}
                    </button>
                </form>
            }
        </div>
    }
}
