use common::{display_count, display_currency, Collection, Summary};
use yew::prelude::*;

use super::data_section::DataSection;
use super::quick_add::QuickAdd;
use super::stat_card::StatCard;
use crate::api_client::summary::get_summary;
use crate::api_client::use_api_client;
use crate::hooks::use_cancel_token;

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let client = use_api_client();
    let cancel = use_cancel_token();
    let summary = use_state(|| None::<Summary>);

    let load_summary = {
        let summary = summary.clone();

        use_callback((), move |_: (), _| {
            let client = client.clone();
            let cancel = cancel.clone();
            let summary = summary.clone();

            wasm_bindgen_futures::spawn_local(async move {
                match get_summary(&client).await {
                    Ok(data) if !cancel.is_cancelled() => summary.set(Some(data)),
                    Ok(_) => {}
                    Err(e) => log::warn!("Summary unavailable: {}", e),
                }
            });
        })
    };

    // Fetch on mount
    {
        let load_summary = load_summary.clone();
        use_effect_with((), move |_| {
            load_summary.emit(());
            || ()
        });
    }

    let on_create = {
        let load_summary = load_summary.clone();
        Callback::from(move |collection: Collection| {
            log::debug!("{} created, reloading summary", collection);
            load_summary.emit(());
        })
    };

    // Unset summary renders like an empty one
    let data = (*summary).clone().unwrap_or_default();

    html! {
        <div class="space-y-8">
            <div class="grid sm:grid-cols-2 lg:grid-cols-5 gap-4">
                <StatCard title="Trusts" value={display_count(data.trusts)} icon="fas fa-building" color="blue" />
                <StatCard title="Beneficiaries" value={display_count(data.beneficiaries)} icon="fas fa-users" color="emerald" />
                <StatCard title="Assets Value" value={display_currency(data.total_asset_value)} icon="fas fa-wallet" color="violet" />
                <StatCard title="NGOs" value={display_count(data.ngos)} icon="fas fa-building" color="amber" />
                <StatCard title="Donations" value={display_currency(data.total_donation)} icon="fas fa-gift" color="pink" />
            </div>

            <QuickAdd {on_create} />

            <div class="grid lg:grid-cols-2 gap-6">
                { for Collection::LISTED.iter().map(|collection| html! {
                    <DataSection key={collection.as_str()} collection={*collection} />
                })}
            </div>
        </div>
    }
}
