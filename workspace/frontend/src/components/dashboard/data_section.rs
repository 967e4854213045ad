use common::{row_cells, row_key, Collection, ListView};
use yew::prelude::*;

use crate::api_client::records::list_records;
use crate::api_client::use_api_client;
use crate::hooks::use_cancel_token;
use crate::state::{ListAction, ListState};
use crate::ui::loading::Loading;

#[derive(Properties, PartialEq)]
pub struct DataSectionProps {
    pub collection: Collection,
    /// Defaults to the collection's plural name
    #[prop_or_default]
    pub title: Option<AttrValue>,
}

#[function_component(DataSection)]
pub fn data_section(props: &DataSectionProps) -> Html {
    let client = use_api_client();
    let cancel = use_cancel_token();
    let list = use_reducer(ListState::default);

    let fetch_items = {
        let list = list.dispatcher();

        use_callback(props.collection, move |_: (), collection| {
            let collection = *collection;
            let client = client.clone();
            let cancel = cancel.clone();
            let list = list.clone();

            list.dispatch(ListAction::Start);

            wasm_bindgen_futures::spawn_local(async move {
                let result = list_records(&client, collection).await;
                if cancel.is_cancelled() {
                    return;
                }
                if let Err(e) = &result {
                    log::warn!("Keeping previous {} records: {}", collection, e);
                }
                list.dispatch(ListAction::Finish(result));
            });
        })
    };

    // Fetch on mount
    {
        let fetch_items = fetch_items.clone();
        use_effect_with((), move |_| {
            fetch_items.emit(());
            || ()
        });
    }

    let on_refresh = {
        let fetch_items = fetch_items.clone();
        Callback::from(move |_| {
            log::debug!("User refreshed list view");
            fetch_items.emit(());
        })
    };

    let title = props
        .title
        .clone()
        .unwrap_or_else(|| AttrValue::Static(props.collection.list_title()));

    html! {
        <div class="bg-slate-900/60 border border-white/10 rounded-2xl p-5">
            <div class="flex items-center justify-between mb-3">
                <h3 class="text-white font-semibold">{title}</h3>
                <button onclick={on_refresh} class="text-xs text-slate-300 hover:text-white">{"Refresh"}</button>
            </div>
            {if list.loading {
                html! { <Loading text={AttrValue::Static("Loading...")} /> }
            } else if list.items.is_empty() {
                html! { <p class="text-slate-400">{"No records yet."}</p> }
            } else {
                render_table(&list)
            }}
        </div>
    }
}

fn render_table(list: &ListView) -> Html {
    let columns = list.columns();

    html! {
        <div class="overflow-x-auto">
            <table class="min-w-full text-left text-sm">
                <thead class="text-slate-300">
                    <tr>
                        { for columns.iter().map(|column| html! {
                            <th key={column.clone()} class="py-2 pr-6 font-medium">{column}</th>
                        })}
                    </tr>
                </thead>
                <tbody class="text-slate-200">
                    { for list.items.iter().enumerate().map(|(index, record)| html! {
                        <tr key={row_key(record, index)} class="border-t border-white/5">
                            { for row_cells(record, &columns).into_iter().zip(columns.iter()).map(|(cell, column)| html! {
                                <td key={column.clone()} class="py-2 pr-6 truncate max-w-[220px]">{cell}</td>
                            })}
                        </tr>
                    })}
                </tbody>
            </table>
        </div>
    }
}
