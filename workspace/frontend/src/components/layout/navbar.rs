use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

/// Page header with the product name and the connection test link.
#[function_component(Navbar)]
pub fn navbar() -> Html {
    html! {
        <header class="relative border-b border-white/10">
            <div class="max-w-6xl mx-auto px-6 py-6 flex items-center justify-between">
                <Link<Route> to={Route::Home} classes="flex items-center gap-3">
                    <div class="w-9 h-9 rounded-lg bg-blue-600/20 border border-blue-400/30 grid place-items-center">
                        <i class="fas fa-database text-blue-300"></i>
                    </div>
                    <div>
                        <h1 class="text-white font-bold">{"Living Trust & NGO Manager"}</h1>
                        <p class="text-slate-400 text-xs">{"Manage trusts, beneficiaries, assets, NGOs and donations."}</p>
                    </div>
                </Link<Route>>
                <Link<Route> to={Route::ConnectionTest} classes="text-slate-300 hover:text-white text-sm">
                    {"Connection test"}
                </Link<Route>>
            </div>
        </header>
    }
}
