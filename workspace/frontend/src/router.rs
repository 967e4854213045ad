use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::dashboard::Dashboard;
use crate::components::layout::layout::Layout;
use crate::pages::connection_test::ConnectionTestPage;

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/test")]
    ConnectionTest,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(routes: Route) -> Html {
    log::debug!("Routing to: {:?}", routes);
    match routes {
        Route::Home => {
            log::trace!("Rendering Dashboard page");
            html! { <Layout><Dashboard /></Layout> }
        }
        Route::ConnectionTest => {
            log::trace!("Rendering Connection test page");
            html! { <Layout><ConnectionTestPage /></Layout> }
        }
        Route::NotFound => {
            log::warn!("404 - Route not found");
            html! {
                <Layout>
                    <div class="text-slate-300 space-y-2">
                        <h2 class="text-white text-xl font-semibold">{"404 Not Found"}</h2>
                        <Link<Route> to={Route::Home} classes="text-blue-400 hover:text-blue-300">{"Back to dashboard"}</Link<Route>>
                    </div>
                </Layout>
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::Home.to_path(), "/");
        assert_eq!(Route::ConnectionTest.to_path(), "/test");
    }
}
