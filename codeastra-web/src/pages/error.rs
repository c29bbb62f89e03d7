use crate::routes::MainRoute;
use i18nrs::yew::use_translation;
use yew::{Html, function_component, html};
use yew_router::prelude::Link;

/// Shown for any path the router does not know.
#[function_component(ErrorPage)]
pub fn error_page() -> Html {
    let (i18n, _) = use_translation();

    html! {
        <div class="flex flex-col items-center justify-center min-h-screen gap-6 p-4">
            <h1 class="text-2xl font-bold">{ i18n.t("error.not_found") }</h1>
            <Link<MainRoute> to={MainRoute::Signup} classes="btn btn-primary">
                { i18n.t("error.back") }
            </Link<MainRoute>>
        </div>
    }
}
