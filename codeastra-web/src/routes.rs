use crate::pages::{ErrorPage, SignupPage};
use shared::models::SignupRequest;
use wasm_bindgen::prelude::*;
use yew::Callback;
use yew::prelude::*;
use yew_router::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

/// The main routes
#[derive(Debug, Clone, PartialEq, Routable)]
pub enum MainRoute {
    #[at("/")]
    Home,
    #[at("/signup")]
    Signup,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Console line for a submitted sign-up form. The password never leaves
/// the form.
pub fn submission_message(request: &SignupRequest) -> String {
    format!(
        "Sign-up submitted for username={:?} email={:?}",
        request.username, request.email
    )
}

fn log_submission(request: SignupRequest) {
    log(&submission_message(&request));
}

/// Switch function for the main routes.
pub fn switch(route: MainRoute) -> Html {
    log(std::format!("Switching to main route: {:?}", route).as_str());
    match route {
        MainRoute::Home => html! { <Redirect<MainRoute> to={MainRoute::Signup} /> },
        MainRoute::Signup => html! {
            <SignupPage on_submit={Some(Callback::from(log_submission))} />
        },
        MainRoute::NotFound => html! { <ErrorPage /> },
    }
}
