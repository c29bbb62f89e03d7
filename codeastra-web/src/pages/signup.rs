use crate::components::text_field::TextField;
use crate::config::FrontendConfig;
use crate::models::signup_state::{FormAction, SignupFormState};
use i18nrs::yew::use_translation;
use shared::models::{FormField, ProjectLanguage, SignupRequest};
use strum::IntoEnumIterator;
use web_sys::HtmlSelectElement;
use yew::prelude::*;
use yew_icons::{Icon, IconId};

#[derive(Properties, PartialEq)]
pub struct SignupPageProps {
    /// Receives the account fields when the form is submitted.
    #[prop_or_default]
    pub on_submit: Option<Callback<SignupRequest>>,
}

/// Sign-up page: collects account details into local state.
///
/// The page neither validates nor sends anything; submitting hands the
/// collected fields to `on_submit`.
#[function_component(SignupPage)]
pub fn signup_page(props: &SignupPageProps) -> Html {
    let (i18n, _) = use_translation();
    let state = use_reducer(SignupFormState::default);
    let config = use_memo((), |_| FrontendConfig::new());

    let on_action = {
        let state = state.clone();
        Callback::from(move |action: FormAction| state.dispatch(action))
    };

    let onsubmit = {
        let state = state.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if let Some(callback) = &on_submit {
                callback.emit(state.form().to_request());
            }
        })
    };

    let on_language_change = on_action.reform(|event: Event| {
        let select: HtmlSelectElement = event.target_unchecked_into();
        FormAction::Input(FormField::Language, select.value())
    });
    let on_language_focus = on_action.reform(|_: FocusEvent| FormAction::Focus(FormField::Language));
    let on_language_blur = on_action.reform(|_: FocusEvent| FormAction::Blur(FormField::Language));
    let on_terms_click = on_action.reform(|_: MouseEvent| FormAction::ToggleTerms);

    let form = state.form();
    let text_field = |field: FormField, icon: IconId, input_type: &'static str, key: &str| {
        html! {
            <TextField
                {field}
                {icon}
                input_type={input_type}
                label={i18n.t(&format!("signup.{key}"))}
                placeholder={i18n.t(&format!("signup.{key}_placeholder"))}
                value={form.value(field)}
                focused={form.is_focused(field)}
                on_action={on_action.clone()}
            />
        }
    };
    let selected_language = form.value(FormField::Language);
    let accept_terms = form.accept_terms;

    html! {
        <div class="min-h-screen bg-base-300 flex items-center justify-center py-12">
            <div class="w-full max-w-7xl mx-auto px-8 flex items-center justify-between gap-16">
                <div class="hidden lg:flex flex-1 flex-col gap-8">
                    <div class="flex items-center justify-center">
                        <div class="w-48 h-48 rounded-full bg-primary flex items-center justify-center">
                            <Icon icon_id={IconId::HeroiconsOutlineCodeBracket} class="w-24 h-24" />
                        </div>
                    </div>
                    <div class="space-y-4 max-w-xl">
                        <h1 class="text-6xl font-bold leading-tight">
                            {i18n.t("hero.welcome")}
                            <br />
                            <span class="text-primary">{i18n.t("hero.universe")}</span>
                        </h1>
                        <p class="text-xl">{i18n.t("hero.tagline")}</p>
                    </div>
                    <div class="flex flex-wrap gap-3">
                        <span class="badge badge-lg gap-2">
                            <Icon icon_id={IconId::HeroiconsOutlineUserGroup} class="w-4 h-4" />
                            {i18n.t("hero.collaboration")}
                        </span>
                        <span class="badge badge-lg gap-2">
                            <Icon icon_id={IconId::HeroiconsOutlineBolt} class="w-4 h-4" />
                            {i18n.t("hero.fast")}
                        </span>
                        <span class="badge badge-lg gap-2">
                            <Icon icon_id={IconId::HeroiconsOutlineSparkles} class="w-4 h-4" />
                            {i18n.t("hero.ai")}
                        </span>
                    </div>
                </div>

                <div class="w-full max-w-md">
                    <div class="card bg-base-100 shadow-2xl">
                        <form class="card-body gap-2" {onsubmit}>
                            <h2 class="card-title text-3xl">{i18n.t("signup.title")}</h2>
                            <p class="text-base-content/70 mb-4">{i18n.t("signup.subtitle")}</p>

                            {text_field(FormField::FullName, IconId::HeroiconsSolidUser, "text", "full_name")}
                            {text_field(FormField::Username, IconId::HeroiconsSolidAtSymbol, "text", "username")}
                            {text_field(FormField::Email, IconId::HeroiconsSolidEnvelope, "email", "email")}
                            {text_field(FormField::Password, IconId::HeroiconsSolidLockClosed, "password", "password")}
                            {text_field(FormField::ConfirmPassword, IconId::HeroiconsSolidLockClosed, "password", "confirm_password")}

                            <div class="form-control">
                                <label class="label" for={FormField::Language.id()}>
                                    <span class="label-text">
                                        {i18n.t("signup.language")}
                                        {" "}
                                        <span class="text-xs text-base-content/50">{i18n.t("signup.optional")}</span>
                                    </span>
                                </label>
                                <select
                                    id={FormField::Language.id()}
                                    name={FormField::Language.id()}
                                    class={classes!("select", "select-bordered", "w-full", form.is_focused(FormField::Language).then_some("select-primary"))}
                                    onchange={on_language_change}
                                    onfocus={on_language_focus}
                                    onblur={on_language_blur}
                                >
                                    <option value="" selected={selected_language.is_empty()}>
                                        {i18n.t("signup.select_language")}
                                    </option>
                                    { for ProjectLanguage::iter().map(|language| html! {
                                        <option
                                            value={language.to_string()}
                                            selected={selected_language == language.as_ref()}
                                        >
                                            {language.label()}
                                        </option>
                                    }) }
                                </select>
                            </div>

                            <div class="flex items-start gap-3 mt-2">
                                <button
                                    type="button"
                                    id={FormField::AcceptTerms.id()}
                                    role="checkbox"
                                    aria-checked={accept_terms.to_string()}
                                    class={classes!("btn", "btn-xs", "btn-square", if accept_terms { "btn-primary" } else { "btn-outline" })}
                                    onclick={on_terms_click}
                                >
                                    if accept_terms {
                                        <Icon icon_id={IconId::HeroiconsSolidCheck} class="w-3 h-3" />
                                    }
                                </button>
                                <span class="text-sm">
                                    {i18n.t("signup.terms_prefix")}{" "}
                                    <a class="link link-primary" href={config.terms_url().to_string()}>{i18n.t("signup.terms")}</a>
                                    {" "}{i18n.t("signup.and")}{" "}
                                    <a class="link link-primary" href={config.privacy_url().to_string()}>{i18n.t("signup.privacy")}</a>
                                </span>
                            </div>

                            <div class="form-control mt-6">
                                <button class="btn btn-primary" type="submit">
                                    {i18n.t("signup.submit")}
                                </button>
                            </div>

                            <p class="text-center text-sm mt-4">
                                {i18n.t("signup.have_account")}{" "}
                                <a class="link link-primary font-semibold" href={config.login_url().to_string()}>
                                    {i18n.t("signup.login")}
                                </a>
                            </p>
                        </form>
                    </div>
                </div>
            </div>
        </div>
    }
}
