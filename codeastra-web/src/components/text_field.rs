use crate::models::signup_state::FormAction;
use shared::models::FormField;
use web_sys::HtmlInputElement;
use yew::{
    AttrValue, Callback, Html, Properties, TargetCast, classes,
    events::{FocusEvent, InputEvent},
    function_component, html,
};
use yew_icons::{Icon, IconId};

#[derive(Properties, PartialEq)]
pub struct TextFieldProps {
    pub field: FormField,
    pub label: AttrValue,
    pub icon: IconId,
    pub value: AttrValue,
    #[prop_or_default]
    pub placeholder: AttrValue,
    #[prop_or(AttrValue::Static("text"))]
    pub input_type: AttrValue,
    #[prop_or_default]
    pub focused: bool,
    pub on_action: Callback<FormAction>,
}

/// Labelled text input that reports keystrokes and focus changes as
/// [`FormAction`]s.
#[function_component(TextField)]
pub fn text_field(props: &TextFieldProps) -> Html {
    let field = props.field;

    let oninput = props.on_action.reform(move |event: InputEvent| {
        let input: HtmlInputElement = event.target_unchecked_into();
        FormAction::Input(field, input.value())
    });
    let onfocus = props
        .on_action
        .reform(move |_: FocusEvent| FormAction::Focus(field));
    let onblur = props
        .on_action
        .reform(move |_: FocusEvent| FormAction::Blur(field));

    let icon_class = if props.focused {
        "text-primary"
    } else {
        "text-base-content/50"
    };

    html! {
        <div class="form-control">
            <label class="label" for={field.id()}>
                <span class="label-text">{props.label.clone()}</span>
            </label>
            <div class="relative">
                <span class={classes!("absolute", "left-3", "top-1/2", "-translate-y-1/2", icon_class)}>
                    <Icon icon_id={props.icon} class="w-5 h-5" />
                </span>
                <input
                    id={field.id()}
                    name={field.id()}
                    type={props.input_type.clone()}
                    class={classes!("input", "input-bordered", "w-full", "pl-10", props.focused.then_some("input-primary"))}
                    placeholder={props.placeholder.clone()}
                    value={props.value.clone()}
                    {oninput}
                    {onfocus}
                    {onblur}
                />
            </div>
        </div>
    }
}
