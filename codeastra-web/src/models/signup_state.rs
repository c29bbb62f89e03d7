use shared::models::{FormField, SignupForm};
use std::rc::Rc;
use yew::Reducible;

/// User interactions with the sign-up form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    Input(FormField, String),
    ToggleTerms,
    Focus(FormField),
    Blur(FormField),
}

/// Reducer-backed state for the sign-up page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignupFormState(SignupForm);

impl SignupFormState {
    pub fn form(&self) -> &SignupForm {
        &self.0
    }
}

impl Reducible for SignupFormState {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut form = self.0.clone();
        match action {
            FormAction::Input(field, value) => form.set_text(field, value),
            FormAction::ToggleTerms => form.toggle_accept_terms(),
            FormAction::Focus(field) => form.focus(field),
            FormAction::Blur(field) => form.blur(field),
        }
        Rc::new(Self(form))
    }
}
