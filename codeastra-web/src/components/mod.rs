pub(crate) mod text_field;
