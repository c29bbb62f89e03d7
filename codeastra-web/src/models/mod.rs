pub mod signup_state;
