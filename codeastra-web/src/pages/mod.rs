mod error;
pub mod signup;

pub use error::ErrorPage;
pub use signup::SignupPage;
