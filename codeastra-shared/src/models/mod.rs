pub mod project;
pub mod signup;

pub use project::{ProjectCreationResult, ProjectFile, ProjectSummary};
pub use signup::{FormField, ProjectLanguage, SignupForm, SignupRequest};
