// Modul Ajar pipeline: structure validation, component extraction, prompt composition.
// Every function here is pure; handlers call them directly on the request task.

pub mod composer;
pub mod extractor;
pub mod handlers;
pub mod hedging;
pub mod models;
pub mod prompts;
pub mod sections;
pub mod validator;

pub use composer::compose_prompt;
pub use extractor::extract;
pub use validator::validate;
