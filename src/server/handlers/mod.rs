//! HTTP handlers.

mod survey;
mod test_email;

pub use survey::{client_ip, survey_handler};
pub use test_email::test_email_handler;
