pub mod controllers;
pub mod models;
pub mod services;

pub use controllers::configure;
pub use models::{CallbackOutcome, CallbackQuery, IpnAcknowledgement, RedirectTargets};
pub use services::CallbackService;
