pub mod callback;

pub use callback::{CallbackOutcome, CallbackQuery, IpnAcknowledgement, RedirectTargets};
