//! PesaPay: hosted checkout through the PesaPal payment gateway
//!
//! Accepts a payment from a web form, obtains a checkout redirect from
//! PesaPal, and reconciles the result through the browser callback and
//! instant payment notifications.

pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;

// Re-export commonly used types
pub use modules::callbacks;
pub use modules::gateways;
pub use modules::payments;
pub use modules::{configure, AppState};
