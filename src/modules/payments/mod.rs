pub mod controllers;
pub mod models;
pub mod services;

pub use controllers::configure;
pub use models::{CustomerDetails, PaymentInitiation, PaymentRequest, ValidatedPayment};
pub use services::{PaymentService, PaymentSettings};
