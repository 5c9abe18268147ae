pub mod order;
pub mod payment_request;

pub use order::{build_order, generate_order_id, PaymentInitiation};
pub use payment_request::{CustomerDetails, PaymentRequest, ValidatedPayment};
