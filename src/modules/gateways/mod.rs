pub mod models;
pub mod services;

pub use models::{
    AccessToken, BillingAddress, OrderRequest, SubmittedOrder, TransactionStatus,
    TransactionStatusReport,
};
pub use services::{PaymentGateway, PesapalClient};
