pub mod pesapal;

pub use pesapal::{
    AccessToken, BillingAddress, GatewayErrorBody, OrderRequest, SubmittedOrder,
    TransactionStatus, TransactionStatusReport,
};
