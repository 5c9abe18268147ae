pub mod gateway_trait;
pub mod pesapal;

pub use gateway_trait::PaymentGateway;
pub use pesapal::PesapalClient;

#[cfg(test)]
pub(crate) mod stub;
