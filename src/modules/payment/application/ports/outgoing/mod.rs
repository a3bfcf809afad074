mod payment_repository;

pub use payment_repository::{
    CreatePaymentData, PaymentRepository, PaymentRepositoryError, PaymentResult,
};
