pub mod password_hasher;
pub mod token_provider;
mod user_repository;
mod verification_code_repository;

pub use password_hasher::{HashError, PasswordHasher};
pub use token_provider::{TokenClaims, TokenError, TokenProvider};
pub use user_repository::{
    CreateUserData, UpdateUserData, UserCredentials, UserRepository, UserRepositoryError,
    UserResult,
};
pub use verification_code_repository::{
    NewVerificationCode, VerificationCodeRecord, VerificationCodeRepository,
    VerificationCodeRepositoryError,
};
