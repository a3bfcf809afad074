mod get_public_key;
mod subscribe;
mod unsubscribe;

pub use get_public_key::*;
pub use subscribe::*;
pub use unsubscribe::*;
