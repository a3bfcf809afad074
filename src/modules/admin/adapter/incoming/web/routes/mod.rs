mod dashboard;
mod export;
mod manage_artisans;
mod manage_bookings;
mod manage_users;

pub use dashboard::*;
pub use export::*;
pub use manage_artisans::*;
pub use manage_bookings::*;
pub use manage_users::*;
