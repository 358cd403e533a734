//! API service modules for Whistle endpoints.
//!
//! Each service covers one part of the resource hierarchy and is obtained
//! from [`WhistleClient`](crate::WhistleClient).

mod breeds;
mod devices;
mod misc;
mod pets;
mod users;

pub use breeds::BreedsService;
pub use devices::DevicesService;
pub use misc::MiscService;
pub use pets::PetsService;
pub use users::UsersService;
