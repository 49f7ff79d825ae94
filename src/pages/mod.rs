mod about;
mod events;
mod home;
mod not_found;

pub use about::About;
pub use events::{EventList, Events};
pub use home::Home;
pub use not_found::NotFound;
