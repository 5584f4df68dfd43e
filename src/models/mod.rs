pub mod booking_steps;
pub mod entries;
pub mod receptionists;
pub mod sessions;
