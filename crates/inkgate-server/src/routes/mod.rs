pub mod artists;
pub mod bookings;
pub mod config;
pub mod gate;
