//! Plain data records shared by the selector and the drivers.

pub mod entry;
pub mod score;
