pub mod player;
pub mod upload;
pub mod users;
