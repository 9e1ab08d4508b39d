pub mod analysis;
pub mod email;
pub mod health;
pub mod server;
