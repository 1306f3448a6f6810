pub mod message;
pub mod send;
