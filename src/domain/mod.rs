pub mod connection;
pub mod notification;
