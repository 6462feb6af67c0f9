pub mod component;
pub mod converters;

pub use component::NotificationComponent;
