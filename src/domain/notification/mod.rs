pub mod error;
pub mod filter;
pub mod list;
pub mod serialization;
pub mod types;

pub use error::NotificationError;
pub use filter::admit;
pub use list::NotificationList;
pub use serialization::{decode_list, encode_list};
pub use types::NotificationRecord;
