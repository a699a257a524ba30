mod client;
mod phone;
mod search;
mod update;

pub use client::{Client, ClientRecord};
pub use phone::Phone;
pub use search::SearchCriteria;
pub use update::ClientUpdate;
