pub mod gateways;
pub mod pause;
pub mod static_table;
pub mod usecases;

pub mod entities {
    pub use talkmap_entities::{geo::*, location::*, record::*};
}
