mod account;
mod autoresponder;
mod campaign;
mod contact;
mod custom_field;
mod from_field;
mod ids;
mod newsletter;
mod pagination;
mod query;
mod search_contact;
mod tag;

pub use account::*;
pub use autoresponder::*;
pub use campaign::*;
pub use contact::*;
pub use custom_field::*;
pub use from_field::*;
pub use ids::*;
pub use newsletter::*;
pub use pagination::*;
pub use query::*;
pub use search_contact::*;
pub use tag::*;
