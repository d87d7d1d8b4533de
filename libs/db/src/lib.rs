//! Database schema and the enums stored in it

mod r#enum;
mod schema;

pub use r#enum::*;
pub use schema::*;
