pub use super::db::query::{
    builder::{build, QueryBuilder},
    Specifier, Syntax,
};
pub use super::db::{skip, SKIP};
pub use super::types::*;
pub use super::{args, Config, Connection, Database, Error, Result};
