//! Data access for the roster report.

mod connection;
mod repository;
mod roster;
mod schema;

pub use connection::ScopedConnection;
pub use repository::{SeaOrmTeacherRepository, TeacherRepository};
pub use roster::{ROSTER_QUERY, RosterRow, fold_rows, load_roster};
pub use schema::{SCHEMA, create_schema};

use crate::module;

/// Roster repository over sea-orm. Needs a registered `DatabaseConfig`.
#[module(
    providers = [SeaOrmTeacherRepository],
    bindings = [(dyn TeacherRepository => SeaOrmTeacherRepository)],
)]
pub struct StoreModule;
