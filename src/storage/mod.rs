//! SQLite storage: pool setup, migrations, inserts, and snapshot queries.

mod insert;
mod migrations;
mod pool;
mod queries;
pub mod test_helpers;

pub use insert::{
    insert_profile, insert_resource, insert_threat, record_score_event, stamp_confirmation,
};
pub use migrations::run_migrations;
pub use pool::init_db_pool_with_path;
pub use queries::{find_profile, list_resources, list_threats, score_summary};
