pub mod prepare_env;
pub mod seed_data;

pub use prepare_env::{prepare_test_env, random_db_path};
pub use seed_data::{seed_catalog, SeededCatalog};
