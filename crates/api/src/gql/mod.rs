pub mod error;
pub mod loaders;
pub mod mutations;
pub mod queries;
pub mod schema;
pub mod types;

pub use mutations::MutationRoot;
pub use queries::QueryRoot;
pub use schema::build_schema;
