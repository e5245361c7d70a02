use std::env;

use async_graphql::{EmptySubscription, Schema};

use super::{MutationRoot, QueryRoot};
use crate::state::AppState;

pub type ApiSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the GraphQL schema and inject shared state (AppState) into the context.
///
/// The dataloaders are deliberately not schema data: they are request-scoped
/// and attached per request by [`super::loaders::attach_request_loaders`].
pub fn build_schema(state: AppState) -> ApiSchema {
    let introspection_enabled = env::var("GQL_INTROSPECTION")
        .map(|v| v == "true")
        .unwrap_or(false);

    let mut builder = Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(state) // AppState is Clone; available in resolvers via ctx.data::<AppState>()
        .limit_depth(15)
        .limit_complexity(200);

    if !introspection_enabled {
        builder = builder.disable_introspection();
    }

    builder.finish()
}
