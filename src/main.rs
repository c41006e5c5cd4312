//! catalog-service binary

use catalog_service::prelude::*;

#[tokio::main]
async fn main() -> Result<(), ServiceError> {
    let config = Config::load()?;
    init_tracing(&config);

    let state = AppState::new(config.clone());
    let seed_users = state.config().registry.seed_users.clone();
    state.store().seed_users(seed_users).await;

    let app = router(state);
    Server::new(config).serve(app).await
}
