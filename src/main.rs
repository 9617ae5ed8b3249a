use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tutorhub_backend::{
    config::{get_config, init_config},
    services::question_service::QuestionService,
    store::postgres::{create_pool, PgStore},
    app_router, AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
    init_config()?;
    let config = get_config();

    let pool = create_pool().await?;
    sqlx::migrate!("./migrations").run(&pool).await?;

    let store = Arc::new(PgStore::new(pool));
    let app_state = AppState::new(store);

    // Aggregate reconciler: periodically rescans every test and repairs
    // cached totals that drifted, e.g. after a failed aggregate write.
    {
        let state = app_state.clone();
        let interval = Duration::from_secs(config.reconcile_interval_secs);
        tokio::spawn(async move {
            let questions = QuestionService::new(state.store.clone());
            loop {
                tokio::time::sleep(interval).await;
                match questions.reconcile_all().await {
                    Ok(0) => {}
                    Ok(fixed) => {
                        info!(fixed, "aggregate reconciler repaired drifted tests");
                    }
                    Err(e) => {
                        tracing::error!(error = ?e, "aggregate reconciler error");
                    }
                }
            }
        });
    }

    let app = app_router(app_state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = config.server_address.parse()?;
    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
