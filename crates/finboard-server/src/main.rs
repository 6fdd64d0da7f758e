use finboard_server::{build_router, build_state, ServerConfig};

#[shuttle_runtime::main]
async fn main(
    #[shuttle_runtime::Secrets] secrets: shuttle_runtime::SecretStore,
) -> shuttle_axum::ShuttleAxum {
    tracing::info!("📈 Finboard API initializing...");

    let config = ServerConfig::from_lookup(|key| secrets.get(key));
    let state = build_state(&config)?;
    let router = build_router(state);

    tracing::info!("📚 Swagger UI: /swagger-ui");
    tracing::info!("✅ Finboard API ready");

    Ok(router.into())
}
