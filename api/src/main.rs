use anyhow::Context;
use api::{create_router, AppState};
use qa_system::{Settings, T5Generator, TextGenerator};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let settings = Settings::from_env();

    log::info!("Starting PDF question service with {:?}", settings);

    // Model download and weight loading block; keep them off the async workers.
    let model_settings = settings.model.clone();
    let generator = tokio::task::spawn_blocking(move || T5Generator::load(&model_settings))
        .await
        .context("model loader task failed")?
        .context("failed to load the generation model")?;
    let generator: Arc<dyn TextGenerator> = Arc::new(generator);

    let state = AppState::new(generator, &settings.static_dir);
    let app = create_router(state, settings.max_upload_bytes);

    let listener = tokio::net::TcpListener::bind(&settings.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", settings.bind_addr))?;
    log::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
