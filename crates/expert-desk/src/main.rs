// Expert Desk - ask a career coach or a travel planner, backed by OpenAI

use anyhow::Result;
use clap::Parser;
use expert_desk::{
    completion,
    config::Settings,
    credential::{CredentialResolver, EnvironmentSource, TomlSecretStore},
    page::PageController,
    server,
};
use tokio::net::TcpListener;
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to install tracing subscriber: {err}"))
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env first so both the settings and the credential lookup see it
    let dotenv = dotenvy::dotenv();

    init_tracing()?;

    match dotenv {
        Ok(path) => info!("Loaded .env from: {}", path.display()),
        Err(err) if err.not_found() => debug!("no .env file found, using process environment"),
        Err(err) => warn!(error = %err, "failed to load .env, using process environment"),
    }

    let settings = Settings::parse();

    let resolver = CredentialResolver::new(
        EnvironmentSource,
        TomlSecretStore::new(settings.secrets_file.clone()),
    );

    let app = match resolver.resolve() {
        Some(api_key) => {
            let backend =
                completion::openai_backend(&api_key, settings.openai_base_url.as_deref())?;
            info!(base_url = backend.base_url(), "OpenAI backend ready");
            server::router(PageController::new(completion::completion_client(backend)))
        }
        None => {
            error!(
                secrets_file = %settings.secrets_file.display(),
                "OPENAI_API_KEY is not configured, serving the configuration error page only"
            );
            server::unconfigured_router()
        }
    };

    let listener = TcpListener::bind(settings.addr).await?;
    info!("Expert Desk running on http://{}", settings.addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
