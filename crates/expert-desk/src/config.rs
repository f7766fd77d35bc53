use std::{net::SocketAddr, path::PathBuf};

use clap::Parser;

/// Command-line / environment settings for the server process.
#[derive(Debug, Clone, Parser)]
#[command(name = "expert-desk")]
#[command(about = "Ask a career coach or a travel planner, backed by OpenAI")]
#[command(version)]
pub struct Settings {
    /// Address to listen on
    #[arg(long, env = "EXPERT_DESK_ADDR", default_value = "127.0.0.1:8501")]
    pub addr: SocketAddr,

    /// TOML secrets file consulted when OPENAI_API_KEY is not in the environment
    #[arg(
        long,
        env = "EXPERT_DESK_SECRETS",
        default_value = ".streamlit/secrets.toml"
    )]
    pub secrets_file: PathBuf,

    /// OpenAI-compatible base URL (defaults to https://api.openai.com/v1)
    #[arg(long, env = "OPENAI_BASE_URL")]
    pub openai_base_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_flags() {
        let settings = Settings::try_parse_from([
            "expert-desk",
            "--addr",
            "0.0.0.0:9000",
            "--secrets-file",
            "/run/secrets/app.toml",
            "--openai-base-url",
            "http://localhost:8080/v1",
        ])
        .unwrap();

        assert_eq!(settings.addr, "0.0.0.0:9000".parse().unwrap());
        assert_eq!(settings.secrets_file, PathBuf::from("/run/secrets/app.toml"));
        assert_eq!(
            settings.openai_base_url.as_deref(),
            Some("http://localhost:8080/v1")
        );
    }

    #[test]
    fn command_definition_is_consistent() {
        use clap::CommandFactory;
        Settings::command().debug_assert();
    }
}
