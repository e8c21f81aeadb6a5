use anyhow::Result;
use clap::Parser;
use std::net::SocketAddr;

use chatgate_engine::OpenAiCompatBackend;

/// CLI arguments for chatgate-server
#[derive(Parser)]
#[command(name = "chatgate-server")]
#[command(about = "HTTP gateway that relays chat messages to AI completion backends")]
#[command(version)]
pub struct Cli {
    /// Address to listen on
    #[arg(long, value_name = "ADDR", default_value = "0.0.0.0:8000", env = "CHATGATE_BIND")]
    pub bind: SocketAddr,

    /// Upstream OpenAI-compatible backend as `name=url`, or a bare URL.
    /// Repeatable; backends are tried in the order given.
    #[arg(
        long = "backend",
        value_name = "NAME=URL",
        env = "CHATGATE_BACKENDS",
        value_delimiter = ','
    )]
    pub backends: Vec<String>,
}

impl Cli {
    /// Build the backend list, falling back to a local llama.cpp
    /// server when none were given.
    pub fn build_backends(&self) -> Result<Vec<OpenAiCompatBackend>> {
        if self.backends.is_empty() {
            return Ok(vec![OpenAiCompatBackend::new(
                "llama-cpp",
                "http://127.0.0.1:8080",
            )]);
        }

        self.backends
            .iter()
            .map(|spec| {
                let (name, url) = parse_backend_spec(spec)?;
                Ok(OpenAiCompatBackend::new(name, url))
            })
            .collect()
    }
}

/// Parse a `name=url` pair. A bare URL gets the name "Auto", meaning
/// completions are attributed to the router rather than a named
/// upstream.
fn parse_backend_spec(spec: &str) -> Result<(&str, &str)> {
    let spec = spec.trim();
    if spec.is_empty() {
        anyhow::bail!("empty backend spec");
    }
    match spec.split_once('=') {
        Some((name, url)) if !name.is_empty() && !url.is_empty() => Ok((name, url)),
        Some(_) => anyhow::bail!("invalid backend spec '{spec}', expected name=url"),
        None => Ok(("Auto", spec)),
    }
}
