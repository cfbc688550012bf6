use std::env;
use std::io::{self, Read};

use anyhow::{Context, Result, bail};
use tracing_subscriber::EnvFilter;

use nba_stats_chat::chat::{ChatConfig, OpenAiChat};
use nba_stats_chat::compose::answer_query;
use nba_stats_chat::gateway::{GatewayConfig, HttpStatsGateway};

fn main() -> Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let query = read_query()?;
    if query.trim().is_empty() {
        bail!("usage: nba_stats_chat <question about NBA player stats>");
    }

    let gateway = HttpStatsGateway::new(GatewayConfig::from_env()?);
    let chat = OpenAiChat::new(ChatConfig::from_env()?);

    let answer = answer_query(query.trim(), &gateway, &chat)?;
    println!("{answer}");
    Ok(())
}

/// The query is the joined argv tail, or stdin when no arguments are given.
fn read_query() -> Result<String> {
    let args: Vec<String> = env::args().skip(1).collect();
    if !args.is_empty() {
        return Ok(args.join(" "));
    }
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .context("failed to read query from stdin")?;
    Ok(buf)
}
