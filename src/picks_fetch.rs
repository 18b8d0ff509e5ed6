use std::env;
use std::fs;
use std::path::PathBuf;
use std::sync::mpsc::{Receiver, Sender};
use std::thread;

use anyhow::{Context, Result};

use crate::http_client::http_client;
use crate::sample_feed;
use crate::state::{Delta, Pick, ProviderCommand};

pub const DEFAULT_PICKS_PATH: &str = "public/picks.json";

/// Where the slate document comes from, resolved once per load from the
/// environment:
/// - `PICKS_SOURCE=sample` generates a demo slate,
/// - `PICKS_URL` fetches over HTTP,
/// - otherwise the local file at `PICKS_PATH` (default `public/picks.json`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PicksSource {
    Url(String),
    File(PathBuf),
    Sample,
}

pub fn picks_source() -> PicksSource {
    let source = env::var("PICKS_SOURCE")
        .unwrap_or_default()
        .to_lowercase();
    if source == "sample" {
        return PicksSource::Sample;
    }
    if let Some(url) = env::var("PICKS_URL").ok().and_then(non_empty) {
        return PicksSource::Url(url);
    }
    let path = env::var("PICKS_PATH")
        .ok()
        .and_then(non_empty)
        .unwrap_or_else(|| DEFAULT_PICKS_PATH.to_string());
    PicksSource::File(PathBuf::from(path))
}

pub fn source_label(source: &PicksSource) -> String {
    match source {
        PicksSource::Url(url) => url.clone(),
        PicksSource::File(path) => path.display().to_string(),
        PicksSource::Sample => "sample slate".to_string(),
    }
}

/// One slate document, parsed. An empty or `null` body parses to an empty
/// slate; anything else that is not a valid pick array is an error.
pub fn parse_picks_json(raw: &str) -> Result<Vec<Pick>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "null" {
        return Ok(Vec::new());
    }
    serde_json::from_str(trimmed).context("invalid picks json")
}

pub fn load_picks(source: &PicksSource) -> Result<Vec<Pick>> {
    let raw = match source {
        PicksSource::Url(url) => fetch_picks_body(url)?,
        PicksSource::File(path) => fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?,
        PicksSource::Sample => return Ok(sample_feed::sample_slate()),
    };
    parse_picks_json(&raw)
}

fn fetch_picks_body(url: &str) -> Result<String> {
    let client = http_client()?;
    let resp = client.get(url).send().context("request failed")?;
    let status = resp.status();
    let body = resp.text().context("failed reading body")?;
    if !status.is_success() {
        return Err(anyhow::anyhow!("http {status}: {body}"));
    }
    Ok(body)
}

/// Provider thread: performs the single startup load, then services manual
/// reload commands. The UI never blocks on the load; it sees the transition
/// through `Delta` messages. Errors stay on this side of the channel as
/// `Delta::LoadFailed`, never as a panic.
pub fn spawn_picks_provider(tx: Sender<Delta>, cmd_rx: Receiver<ProviderCommand>) {
    thread::spawn(move || {
        run_load(&tx);

        while let Ok(cmd) = cmd_rx.recv() {
            match cmd {
                ProviderCommand::Reload => run_load(&tx),
            }
        }
    });
}

fn run_load(tx: &Sender<Delta>) {
    let _ = tx.send(Delta::Loading);
    let source = picks_source();
    match load_picks(&source) {
        Ok(picks) => {
            let _ = tx.send(Delta::Log(format!(
                "[INFO] Loaded {} picks from {}",
                picks.len(),
                source_label(&source)
            )));
            let _ = tx.send(Delta::SetPicks(picks));
        }
        Err(err) => {
            let _ = tx.send(Delta::LoadFailed(format!("{err:#}")));
        }
    }
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
