//! Client for the descriptive-text ("vibe") collaborator.
//!
//! One fire-and-forget HTTP call per presentation, issued from a background
//! thread so it can never perturb scene timing. Failure is logged and
//! swallowed; the vibe scene simply renders without a description.

use std::collections::HashMap;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use crossbeam_channel::{bounded, Receiver};
use serde::Deserialize;
use serde_json::json;

use crate::logging::log_debug;
use crate::stats::DiningStats;

const VIBE_TIMEOUT: Duration = Duration::from_secs(15);

/// Response of `/api/generate-vibe`: a one-line description plus a mapping of
/// substrings to highlight colors.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VibeResult {
    #[serde(default)]
    pub vibe: Option<String>,
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

/// POST the statistics record and wait for the vibe. Blocking; run on a
/// worker thread.
fn fetch_vibe(url: &str, stats: &DiningStats) -> Result<VibeResult> {
    let agent = ureq::AgentBuilder::new()
        .timeout(VIBE_TIMEOUT)
        .build();
    let response = agent
        .post(url)
        .send_json(json!({ "stats": stats }))
        .with_context(|| format!("vibe request to {url} failed"))?;
    let result: VibeResult = response
        .into_json()
        .context("vibe response was not the expected JSON shape")?;
    Ok(result)
}

/// Spawn the one-shot vibe fetch. The receiver yields at most one result;
/// on failure the channel just disconnects.
pub fn spawn_vibe_fetch(url: String, stats: &DiningStats) -> Receiver<VibeResult> {
    let (tx, rx) = bounded(1);
    let stats = stats.clone();
    thread::spawn(move || match fetch_vibe(&url, &stats) {
        Ok(result) => {
            log_debug("vibe fetch resolved");
            let _ = tx.send(result);
        }
        Err(err) => {
            log_debug(&format!("vibe fetch failed (continuing without): {err:#}"));
        }
    });
    rx
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_backend_response_shape() {
        let raw = r##"{
            "vibe": "You're a certified bagel gremlin.",
            "colors": {"bagel": "#f5c518", "gremlin": "#ff3086"}
        }"##;
        let result: VibeResult = serde_json::from_str(raw).unwrap();
        assert_eq!(
            result.vibe.as_deref(),
            Some("You're a certified bagel gremlin.")
        );
        assert_eq!(result.colors.get("bagel").map(String::as_str), Some("#f5c518"));
    }

    #[test]
    fn tolerates_an_error_payload() {
        // The backend answers {"error": ...} on failure; both fields default.
        let result: VibeResult = serde_json::from_str(r#"{"error": "boom"}"#).unwrap();
        assert!(result.vibe.is_none());
        assert!(result.colors.is_empty());
    }

    #[test]
    fn unreachable_endpoint_disconnects_without_a_result() {
        let stats = DiningStats::default();
        // Reserved TEST-NET address; connection fails fast or times out.
        let rx = spawn_vibe_fetch("http://192.0.2.1:1/api/generate-vibe".into(), &stats);
        match rx.recv_timeout(Duration::from_secs(30)) {
            Err(_) => {}
            Ok(_) => panic!("no vibe should arrive from an unreachable endpoint"),
        }
    }
}
