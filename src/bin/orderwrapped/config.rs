use clap::Parser;
use std::path::PathBuf;

/// CLI configuration for the slideshow binary.
#[derive(Debug, Parser, Clone)]
#[command(about = "Order Wrapped - replay your dining stats in the terminal", author, version)]
pub(crate) struct ShowConfig {
    /// Statistics JSON file produced by the upload parser
    pub(crate) stats: PathBuf,

    /// Vibe endpoint to POST the statistics to
    #[arg(
        long = "vibe-url",
        env = "ORDERWRAPPED_VIBE_URL",
        default_value = "http://localhost:5000/api/generate-vibe"
    )]
    pub(crate) vibe_url: String,

    /// Skip the vibe call entirely (the vibe scene shows its fallback)
    #[arg(long = "no-vibe", default_value_t = false)]
    pub(crate) no_vibe: bool,

    /// Disable mouse capture (keyboard navigation only)
    #[arg(long = "no-mouse", default_value_t = false)]
    pub(crate) no_mouse: bool,

    /// Open on the first scene paused instead of playing
    #[arg(long = "start-paused", default_value_t = false)]
    pub(crate) start_paused: bool,

    /// Write debug logs to the temp log file
    #[arg(long = "logs", default_value_t = false)]
    pub(crate) logs: bool,
}
