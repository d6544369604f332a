// File: crates/game-insights/src/config.rs
// Summary: Command-line configuration; every flag defaults to the fixed report layout.

use std::path::PathBuf;

use chart_core::{theme, RenderOptions};
use clap::Parser;

use crate::panels::{FIGURE_HEIGHT_IN, FIGURE_WIDTH_IN};

pub const DEFAULT_OUTPUT: &str = "video_game_analysis_visualizations.png";

/// Render the video game analysis figure and print key insights
#[derive(Parser, Debug, Clone)]
#[command(name = "game-insights")]
#[command(about = "Render the seven-panel video game analysis PNG and print a summary", long_about = None)]
#[command(version)]
pub struct Args {
    /// Output PNG path
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Pixels per inch for the 24x30 inch figure
    #[arg(long, value_name = "DPI", default_value_t = 100.0)]
    pub dpi: f32,

    /// Color theme
    #[arg(long, value_name = "NAME", default_value = "light", value_parser = ["light", "dark"])]
    pub theme: String,

    /// Verbosity level (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            dpi: 100.0,
            theme: "light".to_string(),
            verbose: 0,
            quiet: false,
        }
    }
}

impl Args {
    pub fn render_options(&self) -> RenderOptions {
        let mut opts = RenderOptions::for_figure(FIGURE_WIDTH_IN, FIGURE_HEIGHT_IN, self.dpi);
        opts.theme = theme::find(&self.theme);
        opts
    }
}
