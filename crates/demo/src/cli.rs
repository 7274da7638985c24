// File: crates/demo/src/cli.rs
// Summary: Command-line arguments of the PNG demo and the window demo.

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "chart-demo", about = "Render every chart type, and its animation, to PNG files")]
pub struct DemoArgs {
    /// Two-column CSV (label,value); sample data is used when omitted
    pub input: Option<String>,

    /// Theme preset: classic, dark or high-contrast
    #[arg(long, default_value = "classic")]
    pub theme: String,

    /// Output directory
    #[arg(long = "out", default_value = "target/out")]
    pub out_dir: PathBuf,
}

#[derive(Parser, Debug)]
#[command(name = "chart-window-demo", about = "Play the chart animations in a window; any key shows the next chart")]
pub struct WindowArgs {
    /// Two-column CSV (label,value); sample data is used when omitted
    pub input: Option<String>,

    /// Theme preset: classic, dark or high-contrast
    #[arg(default_value = "classic")]
    pub theme: String,
}
