//! heapsort-viz CLI entry point.
//!
//! Plays the heapsort trace as a bar chart in the terminal, then prints the
//! final heap tree. `--json` dumps the trace instead; `--svg` writes the tree.

use std::fs;
use std::io::{self, Write};
use std::process;
use std::thread;
use std::time::Duration;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use heapsort_viz::config::RenderConfig;
use heapsort_viz::input;
use heapsort_viz::layout::compute_layout_with_config;
use heapsort_viz::playback::{Playback, Tick};
use heapsort_viz::renderers::{
    AsciiTreeRenderer, BarChartRenderer, Renderer, StepRenderer, SvgRenderer,
};

/// Step-by-step heapsort visualizer.
#[derive(Parser, Debug)]
#[command(
    name = "heapsort-viz",
    version = env!("HEAPSORT_VIZ_VERSION"),
    about = "Step-by-step heapsort visualizer"
)]
struct Cli {
    /// Numbers to sort (1 to 20 values)
    #[arg(allow_negative_numbers = true)]
    numbers: Vec<String>,

    /// Numbers as one list separated by commas, semicolons or spaces
    #[arg(short = 'i', long = "input", conflicts_with = "numbers", allow_hyphen_values = true)]
    input: Option<String>,

    /// Use plain ASCII instead of Unicode characters
    #[arg(short = 'a', long = "ascii")]
    use_ascii: bool,

    /// Delay between steps in milliseconds (0 = no delay)
    #[arg(short = 't', long = "interval", default_value = "0")]
    interval_ms: u64,

    /// Print the trace as JSON instead of animating it
    #[arg(long = "json")]
    json: bool,

    /// Write the final heap tree as SVG to this file
    #[arg(short = 's', long = "svg")]
    svg: Option<String>,

    /// Only print the final tree
    #[arg(short = 'q', long = "quiet")]
    quiet: bool,
}

fn fail(msg: impl std::fmt::Display) -> ! {
    eprintln!("error: {}", msg);
    process::exit(1);
}

fn write_frame(out: &mut impl Write, label: &str, frame: &str) {
    if let Err(e) = writeln!(out, "{}\n{}", label, frame).and_then(|_| out.flush()) {
        fail(format!("cannot write stdout: {}", e));
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = RenderConfig {
        unicode: !cli.use_ascii,
        interval_ms: cli.interval_ms,
        ..RenderConfig::default()
    };

    let text = cli.input.clone().unwrap_or_else(|| cli.numbers.join(" "));
    let values = input::parse_list(&text, config.max_count).unwrap_or_else(|e| fail(e));
    info!(count = values.len(), "starting visualization");

    let mut playback = Playback::start(values);
    let mut out = io::stdout().lock();

    if cli.json {
        let json = serde_json::to_string_pretty(playback.steps()).unwrap_or_else(|e| fail(e));
        if let Err(e) = writeln!(out, "{}", json) {
            fail(format!("cannot write stdout: {}", e));
        }
        return;
    }

    if !cli.quiet {
        let bars = BarChartRenderer::new(config.unicode, config.bar_width);
        write_frame(&mut out, &playback.label(), &bars.render(playback.current()));
        while let Tick::Advanced(step) = playback.advance() {
            let frame = bars.render(step);
            if config.interval_ms > 0 {
                thread::sleep(Duration::from_millis(config.interval_ms));
            }
            write_frame(&mut out, &playback.label(), &frame);
        }
    }

    let nodes = compute_layout_with_config(playback.final_array(), &config.layout);
    let tree = AsciiTreeRenderer::new(config.unicode).render(&nodes);
    if let Err(e) = write!(out, "{}", tree).and_then(|_| out.flush()) {
        fail(format!("cannot write stdout: {}", e));
    }

    if let Some(ref path) = cli.svg {
        let svg = SvgRenderer::new(&config).render(&nodes);
        if let Err(e) = fs::write(path, svg) {
            fail(format!("cannot write '{}': {}", path, e));
        }
        info!(path = %path, "wrote heap tree svg");
    }
}
