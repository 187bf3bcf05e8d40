//! CLI entry point for dwc.

mod cli;

use clap::Parser;
use dwcolorizer::app::{self, RunPlan};
use dwcolorizer::build_info::{cli_version_text, AppInfo};
use dwcolorizer::config::load_config;
use dwcolorizer::launcher;
use dwcolorizer::theme::BUNDLED_THEME;
use dwcolorizer::ui::console::{Console, TerminalConsole, UnattendedConsole};
use dwcolorizer::ui::render::{RenderSink, Renderer};
use tracing_subscriber::EnvFilter;

/// Env var holding the tracing filter, e.g. `DWC_LOG=debug`.
const LOG_ENV: &str = "DWC_LOG";

fn main() {
    let args = cli::Args::parse();

    if args.version {
        println!("{}", cli_version_text());
        return;
    }

    init_tracing();

    let mut config = match load_config(args.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            Renderer::new(false).error(&e.to_string());
            std::process::exit(1);
        }
    };

    // Apply CLI overrides.
    if let Some(root) = &args.root {
        config.paths.root = Some(root.clone());
    }
    if args.no_color {
        config.display.color = false;
    }
    if args.no_launch {
        config.launch.enabled = false;
    }

    let renderer = Renderer::new(config.display.color);
    let app_data = dirs::config_dir();
    let plan = RunPlan {
        info: AppInfo::current(),
        mode: args.mode(),
        root: config.search_root(app_data.as_deref()),
        layout: config.layout(),
        content: BUNDLED_THEME.to_string(),
        color: config.display.color,
        launch: config
            .launch
            .enabled
            .then(|| config.launch.command.clone()),
    };

    let mut console: Box<dyn Console> = if args.yes || !config.prompts.pause {
        Box::new(UnattendedConsole::new())
    } else {
        Box::new(TerminalConsole::new())
    };

    let outcome = app::run(&plan, console.as_mut(), &renderer, &mut launcher::launch);
    std::process::exit(outcome.exit_code());
}

/// Route tracing output to stderr, quiet by default.
fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
