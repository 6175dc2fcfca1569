//! Binary entrypoint for slide-deck.
//!
//! Wires stdin (read on its own thread), the optional autoplay timer and a logging renderer to the
//! presenter task; all behavior lives in the library crate.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use tracing::{Level, info};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::{EnvFilter, fmt};

use slide_deck::config::{AutoplayOptions, Configuration};
use slide_deck::controller::SlideController;
use slide_deck::events::{Navigate, TransitionFinished};
use slide_deck::indicator::{DotsIndicator, ProgressBar};
use slide_deck::render::LogRenderer;
use slide_deck::tasks;

#[derive(Debug, Parser)]
#[command(name = "slide-deck", version, about = "Keyboard and swipe driven slide presenter")]
struct Cli {
    /// Path to YAML config file
    #[arg(short, long, value_name = "FILE", default_value = "slides.yaml")]
    config: PathBuf,

    /// Advance automatically at this interval (e.g. "8s"), overriding the config
    #[arg(long, value_name = "DURATION", value_parser = humantime::parse_duration)]
    autoplay: Option<Duration>,

    /// Disable autoplay even if the config enables it
    #[arg(long, conflicts_with = "autoplay")]
    no_autoplay: bool,

    /// Increase log verbosity (repeatable)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbosity: u8) -> Result<()> {
    // map -v to log level
    let level = match verbosity {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let filter = EnvFilter::from_default_env().add_directive(
        format!("slide_deck={level}")
            .parse::<Directive>()
            .context("building log filter")?,
    );
    fmt().with_env_filter(filter).with_target(true).init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    let mut cfg = Configuration::from_yaml_file(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if cli.no_autoplay {
        cfg.autoplay = None;
    } else if let Some(interval) = cli.autoplay {
        cfg.autoplay = Some(AutoplayOptions { interval });
    }
    let cfg = cfg.validated().context("validating configuration")?;
    let deck = cfg.deck()?;
    info!(slides = deck.len(), "loaded deck from {}", cli.config.display());

    let autoplay_interval = cfg.autoplay.as_ref().map(|a| a.interval);

    // Channels (small/bounded)
    let (nav_tx, nav_rx) = mpsc::channel::<Navigate>(16); // Console/Autoplay -> Presenter
    let (finished_tx, finished_rx) = mpsc::channel::<TransitionFinished>(4); // Renderer -> Presenter

    let cancel = CancellationToken::new();
    let autoplay = cancel.child_token();

    {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if let Err(err) = tokio::signal::ctrl_c().await {
                tracing::warn!("ctrl-c handler failed: {err}");
                return;
            }
            info!("ctrl-c received; initiating shutdown");
            cancel.cancel();
        });
    }

    let mut controller = SlideController::new(
        deck,
        LogRenderer::new(finished_tx, cfg.transition_duration),
        cfg.transition_duration,
        cfg.completion_margin,
    );
    controller.register_indicator(Box::new(DotsIndicator::new(controller.len())));
    controller.register_indicator(Box::new(ProgressBar::new(controller.len())));

    let mut tasks = JoinSet::new();

    // Console input
    tasks.spawn({
        let nav_tx = nav_tx.clone();
        let swipe = cfg.swipe.clone();
        let cancel = cancel.clone();
        async move {
            tasks::console::run(tasks::console::stdin_lines(), nav_tx, swipe, cancel)
                .await
                .context("console task failed")
        }
    });

    // Autoplay (optional)
    if let Some(interval) = autoplay_interval {
        tasks.spawn({
            let nav_tx = nav_tx.clone();
            let autoplay = autoplay.clone();
            async move {
                tasks::autoplay::run(nav_tx, interval, autoplay)
                    .await
                    .context("autoplay task failed")
            }
        });
    }
    drop(nav_tx);

    // Presenter owns the controller; the app ends when it does.
    tasks::presenter::run(
        controller,
        nav_rx,
        finished_rx,
        autoplay,
        cfg.initial_reveal_delay,
        cancel.clone(),
    )
    .await
    .context("presenter failed")?;
    cancel.cancel();

    // Drain JoinSet (wait for other tasks to complete)
    while let Some(res) = tasks.join_next().await {
        match res {
            Ok(Ok(())) => {}
            Ok(Err(e)) => tracing::error!("task error: {e:?}"),
            Err(e) => tracing::error!("join error: {e}"),
        }
    }

    Ok(())
}
