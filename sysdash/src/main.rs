//! Entry point for the sysdash TUI: resolves config, starts the sampler and
//! input reader, runs the dashboard loop, and waits for it to shut down cleanly.

use std::{env, time::Duration};

use anyhow::Context;
use sysdash::{
    app::App,
    config::{config_path, load_file, parse_args, usage, Config},
    input::spawn_input_reader,
    logging, shutdown,
    terminal::TerminalGuard,
};
use sysdash_sampler::{spawn_sampler, Sampler, SamplerConfig};
use tokio::sync::mpsc;
use tracing::{info, warn};

// Sampler bursts are four messages; leave room for a few.
const METRICS_BUFFER: usize = 64;
const INPUT_BUFFER: usize = 16;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let prog = env::args().next().unwrap_or_else(|| "sysdash".into());
    let args = match parse_args(env::args()) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("{e}\n{}", usage(&prog));
            std::process::exit(2);
        }
    };
    if args.help {
        println!("{}", usage(&prog));
        return Ok(());
    }

    let file = load_file(&config_path())?;
    let cfg = Config::resolve(file, |k| env::var(k).ok(), args)?;
    logging::init(cfg.log_file.as_deref())?;

    let sampler = Sampler::new();
    let cores = sampler.core_count();
    info!(cores, refresh_ms = cfg.refresh_ms, sample_ms = cfg.sample_ms, "starting sysdash");

    // Fatal if the terminal can't be set up; no point in sampling anything
    let mut guard = TerminalGuard::new().context("render subsystem unavailable")?;

    let (metrics_tx, mut metrics_rx) = mpsc::channel(METRICS_BUFFER);
    let (input_tx, mut input_rx) = mpsc::channel(INPUT_BUFFER);
    let sampler_task = spawn_sampler(
        sampler,
        SamplerConfig {
            period: Duration::from_millis(cfg.sample_ms),
            ..SamplerConfig::default()
        },
        metrics_tx,
    );
    let input_task = spawn_input_reader(input_tx);

    let (shutdown, mut waiter) = shutdown::channel();
    let mut app = App::new(cores, Duration::from_millis(cfg.refresh_ms), shutdown);
    let loop_task = tokio::spawn(async move {
        let res = app.run(guard.terminal(), &mut input_rx, &mut metrics_rx).await;
        // restore the terminal before anyone prints
        drop(guard);
        res
    });

    tokio::select! {
        _ = waiter.terminated() => {}
        _ = tokio::signal::ctrl_c() => {
            warn!("interrupted; stopping dashboard");
            loop_task.abort();
        }
    }

    sampler_task.abort();
    input_task.abort();
    waiter.done().await;

    match loop_task.await {
        Ok(res) => {
            let exit = res?;
            info!(?exit, "sysdash stopped");
            Ok(())
        }
        Err(e) if e.is_cancelled() => Ok(()),
        Err(e) => Err(e).context("dashboard task failed"),
    }
}
