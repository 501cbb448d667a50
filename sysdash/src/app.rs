//! App state and main loop: multiplexes the refresh tick, terminal input and the
//! metrics stream, applies updates to the dashboard, and redraws.

use std::{io, time::Duration};

use ratatui::{backend::Backend, Terminal};
use sysdash_sampler::MetricsMessage;
use tokio::sync::mpsc;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::dashboard::Dashboard;
use crate::history::NetRateTracker;
use crate::input::UiEvent;
use crate::layout;
use crate::shutdown::Shutdown;

/// Why the loop returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    Quit,
    /// The input source closed, so nothing could ever ask us to quit.
    InputClosed,
}

pub struct App {
    dashboard: Dashboard,

    // Network totals snapshot + 40-sample throughput history
    net: NetRateTracker,

    refresh: Duration,
    shutdown: Shutdown,
}

impl App {
    pub fn new(cores: usize, refresh: Duration, shutdown: Shutdown) -> Self {
        Self {
            dashboard: Dashboard::new(cores),
            net: NetRateTracker::new(),
            refresh,
            shutdown,
        }
    }

    pub fn dashboard(&self) -> &Dashboard {
        &self.dashboard
    }

    pub fn net(&self) -> &NetRateTracker {
        &self.net
    }

    /// Run until quit. Each selected event is handled to completion, redraw
    /// included, before the next one is looked at.
    pub async fn run<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        input: &mut mpsc::Receiver<UiEvent>,
        metrics: &mut mpsc::Receiver<MetricsMessage>,
    ) -> anyhow::Result<Exit> {
        // Initial empty frame
        self.redraw(terminal)?;

        let mut tick = interval_at(Instant::now() + self.refresh, self.refresh);
        tick.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let mut metrics_open = true;

        loop {
            tokio::select! {
                // Input first so a busy metrics stream can never starve 'q';
                // metrics before the tick so a redraw shows everything already queued
                biased;

                ev = input.recv() => {
                    let exit = match ev {
                        Some(ev) => self.handle_input(ev, terminal)?,
                        None => {
                            warn!("input stream closed; shutting down");
                            Some(self.finish(Exit::InputClosed))
                        }
                    };
                    if let Some(exit) = exit {
                        return Ok(exit);
                    }
                }

                msg = metrics.recv(), if metrics_open => match msg {
                    Some(m) => self.handle_metrics(m),
                    None => {
                        warn!("metrics stream closed; dashboard will stop updating");
                        metrics_open = false;
                    }
                },

                _ = tick.tick() => self.redraw(terminal)?,
            }
        }
    }

    /// Returns `Some` when the loop must stop.
    pub fn handle_input<B: Backend>(
        &mut self,
        ev: UiEvent,
        terminal: &mut Terminal<B>,
    ) -> io::Result<Option<Exit>> {
        match ev {
            UiEvent::Quit => {
                info!("quit requested");
                return Ok(Some(self.finish(Exit::Quit)));
            }
            UiEvent::PauseToggle => {
                let running = self.dashboard.toggle_pause();
                info!(running, "pause toggled");
            }
            UiEvent::Resize => self.redraw(terminal)?,
        }
        Ok(None)
    }

    /// Apply one metrics message. While paused it is consumed and dropped.
    pub fn handle_metrics(&mut self, msg: MetricsMessage) {
        if !self.dashboard.is_running() {
            return;
        }
        match msg {
            MetricsMessage::Cpu(pcts) => {
                for (core, pct) in pcts.into_iter().enumerate() {
                    self.dashboard.set_core_percent(core, pct);
                }
            }
            MetricsMessage::Mem(series) => self.dashboard.set_memory(series),
            MetricsMessage::Disk(rows) => self.dashboard.set_disks(rows),
            MetricsMessage::Net(ifaces) => {
                let totals = self.net.observe(&ifaces);
                self.dashboard
                    .set_network(self.net.rx(), self.net.tx(), totals, self.net.peaks());
            }
            other => debug!(kind = ?other.kind(), "ignoring unsupported metrics message"),
        }
    }

    /// Recompute the layout for the current terminal size and paint everything.
    pub fn redraw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        let size = terminal.size()?;
        let l = layout::compute(size.width, size.height, self.dashboard.cores());
        self.dashboard.apply_layout(&l);
        terminal.draw(|f| self.dashboard.render(f))?;
        Ok(())
    }

    fn finish(&mut self, exit: Exit) -> Exit {
        self.shutdown.terminate();
        self.shutdown.complete();
        exit
    }
}
