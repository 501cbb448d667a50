//! Background sampler: periodically collects CPU/memory/disk/network stats with sysinfo
//! and pushes them to the dashboard as [`MetricsMessage`]s.

use sysinfo::{CpuRefreshKind, Disks, MemoryRefreshKind, Networks, RefreshKind, System};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval, Duration, MissedTickBehavior};
use tracing::{debug, info};

use crate::types::{DiskRow, MetricsMessage, NetCounters};

#[derive(Debug, Clone, Copy)]
pub struct SamplerConfig {
    pub period: Duration,
    // disks change slowly; only sample them every N periods
    pub disk_every: u32,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            period: Duration::from_millis(1000),
            disk_every: 5,
        }
    }
}

/// Persistent sysinfo handles. CPU usage and network totals are only meaningful
/// when the same handles are refreshed across samples.
pub struct Sampler {
    sys: System,
    disks: Disks,
    networks: Networks,
}

impl Sampler {
    pub fn new() -> Self {
        let refresh_kind = RefreshKind::nothing()
            .with_cpu(CpuRefreshKind::nothing().with_cpu_usage())
            .with_memory(MemoryRefreshKind::everything());
        let mut sys = System::new_with_specifics(refresh_kind);
        sys.refresh_cpu_usage();
        sys.refresh_memory();

        Self {
            sys,
            disks: Disks::new_with_refreshed_list(),
            networks: Networks::new_with_refreshed_list(),
        }
    }

    /// Logical core count, never zero.
    pub fn core_count(&self) -> usize {
        self.sys.cpus().len().max(1)
    }

    pub fn sample_cpu(&mut self) -> MetricsMessage {
        self.sys.refresh_cpu_usage();
        MetricsMessage::Cpu(
            self.sys
                .cpus()
                .iter()
                .map(|c| c.cpu_usage().clamp(0.0, 100.0))
                .collect(),
        )
    }

    pub fn sample_mem(&mut self) -> MetricsMessage {
        self.sys.refresh_memory();
        MetricsMessage::Mem(vec![
            self.sys.total_memory(),
            self.sys.available_memory(),
            self.sys.used_memory(),
            self.sys.free_memory(),
        ])
    }

    pub fn sample_disks(&mut self) -> MetricsMessage {
        self.disks.refresh(true);
        // Skip pseudo filesystems that report no capacity
        let rows = self
            .disks
            .list()
            .iter()
            .filter(|d| d.total_space() > 0)
            .map(|d| DiskRow {
                mount: d.mount_point().to_string_lossy().to_string(),
                total: d.total_space(),
                used: d.total_space().saturating_sub(d.available_space()),
                available: d.available_space(),
            })
            .collect();
        MetricsMessage::Disk(rows)
    }

    pub fn sample_net(&mut self) -> MetricsMessage {
        self.networks.refresh(true);
        MetricsMessage::Net(
            self.networks
                .iter()
                .map(|(name, data)| NetCounters {
                    name: name.to_string(),
                    sent: data.total_transmitted(),
                    received: data.total_received(),
                })
                .collect(),
        )
    }
}

impl Default for Sampler {
    fn default() -> Self {
        Self::new()
    }
}

/// Run the sampler on its own task. It is the only producer on `tx` and stops
/// once the receiving side is gone.
pub fn spawn_sampler(
    mut sampler: Sampler,
    cfg: SamplerConfig,
    tx: mpsc::Sender<MetricsMessage>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!(period_ms = cfg.period.as_millis() as u64, "sampler started");
        let mut ticker = interval(cfg.period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let disk_every = cfg.disk_every.max(1);
        let mut n: u32 = 0;

        loop {
            ticker.tick().await;

            let mut batch = vec![sampler.sample_cpu(), sampler.sample_mem()];
            if n % disk_every == 0 {
                batch.push(sampler.sample_disks());
            }
            batch.push(sampler.sample_net());
            n = n.wrapping_add(1);

            for msg in batch {
                if tx.send(msg).await.is_err() {
                    debug!("metrics receiver dropped; sampler stopping");
                    return;
                }
            }
        }
    })
}
