//! Messages the sampler pushes to the dashboard.
//! Keep this module minimal and stable: it is the contract between producer and consumer.

/// Labels for the MEM series, in the order the sampler emits the values.
pub const MEM_LABELS: [&str; 4] = ["Total", "Avail", "Used", "Free"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricKind {
    Cpu,
    Mem,
    Disk,
    Net,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiskRow {
    pub mount: String,
    pub total: u64,
    pub used: u64,
    pub available: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetCounters {
    pub name: String,
    // cumulative totals since the sampler started (consumer diffs to get rates)
    pub sent: u64,
    pub received: u64,
}

/// One unit of the metrics stream. Exactly one kind of payload per message.
///
/// New kinds may be added; consumers must ignore kinds they do not know.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum MetricsMessage {
    /// Per-core utilization 0..=100, index = core id.
    Cpu(Vec<f32>),
    /// Bytes, ordered as [`MEM_LABELS`].
    Mem(Vec<u64>),
    Disk(Vec<DiskRow>),
    Net(Vec<NetCounters>),
}

impl MetricsMessage {
    pub fn kind(&self) -> MetricKind {
        match self {
            MetricsMessage::Cpu(_) => MetricKind::Cpu,
            MetricsMessage::Mem(_) => MetricKind::Mem,
            MetricsMessage::Disk(_) => MetricKind::Disk,
            MetricsMessage::Net(_) => MetricKind::Net,
        }
    }
}
