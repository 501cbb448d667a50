//! Library surface of the sysdash sampler: message types and the sysinfo-backed producer task.

pub mod sampler;
pub mod types;

pub use sampler::{spawn_sampler, Sampler, SamplerConfig};
pub use types::{DiskRow, MetricKind, MetricsMessage, NetCounters, MEM_LABELS};
