//! Sampler smoke tests against the host's real sysinfo data.

use std::time::Duration;

use sysdash_sampler::{spawn_sampler, MetricKind, MetricsMessage, Sampler, SamplerConfig, MEM_LABELS};
use tokio::sync::mpsc;

#[test]
fn cpu_sample_has_one_value_per_core() {
    let mut s = Sampler::new();
    let cores = s.core_count();
    assert!(cores >= 1);
    match s.sample_cpu() {
        MetricsMessage::Cpu(pcts) => {
            assert_eq!(pcts.len(), cores);
            assert!(pcts.iter().all(|p| (0.0..=100.0).contains(p)));
        }
        other => panic!("expected CPU message, got {:?}", other.kind()),
    }
}

#[test]
fn mem_sample_matches_label_order() {
    let mut s = Sampler::new();
    match s.sample_mem() {
        MetricsMessage::Mem(series) => {
            assert_eq!(series.len(), MEM_LABELS.len());
            // available and used can never exceed total
            assert!(series[1] <= series[0]);
            assert!(series[2] <= series[0]);
        }
        other => panic!("expected MEM message, got {:?}", other.kind()),
    }
}

#[test]
fn disk_and_net_samples_have_their_kind() {
    let mut s = Sampler::new();
    assert_eq!(s.sample_disks().kind(), MetricKind::Disk);
    match s.sample_disks() {
        MetricsMessage::Disk(rows) => {
            for r in rows {
                assert!(r.total > 0);
                assert!(r.used <= r.total);
            }
        }
        other => panic!("expected DISK message, got {:?}", other.kind()),
    }
    assert_eq!(s.sample_net().kind(), MetricKind::Net);
}

#[tokio::test]
async fn first_batch_covers_every_kind() {
    let (tx, mut rx) = mpsc::channel(16);
    let cfg = SamplerConfig {
        period: Duration::from_millis(50),
        disk_every: 5,
    };
    let handle = spawn_sampler(Sampler::new(), cfg, tx);

    let mut kinds = Vec::new();
    for _ in 0..4 {
        let msg = tokio::time::timeout(Duration::from_secs(5), rx.recv())
            .await
            .expect("sampler produced nothing")
            .expect("channel closed early");
        kinds.push(msg.kind());
    }
    assert_eq!(
        kinds,
        vec![MetricKind::Cpu, MetricKind::Mem, MetricKind::Disk, MetricKind::Net]
    );

    drop(rx);
    tokio::time::timeout(Duration::from_secs(5), handle)
        .await
        .expect("sampler did not stop after receiver dropped")
        .expect("sampler task panicked");
}
