//! Bounded history buffers for charts, and the network throughput tracker that feeds them.

use std::collections::VecDeque;

use sysdash_sampler::NetCounters;

/// Samples kept per direction in the network chart.
pub const NET_HISTORY_LEN: usize = 40;

pub fn push_capped<T>(dq: &mut VecDeque<T>, v: T, cap: usize) {
    if dq.len() == cap {
        dq.pop_front();
    }
    dq.push_back(v);
}

/// Cumulative byte counters summed over all interfaces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NetTotals {
    pub recv: u64,
    pub sent: u64,
}

impl NetTotals {
    pub fn sum(ifaces: &[NetCounters]) -> Self {
        ifaces.iter().fold(Self::default(), |acc, n| Self {
            recv: acc.recv.saturating_add(n.received),
            sent: acc.sent.saturating_add(n.sent),
        })
    }
}

/// Turns cumulative counters into per-tick deltas over a fixed window.
///
/// Both histories are pre-filled with zeros so they are always exactly
/// [`NET_HISTORY_LEN`] long, oldest first. The first observation only records
/// totals: there is nothing to diff against yet.
#[derive(Debug, Clone)]
pub struct NetRateTracker {
    rx: VecDeque<u64>,
    tx: VecDeque<u64>,
    last: Option<NetTotals>,
    rx_peak: u64,
    tx_peak: u64,
}

impl NetRateTracker {
    pub fn new() -> Self {
        Self {
            rx: VecDeque::from(vec![0; NET_HISTORY_LEN]),
            tx: VecDeque::from(vec![0; NET_HISTORY_LEN]),
            last: None,
            rx_peak: 0,
            tx_peak: 0,
        }
    }

    /// Feed one NET message. Returns the current cumulative totals.
    pub fn observe(&mut self, ifaces: &[NetCounters]) -> NetTotals {
        let cur = NetTotals::sum(ifaces);
        if let Some(prev) = self.last {
            // counter resets / vanished interfaces show up as "no traffic", never negative
            let rx = cur.recv.saturating_sub(prev.recv);
            let tx = cur.sent.saturating_sub(prev.sent);
            push_capped(&mut self.rx, rx, NET_HISTORY_LEN);
            push_capped(&mut self.tx, tx, NET_HISTORY_LEN);
            self.rx_peak = self.rx_peak.max(rx);
            self.tx_peak = self.tx_peak.max(tx);
        }
        self.last = Some(cur);
        cur
    }

    pub fn rx(&self) -> &VecDeque<u64> {
        &self.rx
    }

    pub fn tx(&self) -> &VecDeque<u64> {
        &self.tx
    }

    pub fn peaks(&self) -> (u64, u64) {
        (self.rx_peak, self.tx_peak)
    }
}

impl Default for NetRateTracker {
    fn default() -> Self {
        Self::new()
    }
}
