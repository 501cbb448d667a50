//! Dashboard state: every widget instance plus the running/paused flag.
//!
//! Only the event loop holds a `Dashboard`, so nothing here needs locking.
//! Setters store what they are given; deriving values is the caller's job.

use std::collections::VecDeque;

use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders},
};
use sysdash_sampler::DiskRow;

use crate::history::NetTotals;
use crate::layout::DashboardLayout;
use crate::ui::{
    cpu::CpuGauge,
    disks::DiskTable,
    mem::MemChart,
    net::{NetChart, NetLegend},
    theme::PANEL_PAUSED,
    util::clip,
};

pub struct Dashboard {
    cpus: Vec<CpuGauge>,
    mem: MemChart,
    disks: DiskTable,
    net_chart: NetChart,
    net_legend: NetLegend,
    panel: Rect,
    running: bool,
}

impl Dashboard {
    /// `cores` is fixed for the session.
    pub fn new(cores: usize) -> Self {
        Self {
            cpus: (0..cores).map(CpuGauge::new).collect(),
            mem: MemChart::default(),
            disks: DiskTable::default(),
            net_chart: NetChart::default(),
            net_legend: NetLegend::default(),
            panel: Rect::default(),
            running: true,
        }
    }

    pub fn cores(&self) -> usize {
        self.cpus.len()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Flip running/paused; returns the new running state.
    pub fn toggle_pause(&mut self) -> bool {
        self.running = !self.running;
        self.running
    }

    // Cores beyond the ones detected at startup have no widget and are dropped.
    pub fn set_core_percent(&mut self, core: usize, pct: f32) {
        if let Some(g) = self.cpus.get_mut(core) {
            g.set_percent(pct);
        }
    }

    pub fn set_memory(&mut self, series: Vec<u64>) {
        self.mem.set_series(series);
    }

    pub fn set_disks(&mut self, rows: Vec<DiskRow>) {
        self.disks.set_rows(rows);
    }

    pub fn set_network(
        &mut self,
        rx: &VecDeque<u64>,
        tx: &VecDeque<u64>,
        totals: NetTotals,
        peaks: (u64, u64),
    ) {
        self.net_chart.set_series(rx, tx);
        self.net_legend.set(totals, peaks);
    }

    pub fn apply_layout(&mut self, layout: &DashboardLayout) {
        for (g, r) in self.cpus.iter_mut().zip(layout.cpus.iter()) {
            g.area = *r;
        }
        self.panel = layout.panel;
        self.mem.area = layout.mem;
        self.mem.set_bar_gap(layout.mem_bar_gap);
        self.disks.area = layout.disks;
        self.net_chart.area = layout.net_chart;
        self.net_legend.area = layout.net_legend;
    }

    pub fn render(&self, f: &mut ratatui::Frame<'_>) {
        for g in &self.cpus {
            g.draw(f);
        }

        if let Some(area) = clip(self.panel, f.area()) {
            let block = if self.running {
                Block::default().borders(Borders::ALL).title(" sysdash ")
            } else {
                Block::default()
                    .borders(Borders::ALL)
                    .title(" sysdash (PAUSED, press 's' to resume) ")
                    .border_style(Style::default().fg(PANEL_PAUSED))
            };
            f.render_widget(block, area);
        }

        self.mem.draw(f);
        self.disks.draw(f);
        self.net_chart.draw(f);
        self.net_legend.draw(f);
    }

    // --- read access, used by tests and logging ---

    pub fn cores_established(&self) -> bool {
        !self.cpus.is_empty()
    }

    pub fn core_percent(&self, core: usize) -> Option<u16> {
        self.cpus.get(core).map(|g| g.percent())
    }

    pub fn core_area(&self, core: usize) -> Option<Rect> {
        self.cpus.get(core).map(|g| g.area)
    }

    pub fn panel_area(&self) -> Rect {
        self.panel
    }

    pub fn memory(&self) -> &[u64] {
        self.mem.series()
    }

    pub fn disks(&self) -> &[DiskRow] {
        self.disks.rows()
    }

    pub fn net_series(&self) -> (&[u64], &[u64]) {
        (self.net_chart.rx(), self.net_chart.tx())
    }

    pub fn net_totals(&self) -> NetTotals {
        self.net_legend.totals()
    }
}
