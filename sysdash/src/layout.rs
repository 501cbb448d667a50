//! Screen geometry: where every widget goes for a given terminal size and core count.
//!
//! Left half: one CPU band per core, `height / cores` rows each. Rows left over
//! by the division stay blank at the bottom. Right half: a bordered panel
//! stacking memory, disks and network.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub const MEM_BARS: u16 = 4;
pub const MEM_BAR_WIDTH: u16 = 6;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardLayout {
    pub cpus: Vec<Rect>,
    pub panel: Rect,
    pub mem: Rect,
    pub disks: Rect,
    pub net_chart: Rect,
    pub net_legend: Rect,
    pub mem_bar_gap: u16,
}

/// Pure function of its inputs; call it again whenever the terminal may have changed size.
pub fn compute(width: u16, height: u16, cores: usize) -> DashboardLayout {
    let half = width / 2;
    let (band, leftover) = if cores == 0 {
        (0, 0)
    } else {
        (height as usize / cores, height as usize % cores)
    };

    let cpus = (0..cores)
        .map(|i| Rect::new(0, (i * band) as u16, half, band as u16))
        .collect();

    let panel = Rect::new(half, 0, width - half, height - leftover as u16);
    let inner = Rect {
        x: panel.x.saturating_add(1),
        y: panel.y.saturating_add(1),
        width: panel.width.saturating_sub(2),
        height: panel.height.saturating_sub(2),
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(inner);
    let net = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(75), Constraint::Percentage(25)])
        .split(rows[2]);

    // bars sit inside the memory widget's own border
    let mem_bar_gap = bar_gap(rows[0].width.saturating_sub(2), MEM_BAR_WIDTH, MEM_BARS);

    DashboardLayout {
        cpus,
        panel,
        mem: rows[0],
        disks: rows[1],
        net_chart: net[0],
        net_legend: net[1],
        mem_bar_gap,
    }
}

/// Gap that spreads `bars` bars of `bar_width` evenly over `width` columns.
pub fn bar_gap(width: u16, bar_width: u16, bars: u16) -> u16 {
    if bars == 0 {
        return 0;
    }
    width.saturating_sub(bars.saturating_mul(bar_width)) / bars
}
