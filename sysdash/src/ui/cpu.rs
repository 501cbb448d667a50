//! Per-core CPU gauges.

use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Gauge},
};

use crate::ui::{theme::load_color, util::clip};

#[derive(Debug, Clone)]
pub struct CpuGauge {
    core: usize,
    percent: u16,
    pub area: Rect,
}

impl CpuGauge {
    pub fn new(core: usize) -> Self {
        Self { core, percent: 0, area: Rect::default() }
    }

    pub fn set_percent(&mut self, pct: f32) {
        // whole percent, truncated
        self.percent = pct.clamp(0.0, 100.0) as u16;
    }

    pub fn percent(&self) -> u16 {
        self.percent
    }

    pub fn draw(&self, f: &mut ratatui::Frame<'_>) {
        let Some(area) = clip(self.area, f.area()) else { return; };
        let g = Gauge::default()
            .block(Block::default().borders(Borders::ALL).title(format!(" CPU {} ", self.core)))
            .gauge_style(Style::default().fg(load_color(self.percent)))
            .percent(self.percent);
        f.render_widget(g, area);
    }
}
