//! Memory bar chart: total / available / used / free.

use ratatui::{
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders},
};
use sysdash_sampler::MEM_LABELS;

use crate::layout::MEM_BAR_WIDTH;
use crate::ui::{theme::MEM_BAR, util::{clip, human}};

const MIB: u64 = 1024 * 1024;

#[derive(Debug, Clone, Default)]
pub struct MemChart {
    series: Vec<u64>,
    bar_gap: u16,
    pub area: Rect,
}

impl MemChart {
    pub fn set_series(&mut self, series: Vec<u64>) {
        self.series = series;
    }

    pub fn set_bar_gap(&mut self, gap: u16) {
        self.bar_gap = gap;
    }

    pub fn series(&self) -> &[u64] {
        &self.series
    }

    pub fn draw(&self, f: &mut ratatui::Frame<'_>) {
        let Some(area) = clip(self.area, f.area()) else { return; };
        let bars: Vec<Bar> = self
            .series
            .iter()
            .enumerate()
            .map(|(i, &v)| {
                Bar::default()
                    .label(Line::from(MEM_LABELS.get(i).copied().unwrap_or("?")))
                    .value(v / MIB)
                    .text_value(human(v))
            })
            .collect();

        let chart = BarChart::default()
            .block(Block::default().borders(Borders::ALL).title(" Memory "))
            .data(BarGroup::default().bars(&bars))
            .bar_width(MEM_BAR_WIDTH)
            .bar_gap(self.bar_gap)
            .bar_style(Style::default().fg(MEM_BAR));
        f.render_widget(chart, area);
    }
}
