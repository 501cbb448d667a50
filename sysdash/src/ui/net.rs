//! Network throughput chart and its totals legend.

use std::collections::VecDeque;

use ratatui::{
    layout::Rect,
    style::Style,
    symbols,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
};

use crate::history::NetTotals;
use crate::ui::{
    theme::{RX, TX},
    util::{clip, human},
};

#[derive(Debug, Clone, Default)]
pub struct NetChart {
    rx: Vec<u64>,
    tx: Vec<u64>,
    pub area: Rect,
}

impl NetChart {
    pub fn set_series(&mut self, rx: &VecDeque<u64>, tx: &VecDeque<u64>) {
        self.rx = rx.iter().copied().collect();
        self.tx = tx.iter().copied().collect();
    }

    pub fn rx(&self) -> &[u64] {
        &self.rx
    }

    pub fn tx(&self) -> &[u64] {
        &self.tx
    }

    pub fn draw(&self, f: &mut ratatui::Frame<'_>) {
        let Some(area) = clip(self.area, f.area()) else { return; };
        let points = |s: &[u64]| -> Vec<(f64, f64)> {
            s.iter().enumerate().map(|(i, &v)| (i as f64, v as f64)).collect()
        };
        let rx_pts = points(self.rx.as_slice());
        let tx_pts = points(self.tx.as_slice());
        let max = self.rx.iter().chain(self.tx.iter()).copied().max().unwrap_or(0).max(1);
        let len = self.rx.len().max(self.tx.len()).max(2);

        let datasets = vec![
            Dataset::default()
                .name("RX")
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(RX))
                .data(&rx_pts),
            Dataset::default()
                .name("TX")
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(TX))
                .data(&tx_pts),
        ];

        let chart = Chart::new(datasets)
            .block(Block::default().borders(Borders::ALL).title(" Network "))
            .x_axis(Axis::default().bounds([0.0, (len - 1) as f64]))
            .y_axis(
                Axis::default()
                    .bounds([0.0, max as f64])
                    .labels(vec![Span::raw("0"), Span::raw(human(max))]),
            );
        f.render_widget(chart, area);
    }
}

#[derive(Debug, Clone, Default)]
pub struct NetLegend {
    totals: NetTotals,
    peaks: (u64, u64),
    pub area: Rect,
}

impl NetLegend {
    pub fn set(&mut self, totals: NetTotals, peaks: (u64, u64)) {
        self.totals = totals;
        self.peaks = peaks;
    }

    pub fn totals(&self) -> NetTotals {
        self.totals
    }

    pub fn draw(&self, f: &mut ratatui::Frame<'_>) {
        let Some(area) = clip(self.area, f.area()) else { return; };
        let lines = vec![
            Line::from(vec![
                Span::styled("Total RX", Style::default().fg(RX)),
                Span::raw(format!(": {}", human(self.totals.recv))),
            ]),
            Line::from(vec![
                Span::styled("Total TX", Style::default().fg(TX)),
                Span::raw(format!(": {}", human(self.totals.sent))),
            ]),
            Line::from(""),
            Line::from(format!("Peak RX: {}", human(self.peaks.0))),
            Line::from(format!("Peak TX: {}", human(self.peaks.1))),
        ];
        let p = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
        f.render_widget(p, area);
    }
}
