//! Disk usage table.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Row, Table},
};
use sysdash_sampler::DiskRow;

use crate::ui::util::{clip, human, truncate_middle};

#[derive(Debug, Clone, Default)]
pub struct DiskTable {
    rows: Vec<DiskRow>,
    pub area: Rect,
}

impl DiskTable {
    pub fn set_rows(&mut self, rows: Vec<DiskRow>) {
        self.rows = rows;
    }

    pub fn rows(&self) -> &[DiskRow] {
        &self.rows
    }

    pub fn draw(&self, f: &mut ratatui::Frame<'_>) {
        let Some(area) = clip(self.area, f.area()) else { return; };
        // mount column gets whatever the four fixed-width columns leave
        let mount_w = area.width.saturating_sub(2 + 4 * 9).max(6) as usize;

        let rows = self.rows.iter().map(|d| {
            let pct = if d.total > 0 {
                (d.used as f64 / d.total as f64 * 100.0).round() as u64
            } else {
                0
            };
            Row::new(vec![
                truncate_middle(&d.mount, mount_w),
                human(d.total),
                human(d.used),
                human(d.available),
                format!("{pct}%"),
            ])
        });

        let table = Table::new(
            rows,
            [
                Constraint::Min(6),
                Constraint::Length(8),
                Constraint::Length(8),
                Constraint::Length(8),
                Constraint::Length(5),
            ],
        )
        .header(
            Row::new(vec!["Mount", "Size", "Used", "Avail", "Use%"])
                .style(Style::default().add_modifier(Modifier::BOLD)),
        )
        .block(Block::default().borders(Borders::ALL).title(" Disks "));
        f.render_widget(table, area);
    }
}
