//! Small UI helpers: human-readable sizes, truncation, clipping.

use ratatui::layout::Rect;

pub fn human(b: u64) -> String {
    const K: f64 = 1024.0;
    let b = b as f64;
    if b < K { return format!("{b:.0}B"); }
    let kb = b / K;
    if kb < K { return format!("{kb:.1}KB"); }
    let mb = kb / K;
    if mb < K { return format!("{mb:.1}MB"); }
    let gb = mb / K;
    if gb < K { return format!("{gb:.1}GB"); }
    let tb = gb / K;
    format!("{tb:.2}TB")
}

pub fn truncate_middle(s: &str, max: usize) -> String {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() <= max { return s.to_string(); }
    if max <= 3 { return "...".into(); }
    let keep = max - 3;
    let left = keep / 2;
    let right = keep - left;
    let head: String = chars[..left].iter().collect();
    let tail: String = chars[chars.len() - right..].iter().collect();
    format!("{head}...{tail}")
}

/// Clip a widget rect to what the frame can actually hold.
pub fn clip(area: Rect, frame: Rect) -> Option<Rect> {
    let r = area.intersection(frame);
    if r.width == 0 || r.height == 0 { None } else { Some(r) }
}
