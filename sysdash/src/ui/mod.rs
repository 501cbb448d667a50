//! UI module root: one widget per dashboard panel.

pub mod cpu;
pub mod disks;
pub mod mem;
pub mod net;
pub mod theme;
pub mod util;
