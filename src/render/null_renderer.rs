use crate::error::TimelineResult;
use crate::render::{Renderer, TimelineFrame};

/// No-op renderer used by tests and headless engine usage.
///
/// It still validates frame content so tests catch invalid geometry before
/// a real backend is involved.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: u64,
    pub last_label_count: usize,
    pub last_lane_count: usize,
    pub last_visible_bar_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &TimelineFrame) -> TimelineResult<()> {
        frame.validate()?;
        self.frames_rendered = self.frames_rendered.saturating_add(1);
        self.last_label_count = frame.labels.len();
        self.last_lane_count = frame.lanes.len();
        self.last_visible_bar_count = frame.visible_bar_count();
        Ok(())
    }
}
