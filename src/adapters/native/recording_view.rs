use crate::ports::ViewPort;
use crate::widget::WidgetView;
use std::cell::RefCell;

/// Keeps every rendered snapshot.
#[derive(Debug, Default)]
pub struct RecordingView {
    frames: RefCell<Vec<WidgetView>>,
}

impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render_count(&self) -> usize {
        self.frames.borrow().len()
    }

    pub fn last(&self) -> Option<WidgetView> {
        self.frames.borrow().last().cloned()
    }
}

impl ViewPort for RecordingView {
    fn render(&self, view: &WidgetView) {
        self.frames.borrow_mut().push(view.clone());
    }
}
