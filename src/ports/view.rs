use crate::widget::WidgetView;

pub trait ViewPort {
    fn render(&self, view: &WidgetView);
}
