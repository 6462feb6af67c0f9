/// Platform - Dependency injection for all ports.
///
/// Hybrid approach:
/// - Stateless ports: `&'static` references (zero-cost)
/// - Stateful ports: `Rc<dyn Trait>` bundled in [`WidgetPorts`], one set per widget

use crate::ports::{ChannelFactoryPort, LocalStorePort, LoggerPort, NotifierPort, ViewPort};
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct Platform {
    logger: &'static dyn LoggerPort,
}

impl Platform {
    /// Creates a new Platform with default adapters for the current target.
    pub fn new() -> Self {
        Self {
            logger: crate::adapters::logger(),
        }
    }

    #[inline]
    pub fn logger(&self) -> &'static dyn LoggerPort {
        self.logger
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::new()
    }
}

/// Stateful collaborators of one widget instance.
#[derive(Clone)]
pub struct WidgetPorts {
    pub store: Rc<dyn LocalStorePort>,
    pub channels: Rc<dyn ChannelFactoryPort>,
    pub notifier: Rc<dyn NotifierPort>,
    pub view: Rc<dyn ViewPort>,
}
