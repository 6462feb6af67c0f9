use crate::domain::notification::{NotificationError, NotificationRecord};
use async_trait::async_trait;
use std::rc::Rc;

/// Callback receiving every inbound event of a subscription.
pub type InboundHandler = Box<dyn FnMut(NotificationRecord)>;

/// Handle returned by [`ChannelPort::subscribe`], released with
/// [`ChannelPort::unsubscribe`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Subscription {
    id: u64,
    event: String,
}

impl Subscription {
    pub fn new(id: u64, event: impl Into<String>) -> Self {
        Self {
            id,
            event: event.into(),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn event(&self) -> &str {
        &self.event
    }
}

/// A bidirectional real-time channel. Retries and timeouts belong to the
/// implementation, not to the caller.
#[async_trait(?Send)]
pub trait ChannelPort {
    async fn start(&self) -> Result<(), NotificationError>;

    fn subscribe(&self, event: &str, handler: InboundHandler) -> Subscription;

    fn unsubscribe(&self, subscription: &Subscription);

    /// Closes the channel. Must tolerate being called on a channel that
    /// never opened.
    fn stop(&self);
}

/// Builds a channel for an endpoint without opening it.
pub trait ChannelFactoryPort {
    fn create(&self, endpoint_url: &str) -> Result<Rc<dyn ChannelPort>, NotificationError>;
}
