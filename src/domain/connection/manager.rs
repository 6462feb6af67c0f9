use super::state::ConnectionState;
use crate::domain::notification::NotificationError;
use crate::platform::Platform;
use crate::ports::{ChannelFactoryPort, ChannelPort, InboundHandler, Subscription};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

const CONNECT_TIMER: &str = "notification channel start";

struct LiveChannel {
    channel: Rc<dyn ChannelPort>,
    subscription: Option<Subscription>,
}

/// Owns at most one real-time channel.
///
/// No borrow is held across the `start` await, so `detach` may run while an
/// `attach` is still pending; each attach is tagged with an attempt number
/// and a stale attempt never subscribes.
pub struct ConnectionManager {
    platform: Platform,
    factory: Rc<dyn ChannelFactoryPort>,
    state: Cell<ConnectionState>,
    attempt: Cell<u64>,
    live: RefCell<Option<LiveChannel>>,
}

impl ConnectionManager {
    pub fn new(platform: Platform, factory: Rc<dyn ChannelFactoryPort>) -> Self {
        Self {
            platform,
            factory,
            state: Cell::new(ConnectionState::Disconnected),
            attempt: Cell::new(0),
            live: RefCell::new(None),
        }
    }

    pub fn state(&self) -> ConnectionState {
        self.state.get()
    }

    pub fn is_subscribed(&self) -> bool {
        self.live
            .borrow()
            .as_ref()
            .is_some_and(|live| live.subscription.is_some())
    }

    /// Opens a channel to `endpoint_url` and, once it is open, subscribes
    /// `handler` to `event`.
    ///
    /// Every inbound event is handed to `handler`; admission is the
    /// handler's decision.
    pub async fn attach(
        &self,
        endpoint_url: &str,
        event: &str,
        handler: InboundHandler,
    ) -> Result<(), NotificationError> {
        if self.state.get() != ConnectionState::Disconnected {
            return Err(NotificationError::AlreadyAttached);
        }

        let attempt = self.attempt.get() + 1;
        self.attempt.set(attempt);
        self.state.set(ConnectionState::Connecting);

        let channel = match self.factory.create(endpoint_url) {
            Ok(channel) => channel,
            Err(e) => return Err(self.fail(e)),
        };
        *self.live.borrow_mut() = Some(LiveChannel {
            channel: Rc::clone(&channel),
            subscription: None,
        });

        self.platform.logger().time(CONNECT_TIMER);
        let opened = channel.start().await;
        self.platform.logger().time_end(CONNECT_TIMER);

        if self.attempt.get() != attempt {
            self.platform
                .logger()
                .log("Connection detached before start completed");
            return Err(NotificationError::AttachCancelled);
        }

        if let Err(e) = opened {
            self.live.borrow_mut().take();
            return Err(self.fail(e));
        }

        let subscription = channel.subscribe(event, handler);
        if let Some(live) = self.live.borrow_mut().as_mut() {
            live.subscription = Some(subscription);
        }
        self.state.set(ConnectionState::Connected);
        self.platform.logger().log("Connection started!");

        Ok(())
    }

    /// Releases the subscription, then stops the channel. No-op when
    /// nothing is attached.
    pub fn detach(&self) {
        self.attempt.set(self.attempt.get() + 1);

        let live = self.live.borrow_mut().take();
        if let Some(live) = live {
            if let Some(subscription) = live.subscription.as_ref() {
                live.channel.unsubscribe(subscription);
            }
            live.channel.stop();
            self.platform.logger().log("Connection stopped");
        }

        self.state.set(ConnectionState::Disconnected);
    }

    fn fail(&self, error: NotificationError) -> NotificationError {
        self.state.set(ConnectionState::Failed);
        self.platform.logger().error(&error.to_string());
        match error {
            NotificationError::ChannelOpenFailure(_) => error,
            other => NotificationError::channel_open_failure(other.to_string()),
        }
    }
}
