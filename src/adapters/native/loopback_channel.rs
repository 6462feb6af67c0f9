use crate::domain::notification::{NotificationError, NotificationRecord};
use crate::ports::{ChannelFactoryPort, ChannelPort, InboundHandler, Subscription};
use async_trait::async_trait;
use futures_channel::oneshot;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// How a loopback channel answers `start`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartBehavior {
    Succeed,
    Fail(String),
    /// `start` stays pending until [`LoopbackChannel::complete_start`].
    Manual,
}

/// Calls made on a channel, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChannelOp {
    Start,
    Subscribe(String),
    Unsubscribe(String),
    Stop,
}

type SharedHandler = Rc<RefCell<InboundHandler>>;

/// In-process channel: the caller plays the server side with
/// [`LoopbackChannel::deliver`].
pub struct LoopbackChannel {
    endpoint_url: String,
    behavior: StartBehavior,
    pending_start: RefCell<Option<oneshot::Sender<Result<(), String>>>>,
    handlers: RefCell<Vec<(Subscription, SharedHandler)>>,
    next_id: Cell<u64>,
    stopped: Cell<bool>,
    ops: RefCell<Vec<ChannelOp>>,
}

impl LoopbackChannel {
    pub fn new(endpoint_url: &str, behavior: StartBehavior) -> Self {
        Self {
            endpoint_url: endpoint_url.to_string(),
            behavior,
            pending_start: RefCell::new(None),
            handlers: RefCell::new(Vec::new()),
            next_id: Cell::new(0),
            stopped: Cell::new(false),
            ops: RefCell::new(Vec::new()),
        }
    }

    pub fn endpoint_url(&self) -> &str {
        &self.endpoint_url
    }

    pub fn ops(&self) -> Vec<ChannelOp> {
        self.ops.borrow().clone()
    }

    pub fn subscription_count(&self) -> usize {
        self.handlers.borrow().len()
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped.get()
    }

    /// Resolves a pending manual `start`. Returns false if nothing was pending.
    pub fn complete_start(&self, result: Result<(), String>) -> bool {
        match self.pending_start.borrow_mut().take() {
            Some(sender) => sender.send(result).is_ok(),
            None => false,
        }
    }

    /// Pushes an inbound event to every handler subscribed to `event`.
    /// Returns how many handlers ran.
    pub fn deliver(&self, event: &str, record: NotificationRecord) -> usize {
        if self.stopped.get() {
            return 0;
        }

        // Handlers may unsubscribe while running, so call them on a copy.
        let targets: Vec<SharedHandler> = self
            .handlers
            .borrow()
            .iter()
            .filter(|(subscription, _)| subscription.event() == event)
            .map(|(_, handler)| Rc::clone(handler))
            .collect();

        for handler in &targets {
            (handler.borrow_mut())(record.clone());
        }
        targets.len()
    }
}

#[async_trait(?Send)]
impl ChannelPort for LoopbackChannel {
    async fn start(&self) -> Result<(), NotificationError> {
        self.ops.borrow_mut().push(ChannelOp::Start);

        match &self.behavior {
            StartBehavior::Succeed => Ok(()),
            StartBehavior::Fail(reason) => Err(NotificationError::channel_open_failure(reason.clone())),
            StartBehavior::Manual => {
                let (sender, receiver) = oneshot::channel();
                *self.pending_start.borrow_mut() = Some(sender);
                match receiver.await {
                    Ok(Ok(())) => Ok(()),
                    Ok(Err(reason)) => Err(NotificationError::channel_open_failure(reason)),
                    Err(_) => Err(NotificationError::channel_open_failure(
                        "Connection stopped while starting",
                    )),
                }
            }
        }
    }

    fn subscribe(&self, event: &str, handler: InboundHandler) -> Subscription {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);

        let subscription = Subscription::new(id, event);
        self.handlers
            .borrow_mut()
            .push((subscription.clone(), Rc::new(RefCell::new(handler))));
        self.ops
            .borrow_mut()
            .push(ChannelOp::Subscribe(event.to_string()));
        subscription
    }

    fn unsubscribe(&self, subscription: &Subscription) {
        self.handlers
            .borrow_mut()
            .retain(|(existing, _)| existing != subscription);
        self.ops
            .borrow_mut()
            .push(ChannelOp::Unsubscribe(subscription.event().to_string()));
    }

    fn stop(&self) {
        self.stopped.set(true);
        // Dropping the sender rejects a start that is still pending.
        self.pending_start.borrow_mut().take();
        self.ops.borrow_mut().push(ChannelOp::Stop);
    }
}

/// Creates loopback channels and remembers them for inspection.
pub struct LoopbackFactory {
    behavior: RefCell<StartBehavior>,
    refuse_create: RefCell<Option<String>>,
    channels: RefCell<Vec<Rc<LoopbackChannel>>>,
}

impl LoopbackFactory {
    pub fn new(behavior: StartBehavior) -> Self {
        Self {
            behavior: RefCell::new(behavior),
            refuse_create: RefCell::new(None),
            channels: RefCell::new(Vec::new()),
        }
    }

    /// Channels created from now on answer `start` with `behavior`.
    pub fn set_behavior(&self, behavior: StartBehavior) {
        *self.behavior.borrow_mut() = behavior;
    }

    /// Makes `create` itself fail, like a transport rejecting a malformed URL.
    pub fn refuse_create(&self, reason: Option<&str>) {
        *self.refuse_create.borrow_mut() = reason.map(str::to_string);
    }

    pub fn created(&self) -> usize {
        self.channels.borrow().len()
    }

    pub fn last_channel(&self) -> Option<Rc<LoopbackChannel>> {
        self.channels.borrow().last().cloned()
    }
}

impl Default for LoopbackFactory {
    fn default() -> Self {
        Self::new(StartBehavior::Succeed)
    }
}

impl ChannelFactoryPort for LoopbackFactory {
    fn create(&self, endpoint_url: &str) -> Result<Rc<dyn ChannelPort>, NotificationError> {
        if let Some(reason) = self.refuse_create.borrow().as_ref() {
            return Err(NotificationError::channel_open_failure(reason.clone()));
        }

        let channel = Rc::new(LoopbackChannel::new(
            endpoint_url,
            self.behavior.borrow().clone(),
        ));
        self.channels.borrow_mut().push(Rc::clone(&channel));
        Ok(channel)
    }
}
