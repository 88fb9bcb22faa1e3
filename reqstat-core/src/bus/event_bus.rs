use ahash::AHashMap;
use std::hash::Hash;

/// Identity of a registered handler, used to unsubscribe it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Handler<E, Err> = Box<dyn FnMut(&E) -> Result<(), Err>>;

/// Synchronous topic-based publish/subscribe.
///
/// Handlers for a topic run in registration order, inside [`publish`](Self::publish). The first
/// handler error stops delivery of that event and is returned to the publisher; the bus does not
/// buffer, retry or reorder anything.
pub struct EventBus<T, E, Err> {
    next_id: u64,
    subscribers: AHashMap<T, Vec<(SubscriptionId, Handler<E, Err>)>>,
}

impl<T, E, Err> Default for EventBus<T, E, Err>
where
    T: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, E, Err> EventBus<T, E, Err>
where
    T: Eq + Hash,
{
    pub fn new() -> Self {
        Self {
            next_id: 0,
            subscribers: AHashMap::new(),
        }
    }

    pub fn subscribe<F>(&mut self, topic: T, handler: F) -> SubscriptionId
    where
        F: FnMut(&E) -> Result<(), Err> + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;

        self.subscribers
            .entry(topic)
            .or_default()
            .push((id, Box::new(handler)));

        id
    }

    /// Removes the handler registered as `id`. Returns `false` if it was not subscribed to `topic`.
    pub fn unsubscribe(&mut self, topic: &T, id: SubscriptionId) -> bool {
        let Some(handlers) = self.subscribers.get_mut(topic) else {
            return false;
        };

        let before = handlers.len();
        handlers.retain(|(handler_id, _)| *handler_id != id);
        before != handlers.len()
    }

    pub fn publish(&mut self, topic: &T, event: &E) -> Result<(), Err> {
        let Some(handlers) = self.subscribers.get_mut(topic) else {
            return Ok(());
        };

        for (_, handler) in handlers.iter_mut() {
            handler(event)?;
        }

        Ok(())
    }

    pub fn subscriber_count(&self, topic: &T) -> usize {
        self.subscribers.get(topic).map_or(0, Vec::len)
    }
}

/// Anything that accepts events one at a time from a producer.
pub trait Publisher<E> {
    type Error;

    fn publish(&mut self, event: &E) -> Result<(), Self::Error>;
}
