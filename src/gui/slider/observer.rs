use derive_more::{Display, From, Into};
use strum::{Display as StrumDisplay, EnumString};

/// Events a slider publishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, StrumDisplay)]
#[strum(serialize_all = "kebab-case")]
pub enum SliderEvent {
    ValueChanged,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, From, Into)]
pub struct SubscriptionId(u64);

type Callback = Box<dyn FnMut(f64)>;

struct Listener {
    id: SubscriptionId,
    event: SliderEvent,
    callback: Callback,
}

/// Observer list; callbacks fire in registration order.
#[derive(Default)]
pub struct Observers {
    next_id: u64,
    listeners: Vec<Listener>,
}

impl Observers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(
        &mut self,
        event: SliderEvent,
        callback: impl FnMut(f64) + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push(Listener {
            id,
            event,
            callback: Box::new(callback),
        });
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|l| l.id != id);
        self.listeners.len() != before
    }

    pub fn emit(&mut self, event: SliderEvent, value: f64) {
        self.listeners
            .iter_mut()
            .filter(|l| l.event == event)
            .for_each(|l| (l.callback)(value));
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl std::fmt::Debug for Observers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observers")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
