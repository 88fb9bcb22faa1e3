use crate::bus::{EventBus, Publisher, Topic};
use crate::ingest::{Classification, Record};
use crate::stats::{
    AccumulatorKey, AccumulatorRegistry, MinuteBuckets, StatAccumulator, StatsError,
    WindowingPolicy,
};
use std::cell::RefCell;
use std::num::NonZeroU64;
use std::rc::Rc;

/// Which bindings a run subscribes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectPlan {
    pub collect_static: bool,
    pub collect_dynamic: bool,
    pub collect_methods: bool,
    pub window: Option<WindowPlan>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowPlan {
    pub step: NonZeroU64,
    pub limit: Option<u64>,
}

type SharedRegistry = Rc<RefCell<AccumulatorRegistry>>;

/// One aggregation run: a bus with every binding of the plan subscribed to [`Topic::Request`].
///
/// Bindings share the registry while records stream in. [`finish`](Self::finish) tears the bus
/// down and hands back sole ownership of the results.
pub struct Collector {
    bus: EventBus<Topic, Record, StatsError>,
    registry: SharedRegistry,
    minutes: Rc<RefCell<MinuteBuckets>>,
    published: u64,
}

/// Results of a finished run.
#[derive(Debug)]
pub struct CollectedStats {
    pub registry: AccumulatorRegistry,
    pub minutes: MinuteBuckets,
    pub published: u64,
}

impl Collector {
    pub fn new(plan: &CollectPlan) -> Self {
        let registry: SharedRegistry = Rc::default();
        let minutes = Rc::new(RefCell::new(MinuteBuckets::new()));
        let mut bus = EventBus::new();

        bind_minutes(&mut bus, &minutes);

        bind_classification(&mut bus, &registry, Classification::All);
        if plan.collect_static {
            bind_classification(&mut bus, &registry, Classification::Static);
        }
        if plan.collect_dynamic {
            bind_classification(&mut bus, &registry, Classification::Dynamic);
        }
        if plan.collect_methods {
            bind_methods(&mut bus, &registry);
        }

        if let Some(window) = plan.window {
            let mut policy = WindowingPolicy::new(window.step, window.limit);
            if plan.collect_static {
                policy = policy.with_family(Classification::Static);
            }
            if plan.collect_dynamic {
                policy = policy.with_family(Classification::Dynamic);
            }
            bind_windows(&mut bus, &registry, policy);
        }

        Self {
            bus,
            registry,
            minutes,
            published: 0,
        }
    }

    pub fn published(&self) -> u64 {
        self.published
    }

    /// Number of bindings receiving each record.
    pub fn binding_count(&self) -> usize {
        self.bus.subscriber_count(&Topic::Request)
    }

    pub fn finish(self) -> Result<CollectedStats, StatsError> {
        let Self {
            bus,
            registry,
            minutes,
            published,
        } = self;

        // Dropping the bus drops every binding and their handles on the shared state.
        drop(bus);

        let registry = Rc::into_inner(registry)
            .ok_or(StatsError::RegistryInUse)?
            .into_inner();
        let minutes = Rc::into_inner(minutes)
            .ok_or(StatsError::RegistryInUse)?
            .into_inner();

        Ok(CollectedStats {
            registry,
            minutes,
            published,
        })
    }
}

impl Publisher<Record> for Collector {
    type Error = StatsError;

    fn publish(&mut self, record: &Record) -> Result<(), StatsError> {
        self.bus.publish(&Topic::Request, record)?;
        self.published += 1;
        Ok(())
    }
}

fn bind_minutes(bus: &mut EventBus<Topic, Record, StatsError>, minutes: &Rc<RefCell<MinuteBuckets>>) {
    let minutes = Rc::clone(minutes);
    bus.subscribe(Topic::Request, move |record: &Record| {
        minutes.borrow_mut().record(record.timestamp);
        Ok(())
    });
}

fn bind_classification(
    bus: &mut EventBus<Topic, Record, StatsError>,
    registry: &SharedRegistry,
    classification: Classification,
) {
    let slot = registry
        .borrow_mut()
        .get_or_create(AccumulatorKey::total(classification), StatAccumulator::new);

    let registry = Rc::clone(registry);
    bus.subscribe(Topic::Request, move |record: &Record| {
        if classification.matches(record.classification) {
            registry.borrow_mut()[slot].add_record(record)?;
        }
        Ok(())
    });
}

fn bind_methods(bus: &mut EventBus<Topic, Record, StatsError>, registry: &SharedRegistry) {
    let registry = Rc::clone(registry);
    bus.subscribe(Topic::Request, move |record: &Record| {
        let mut registry = registry.borrow_mut();
        let slot = registry.get_or_create(
            AccumulatorKey::method(record.method.clone()),
            StatAccumulator::new,
        );
        registry[slot].add_record(record)
    });
}

fn bind_windows(
    bus: &mut EventBus<Topic, Record, StatsError>,
    registry: &SharedRegistry,
    mut policy: WindowingPolicy,
) {
    let registry = Rc::clone(registry);
    bus.subscribe(Topic::Request, move |record: &Record| {
        policy.observe(&mut registry.borrow_mut(), record)
    });
}
