//! Global named event counters.
//!
//! They are only incremented when the `counter` feature is enabled and are
//! meant to be dumped once at the end of a run with [report_counters].

use std::{
    collections::BTreeMap,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc, Mutex, PoisonError,
    },
};

#[derive(Default)]
pub struct CounterU64 {
    atomic: AtomicU64,
}

impl CounterU64 {
    pub const fn new() -> Self {
        Self {
            atomic: AtomicU64::new(0),
        }
    }
    pub fn inc(&self) {
        self.atomic.fetch_add(1, Ordering::Relaxed); // Adding one is associative and commutative
    }
    pub fn value(&self) -> u64 {
        self.atomic.load(Ordering::Acquire)
    }
}

lazy_static::lazy_static! {
    pub static ref __COUNTERS: Mutex<BTreeMap<&'static str, Arc<CounterU64>>> = Mutex::new(BTreeMap::new());
}

/// Registers a counter under `descr`, or returns the one already registered
pub fn insert_counter(descr: &'static str) -> Arc<CounterU64> {
    let mut counters = __COUNTERS.lock().unwrap_or_else(PoisonError::into_inner);
    counters
        .entry(descr)
        .or_insert_with(|| Arc::new(CounterU64::new()))
        .clone()
}

pub fn counter_value(descr: &str) -> Option<u64> {
    let counters = __COUNTERS.lock().unwrap_or_else(PoisonError::into_inner);
    counters.get(descr).map(|c| c.value())
}

pub fn report_counters() {
    let counters = __COUNTERS.lock().unwrap_or_else(PoisonError::into_inner);
    for (counter_name, counter) in counters.iter() {
        log::log!(target: "counter_report", log::Level::Info, "{}: {}", counter_name, counter.value())
    }
}

#[macro_export]
macro_rules! counter {
    ($descr:literal) => {
        if cfg!(feature = "counter") {
            use $crate::utils::counter::{insert_counter, lazy_static, CounterU64};
            lazy_static::lazy_static! {
                static ref COUNTER_REF: std::sync::Arc<CounterU64> = insert_counter($descr);
            }
            COUNTER_REF.inc();
        }
    };
}

// Reexport for ease of use
pub use lazy_static;
