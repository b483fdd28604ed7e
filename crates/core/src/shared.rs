//! Shared module - exclusive access for the host's two drivers.
//!
//! One gravity timer and one input/render loop share a single engine. Every
//! public call here holds the same lock for its full duration, including the
//! internal reset path, so a render never observes a board mid-mutation.

use std::sync::{Arc, Mutex, MutexGuard};

use blockfall_types::InputCommand;

use crate::engine::{Engine, TickEvent};
use crate::snapshot::Snapshot;

/// Cloneable handle to a lock-guarded [`Engine`].
#[derive(Clone)]
pub struct SharedEngine {
    inner: Arc<Mutex<Engine>>,
}

impl SharedEngine {
    pub fn new(engine: Engine) -> Self {
        Self {
            inner: Arc::new(Mutex::new(engine)),
        }
    }

    fn guard(&self) -> MutexGuard<'_, Engine> {
        // Poisoning means the engine panicked mid-call; fail loudly.
        self.inner.lock().expect("engine lock poisoned")
    }

    /// One gravity step; returns the lock/topple event when the tick
    /// produced one.
    pub fn tick(&self) -> Option<TickEvent> {
        let mut engine = self.guard();
        engine.tick();
        engine.take_last_event()
    }

    pub fn apply_input(&self, cmd: InputCommand) {
        self.guard().apply_input(cmd);
    }

    pub fn reset(&self) {
        self.guard().reset();
    }

    /// Tear-free merged view, taken under the engine lock.
    pub fn snapshot_into(&self, out: &mut Snapshot) {
        self.guard().snapshot_into(out);
    }

    pub fn snapshot(&self) -> Snapshot {
        self.guard().snapshot()
    }
}
