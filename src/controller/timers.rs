use std::collections::BTreeMap;

use super::view::{ListenerId, Schedule, TimerId, ViewAdapter};

/// What a scheduled timer is for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    Typewriter,
    HintFirstShow,
    HintRecur,
    HintHide,
}

/// What a scroll listener is for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollHandler {
    Reveal,
    ScrollTop,
}

/// Every timer and scroll listener the controller holds on the view.
///
/// Ids are only ever issued here, so an event carrying an id the registry no
/// longer knows (cancelled, already fired, or from before a teardown) resolves
/// to nothing.
#[derive(Debug, Default)]
pub struct TimerRegistry {
    next_id: u32,
    timers: BTreeMap<TimerId, (TimerKind, Schedule)>,
    listeners: BTreeMap<ListenerId, ScrollHandler>,
}

impl TimerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn allocate(&mut self) -> u32 {
        self.next_id += 1;
        self.next_id
    }

    pub fn start<V: ViewAdapter>(
        &mut self,
        view: &mut V,
        kind: TimerKind,
        schedule: Schedule,
    ) -> TimerId {
        let id = TimerId(self.allocate());
        self.timers.insert(id, (kind, schedule));
        view.schedule(id, schedule);
        id
    }

    /// Resolves a fired timer. One-shot timers are forgotten on the way out.
    pub fn fired<V: ViewAdapter>(&mut self, view: &mut V, id: TimerId) -> Option<TimerKind> {
        let (kind, schedule) = *self.timers.get(&id)?;
        if !schedule.is_repeating() {
            self.timers.remove(&id);
            view.cancel(id);
        }
        Some(kind)
    }

    pub fn stop<V: ViewAdapter>(&mut self, view: &mut V, kind: TimerKind) {
        let ids: Vec<TimerId> = self
            .timers
            .iter()
            .filter(|(_, (k, _))| *k == kind)
            .map(|(id, _)| *id)
            .collect();
        for id in ids {
            self.timers.remove(&id);
            view.cancel(id);
        }
    }

    pub fn is_running(&self, kind: TimerKind) -> bool {
        self.timers.values().any(|(k, _)| *k == kind)
    }

    pub fn listen<V: ViewAdapter>(&mut self, view: &mut V, handler: ScrollHandler) -> ListenerId {
        let id = ListenerId(self.allocate());
        self.listeners.insert(id, handler);
        view.listen_scroll(id);
        id
    }

    pub fn handler(&self, id: ListenerId) -> Option<ScrollHandler> {
        self.listeners.get(&id).copied()
    }

    pub fn timer_count(&self) -> usize {
        self.timers.len()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Cancels every timer and drops every listener
    pub fn release_all<V: ViewAdapter>(&mut self, view: &mut V) {
        for id in std::mem::take(&mut self.timers).into_keys() {
            view.cancel(id);
        }
        for id in std::mem::take(&mut self.listeners).into_keys() {
            view.unlisten(id);
        }
    }
}
