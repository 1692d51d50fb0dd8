use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use super::view::{ListenerId, Schedule, Target, TimerId, ViewAdapter};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    SetText(String, String),
    SetStyle(String, String, String),
    AddClass(String, String),
    RemoveClass(String, String),
    ScrollIntoView(String),
    ScrollToTop,
    OpenUrl(String),
    Alert(String),
    Schedule(TimerId, Schedule),
    Cancel(TimerId),
    Listen(ListenerId),
    Unlisten(ListenerId),
}

/// In-memory page that records what the controller does to it.
///
/// Element operations on targets that were never declared are dropped, the
/// same way the browser adapter treats missing elements.
#[derive(Debug, Default)]
pub struct RecordingView {
    ids: HashSet<String>,
    classes: HashMap<String, usize>,
    in_viewport: HashSet<String>,
    offset: f64,
    texts: RefCell<HashMap<String, String>>,
    calls: RefCell<Vec<Call>>,
    timers: BTreeMap<TimerId, Schedule>,
    listeners: BTreeSet<ListenerId>,
}

fn key(target: Target<'_>) -> String {
    match target {
        Target::Id(id) => format!("#{id}"),
        Target::Class(class) => format!(".{class}"),
        Target::Nth(class, index) => format!(".{class}[{index}]"),
    }
}

impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.ids.insert(id.to_string());
        self
    }

    pub fn with_class(mut self, class: &str, count: usize) -> Self {
        self.classes.insert(class.to_string(), count);
        self
    }

    pub fn set_in_viewport(&mut self, id: &str, visible: bool) {
        if visible {
            self.in_viewport.insert(id.to_string());
        } else {
            self.in_viewport.remove(id);
        }
    }

    pub fn set_offset(&mut self, offset: f64) {
        self.offset = offset;
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn clear_calls(&mut self) {
        self.calls.borrow_mut().clear();
    }

    pub fn text(&self, key: &str) -> Option<String> {
        self.texts.borrow().get(key).cloned()
    }

    pub fn pending_timers(&self) -> &BTreeMap<TimerId, Schedule> {
        &self.timers
    }

    pub fn listeners(&self) -> &BTreeSet<ListenerId> {
        &self.listeners
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }
}

impl ViewAdapter for RecordingView {
    fn count(&self, class: &str) -> usize {
        self.classes.get(class).copied().unwrap_or(0)
    }

    fn exists(&self, target: Target<'_>) -> bool {
        match target {
            Target::Id(id) => self.ids.contains(id),
            Target::Class(class) => self.count(class) > 0,
            Target::Nth(class, index) => index < self.count(class),
        }
    }

    fn set_text(&self, target: Target<'_>, text: &str) {
        if self.exists(target) {
            self.texts.borrow_mut().insert(key(target), text.to_string());
            self.record(Call::SetText(key(target), text.to_string()));
        }
    }

    fn set_style(&self, target: Target<'_>, property: &str, value: &str) {
        if self.exists(target) {
            self.record(Call::SetStyle(
                key(target),
                property.to_string(),
                value.to_string(),
            ));
        }
    }

    fn add_class(&self, target: Target<'_>, class: &str) {
        if self.exists(target) {
            self.record(Call::AddClass(key(target), class.to_string()));
        }
    }

    fn remove_class(&self, target: Target<'_>, class: &str) {
        if self.exists(target) {
            self.record(Call::RemoveClass(key(target), class.to_string()));
        }
    }

    fn in_viewport(&self, target: Target<'_>) -> bool {
        match target {
            Target::Id(id) => self.in_viewport.contains(id),
            _ => false,
        }
    }

    fn scroll_offset(&self) -> f64 {
        self.offset
    }

    fn scroll_into_view(&self, target: Target<'_>) {
        if self.exists(target) {
            self.record(Call::ScrollIntoView(key(target)));
        }
    }

    fn scroll_to_top(&self) {
        self.record(Call::ScrollToTop);
    }

    fn open_url(&self, url: &str) {
        self.record(Call::OpenUrl(url.to_string()));
    }

    fn alert(&self, message: &str) {
        self.record(Call::Alert(message.to_string()));
    }

    fn schedule(&mut self, id: TimerId, schedule: Schedule) {
        self.timers.insert(id, schedule);
        self.record(Call::Schedule(id, schedule));
    }

    fn cancel(&mut self, id: TimerId) {
        self.timers.remove(&id);
        self.record(Call::Cancel(id));
    }

    fn listen_scroll(&mut self, id: ListenerId) {
        self.listeners.insert(id);
        self.record(Call::Listen(id));
    }

    fn unlisten(&mut self, id: ListenerId) {
        self.listeners.remove(&id);
        self.record(Call::Unlisten(id));
    }
}
