use std::collections::HashMap;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{
    Document, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions, Window,
};

use crate::controller::{ListenerId, PageEvent, Schedule, Target, TimerId, ViewAdapter};

pub type Dispatch = Rc<dyn Fn(PageEvent)>;

enum Timer {
    Once(Timeout),
    Every(Interval),
}

impl Timer {
    fn cancel(self) {
        match self {
            Timer::Once(timeout) => drop(timeout.cancel()),
            Timer::Every(interval) => drop(interval.cancel()),
        }
    }
}

/// [`ViewAdapter`] over the live browser document
pub struct DomView {
    dispatch: Dispatch,
    timers: HashMap<TimerId, Timer>,
    listeners: HashMap<ListenerId, Closure<dyn FnMut()>>,
}

fn window() -> Option<Window> {
    web_sys::window()
}

fn document() -> Option<Document> {
    window()?.document()
}

fn millis(schedule: Schedule) -> u32 {
    u32::try_from(schedule.delay().as_millis()).unwrap_or(u32::MAX)
}

fn elements(target: Target<'_>) -> Vec<HtmlElement> {
    let Some(document) = document() else {
        return Vec::new();
    };
    let found = match target {
        Target::Id(id) => document.get_element_by_id(id).into_iter().collect::<Vec<_>>(),
        Target::Class(class) => {
            let list = document.get_elements_by_class_name(class);
            (0..list.length()).filter_map(|i| list.item(i)).collect()
        }
        Target::Nth(class, index) => u32::try_from(index)
            .ok()
            .and_then(|i| document.get_elements_by_class_name(class).item(i))
            .into_iter()
            .collect(),
    };
    found
        .into_iter()
        .filter_map(|element| element.dyn_into::<HtmlElement>().ok())
        .collect()
}

impl DomView {
    pub fn new(dispatch: Dispatch) -> Self {
        Self {
            dispatch,
            timers: HashMap::new(),
            listeners: HashMap::new(),
        }
    }
}

impl ViewAdapter for DomView {
    fn count(&self, class: &str) -> usize {
        document()
            .map(|d| d.get_elements_by_class_name(class).length() as usize)
            .unwrap_or(0)
    }

    fn exists(&self, target: Target<'_>) -> bool {
        !elements(target).is_empty()
    }

    fn set_text(&self, target: Target<'_>, text: &str) {
        for element in elements(target) {
            element.set_text_content(Some(text));
        }
    }

    fn set_style(&self, target: Target<'_>, property: &str, value: &str) {
        for element in elements(target) {
            let _ = element.style().set_property(property, value);
        }
    }

    fn add_class(&self, target: Target<'_>, class: &str) {
        for element in elements(target) {
            let _ = element.class_list().add_1(class);
        }
    }

    fn remove_class(&self, target: Target<'_>, class: &str) {
        for element in elements(target) {
            let _ = element.class_list().remove_1(class);
        }
    }

    fn in_viewport(&self, target: Target<'_>) -> bool {
        let Some(height) = window()
            .and_then(|w| w.inner_height().ok())
            .and_then(|h| h.as_f64())
        else {
            return false;
        };
        elements(target).iter().any(|element| {
            let rect = element.get_bounding_client_rect();
            rect.top() < height && rect.bottom() > 0.0
        })
    }

    fn scroll_offset(&self) -> f64 {
        window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
    }

    fn scroll_into_view(&self, target: Target<'_>) {
        if let Some(element) = elements(target).first() {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }

    fn scroll_to_top(&self) {
        if let Some(window) = window() {
            let options = ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    }

    fn open_url(&self, url: &str) {
        if let Some(window) = window() {
            let _ = window.open_with_url_and_target(url, "_blank");
        }
    }

    fn alert(&self, message: &str) {
        if let Some(window) = window() {
            let _ = window.alert_with_message(message);
        }
    }

    fn schedule(&mut self, id: TimerId, schedule: Schedule) {
        let dispatch = self.dispatch.clone();
        let timer = match schedule {
            Schedule::Once(_) => Timer::Once(Timeout::new(millis(schedule), move || {
                dispatch(PageEvent::Timer(id))
            })),
            Schedule::Every(_) => Timer::Every(Interval::new(millis(schedule), move || {
                dispatch(PageEvent::Timer(id))
            })),
        };
        if let Some(previous) = self.timers.insert(id, timer) {
            previous.cancel();
        }
    }

    fn cancel(&mut self, id: TimerId) {
        if let Some(timer) = self.timers.remove(&id) {
            timer.cancel();
        }
    }

    fn listen_scroll(&mut self, id: ListenerId) {
        let Some(window) = window() else {
            return;
        };
        let dispatch = self.dispatch.clone();
        let closure = Closure::<dyn FnMut()>::new(move || dispatch(PageEvent::Scroll(id)));
        if window
            .add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref())
            .is_ok()
        {
            self.listeners.insert(id, closure);
        }
    }

    fn unlisten(&mut self, id: ListenerId) {
        let Some(closure) = self.listeners.remove(&id) else {
            return;
        };
        if let Some(window) = window() {
            let _ = window
                .remove_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
        }
    }
}

impl Drop for DomView {
    fn drop(&mut self) {
        let ids: Vec<ListenerId> = self.listeners.keys().copied().collect();
        for id in ids {
            self.unlisten(id);
        }
        for (_, timer) in self.timers.drain() {
            timer.cancel();
        }
    }
}
