use std::time::Duration;

/// An element (or set of elements) the controller addresses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target<'a> {
    /// The element with this id
    Id(&'a str),
    /// Every element carrying this class
    Class(&'a str),
    /// The n-th element carrying this class, in document order
    Nth(&'a str, usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(pub(crate) u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListenerId(pub(crate) u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Schedule {
    Once(Duration),
    Every(Duration),
}

impl Schedule {
    pub fn delay(&self) -> Duration {
        match self {
            Schedule::Once(d) | Schedule::Every(d) => *d,
        }
    }

    pub fn is_repeating(&self) -> bool {
        matches!(self, Schedule::Every(_))
    }
}

/// Events the view feeds back into the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageEvent {
    Timer(TimerId),
    Scroll(ListenerId),
}

/// Everything the page controller needs from the rendering environment.
///
/// Element operations on targets that do not exist are no-ops. Timers and
/// listeners are identified by ids the controller allocates; when one fires the
/// view reports it back as a [`PageEvent`].
pub trait ViewAdapter {
    fn count(&self, class: &str) -> usize;
    fn exists(&self, target: Target<'_>) -> bool;

    fn set_text(&self, target: Target<'_>, text: &str);
    fn set_style(&self, target: Target<'_>, property: &str, value: &str);
    fn add_class(&self, target: Target<'_>, class: &str);
    fn remove_class(&self, target: Target<'_>, class: &str);

    /// Whether the target's bounding box intersects the viewport
    fn in_viewport(&self, target: Target<'_>) -> bool;
    /// Current vertical scroll offset in CSS pixels
    fn scroll_offset(&self) -> f64;
    fn scroll_into_view(&self, target: Target<'_>);
    fn scroll_to_top(&self);

    /// Opens `url` in a new browsing context
    fn open_url(&self, url: &str);
    /// Blocking acknowledgment shown to the user
    fn alert(&self, message: &str);

    fn schedule(&mut self, id: TimerId, schedule: Schedule);
    fn cancel(&mut self, id: TimerId);
    fn listen_scroll(&mut self, id: ListenerId);
    fn unlisten(&mut self, id: ListenerId);
}
