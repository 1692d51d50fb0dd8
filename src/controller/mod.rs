//! Page behaviour, independent of any rendering environment.
//!
//! [`PageController`] owns the page's effects (typewriter, particles, scroll
//! reveal, scroll hint, scroll-to-top) and the contact form flow. Everything it
//! does to the page goes through a [`ViewAdapter`], and every timer or listener
//! it holds is tracked in a [`TimerRegistry`] so teardown can release all of it.

mod hint;
mod timers;
mod typewriter;
mod view;

#[cfg(test)]
pub(crate) mod testing;

pub use hint::SkillsVisibility;
pub use timers::{ScrollHandler, TimerKind, TimerRegistry};
pub use typewriter::Typewriter;
pub use view::{ListenerId, PageEvent, Schedule, Target, TimerId, ViewAdapter};

use hint::{
    css_seconds, stagger, HINT_DURATION, HINT_FIRST_DELAY, HINT_INTERVAL, PARTICLE_STAGGER,
    REVEAL_STAGGER, SCROLL_TOP_THRESHOLD,
};
use typewriter::TYPEWRITER_INTERVAL;

use crate::models::{ContactForm, ContactSubmission, Platform, DISPLAY_NAME};

pub const PARTICLE_CLASS: &str = "floating-particle";
pub const TYPEWRITER_CLASS: &str = "typewriter";
pub const SKILLS_ID: &str = "skills";
pub const SKILL_CARD_CLASS: &str = "skill-card";
pub const SCROLL_HINT_ID: &str = "scroll-hint";
pub const SCROLL_TOP_ID: &str = "scroll-to-top";

const VISIBLE: &str = "visible";
const ANIMATE_IN: &str = "animate-in";

pub const CONTACT_SENT: &str = "Message sent successfully!";
pub const CONTACT_FAILED: &str = "Failed to send message!";

/// Which optional effects the page wires up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageFeatures {
    pub particles: bool,
    pub scroll_reveal: bool,
    pub scroll_top: bool,
}

impl PageFeatures {
    pub fn full() -> Self {
        Self {
            particles: true,
            scroll_reveal: true,
            scroll_top: true,
        }
    }

    pub fn minimal() -> Self {
        Self {
            particles: true,
            scroll_reveal: false,
            scroll_top: false,
        }
    }
}

impl Default for PageFeatures {
    fn default() -> Self {
        Self::full()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Running,
    Disposed,
}

pub struct PageController<V: ViewAdapter> {
    view: V,
    features: PageFeatures,
    timers: TimerRegistry,
    typewriter: Typewriter,
    skills: SkillsVisibility,
    phase: Phase,
}

impl<V: ViewAdapter> PageController<V> {
    pub fn new(view: V, features: PageFeatures) -> Self {
        Self {
            view,
            features,
            timers: TimerRegistry::new(),
            typewriter: Typewriter::new(DISPLAY_NAME),
            skills: SkillsVisibility::default(),
            phase: Phase::Idle,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn skills_viewed(&self) -> bool {
        self.skills.is_seen()
    }

    pub fn timers(&self) -> &TimerRegistry {
        &self.timers
    }

    pub fn init(&mut self) {
        if self.phase != Phase::Idle {
            return;
        }
        self.phase = Phase::Running;

        if self.features.particles {
            self.stagger_particles();
        }
        self.start_typewriter();

        if self.features.scroll_reveal {
            self.timers.listen(&mut self.view, ScrollHandler::Reveal);
            self.timers.start(
                &mut self.view,
                TimerKind::HintFirstShow,
                Schedule::Once(HINT_FIRST_DELAY),
            );
            self.timers.start(
                &mut self.view,
                TimerKind::HintRecur,
                Schedule::Every(HINT_INTERVAL),
            );
        }
        if self.features.scroll_top {
            self.timers.listen(&mut self.view, ScrollHandler::ScrollTop);
        }

        tracing::debug!(
            timers = self.timers.timer_count(),
            listeners = self.timers.listener_count(),
            "page controller started"
        );
    }

    pub fn teardown(&mut self) {
        if self.phase == Phase::Disposed {
            return;
        }
        self.phase = Phase::Disposed;
        self.timers.release_all(&mut self.view);
        tracing::debug!("page controller torn down");
    }

    pub fn handle(&mut self, event: PageEvent) {
        match event {
            PageEvent::Timer(id) => self.on_timer(id),
            PageEvent::Scroll(id) => self.on_scroll(id),
        }
    }

    pub fn on_timer(&mut self, id: TimerId) {
        if self.phase != Phase::Running {
            return;
        }
        let Some(kind) = self.timers.fired(&mut self.view, id) else {
            return;
        };
        match kind {
            TimerKind::Typewriter => self.type_next(),
            TimerKind::HintFirstShow | TimerKind::HintRecur => {
                if self.skills.is_seen() {
                    self.timers.stop(&mut self.view, kind);
                } else {
                    self.show_hint();
                }
            }
            TimerKind::HintHide => {
                self.view.remove_class(Target::Id(SCROLL_HINT_ID), VISIBLE);
            }
        }
    }

    pub fn on_scroll(&mut self, id: ListenerId) {
        if self.phase != Phase::Running {
            return;
        }
        match self.timers.handler(id) {
            Some(ScrollHandler::Reveal) => self.check_skills(),
            Some(ScrollHandler::ScrollTop) => self.toggle_scroll_top(),
            None => {}
        }
    }

    pub fn navigate_to_section(&self, id: &str) {
        let target = Target::Id(id);
        if self.view.exists(target) {
            self.view.scroll_into_view(target);
        }
    }

    pub fn open_external_profile(&self, platform: &str) {
        match Platform::from_key(platform) {
            Some(platform) => self.view.open_url(platform.url()),
            None => tracing::debug!(platform, "ignoring unknown profile key"),
        }
    }

    pub fn scroll_to_top(&self) {
        self.view.scroll_to_top();
    }

    /// Validates the form and returns the payload to relay, if any.
    ///
    /// Invalid forms get every field touched and nothing is returned.
    pub fn submit_contact(&mut self, form: &mut ContactForm) -> Option<ContactSubmission> {
        if self.phase == Phase::Disposed {
            return None;
        }
        let submission = form.begin_submit();
        if submission.is_none() && !form.is_pending() {
            tracing::debug!("contact form rejected by validation");
        }
        submission
    }

    /// Applies the relay outcome to the form and acknowledges it to the user.
    /// Once the page is torn down the acknowledgment is skipped.
    pub fn contact_settled(&mut self, form: &mut ContactForm, outcome: Result<(), String>) {
        let delivered = outcome.is_ok();
        match &outcome {
            Ok(()) => tracing::info!("contact message relayed"),
            Err(e) => tracing::warn!(error = %e, "contact message failed"),
        }
        form.settle(delivered);
        if self.phase == Phase::Disposed {
            return;
        }
        self.view
            .alert(if delivered { CONTACT_SENT } else { CONTACT_FAILED });
    }

    fn stagger_particles(&self) {
        for index in 0..self.view.count(PARTICLE_CLASS) {
            let delay = css_seconds(stagger(PARTICLE_STAGGER, index));
            self.view
                .set_style(Target::Nth(PARTICLE_CLASS, index), "animation-delay", &delay);
        }
    }

    fn start_typewriter(&mut self) {
        let target = Target::Class(TYPEWRITER_CLASS);
        if !self.view.exists(target) {
            return;
        }
        self.view.set_text(target, "");
        self.timers.start(
            &mut self.view,
            TimerKind::Typewriter,
            Schedule::Every(TYPEWRITER_INTERVAL),
        );
    }

    fn type_next(&mut self) {
        match self.typewriter.advance() {
            Some(prefix) => self
                .view
                .set_text(Target::Class(TYPEWRITER_CLASS), prefix),
            None => self.timers.stop(&mut self.view, TimerKind::Typewriter),
        }
    }

    fn show_hint(&mut self) {
        let target = Target::Id(SCROLL_HINT_ID);
        if !self.view.exists(target) {
            return;
        }
        self.view.add_class(target, VISIBLE);
        self.timers.stop(&mut self.view, TimerKind::HintHide);
        self.timers.start(
            &mut self.view,
            TimerKind::HintHide,
            Schedule::Once(HINT_DURATION),
        );
    }

    fn hide_hint(&mut self) {
        for kind in [
            TimerKind::HintFirstShow,
            TimerKind::HintRecur,
            TimerKind::HintHide,
        ] {
            self.timers.stop(&mut self.view, kind);
        }
        self.view.remove_class(Target::Id(SCROLL_HINT_ID), VISIBLE);
    }

    fn check_skills(&mut self) {
        if self.skills.is_seen() || !self.view.in_viewport(Target::Id(SKILLS_ID)) {
            return;
        }
        self.skills.mark_seen();
        for index in 0..self.view.count(SKILL_CARD_CLASS) {
            let card = Target::Nth(SKILL_CARD_CLASS, index);
            let delay = css_seconds(stagger(REVEAL_STAGGER, index));
            self.view.set_style(card, "animation-delay", &delay);
            self.view.add_class(card, ANIMATE_IN);
        }
        self.hide_hint();
        tracing::debug!("skills section revealed");
    }

    fn toggle_scroll_top(&self) {
        let target = Target::Id(SCROLL_TOP_ID);
        if self.view.scroll_offset() > SCROLL_TOP_THRESHOLD {
            self.view.add_class(target, VISIBLE);
        } else {
            self.view.remove_class(target, VISIBLE);
        }
    }
}

impl<V: ViewAdapter> Drop for PageController<V> {
    fn drop(&mut self) {
        self.teardown();
    }
}
