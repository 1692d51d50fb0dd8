use std::time::Duration;

pub const HINT_FIRST_DELAY: Duration = Duration::from_secs(3);
pub const HINT_INTERVAL: Duration = Duration::from_secs(8);
pub const HINT_DURATION: Duration = Duration::from_secs(4);
pub const REVEAL_STAGGER: Duration = Duration::from_millis(100);
pub const PARTICLE_STAGGER: Duration = Duration::from_millis(500);
pub const SCROLL_TOP_THRESHOLD: f64 = 300.0;

/// Whether the skills section has been scrolled into view yet.
///
/// The only transition is `Unseen -> Seen`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SkillsVisibility {
    #[default]
    Unseen,
    Seen,
}

impl SkillsVisibility {
    /// Returns `true` only for the call that performs the transition
    pub fn mark_seen(&mut self) -> bool {
        match self {
            SkillsVisibility::Unseen => {
                *self = SkillsVisibility::Seen;
                true
            }
            SkillsVisibility::Seen => false,
        }
    }

    pub fn is_seen(&self) -> bool {
        *self == SkillsVisibility::Seen
    }
}

/// CSS time value, e.g. `0.5s`
pub fn css_seconds(duration: Duration) -> String {
    format!("{}s", duration.as_secs_f64())
}

/// Stagger offset for the element at `index`
pub fn stagger(step: Duration, index: usize) -> Duration {
    step * u32::try_from(index).unwrap_or(u32::MAX)
}
