use std::time::Duration;

/// Discrete transitions of the focused index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavEvent {
    Next,
    Previous,
    IdleAdvance,
}

#[inline]
pub fn circular_increment(index: usize, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    (index % count + 1) % count
}

#[inline]
pub fn circular_decrement(index: usize, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    (index % count + count - 1) % count
}

/// The only persistent interaction state of a scene.
///
/// Times are elapsed scene time, so the state never touches a wall clock and
/// can be driven deterministically.
#[derive(Clone, Debug, PartialEq)]
pub struct CarouselState {
    current_index: usize,
    card_count: usize,
    last_interaction: Duration,
    user_has_interacted: bool,
    idle_threshold: Duration,
}

impl CarouselState {
    pub fn new(card_count: usize, idle_threshold: Duration) -> Self {
        Self {
            current_index: 0,
            card_count: card_count.max(1),
            last_interaction: Duration::ZERO,
            user_has_interacted: false,
            idle_threshold,
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn card_count(&self) -> usize {
        self.card_count
    }

    pub fn last_interaction(&self) -> Duration {
        self.last_interaction
    }

    pub fn user_has_interacted(&self) -> bool {
        self.user_has_interacted
    }

    pub fn is_idle(&self, now: Duration) -> bool {
        now.saturating_sub(self.last_interaction) > self.idle_threshold
    }

    /// Apply one transition; returns true when `current_index` changed.
    ///
    /// `Next`/`Previous` count as manual input and restamp the interaction
    /// time. `IdleAdvance` only moves once the idle threshold has been
    /// exceeded and leaves the timestamp alone, so a long idle period keeps
    /// advancing on every later poll.
    pub fn apply(&mut self, event: NavEvent, now: Duration) -> bool {
        let before = self.current_index;
        match event {
            NavEvent::Next => {
                self.current_index = circular_increment(self.current_index, self.card_count);
                self.last_interaction = now;
            }
            NavEvent::Previous => {
                self.current_index = circular_decrement(self.current_index, self.card_count);
                self.last_interaction = now;
            }
            NavEvent::IdleAdvance => {
                if !self.is_idle(now) {
                    return false;
                }
                self.current_index = circular_increment(self.current_index, self.card_count);
            }
        }
        self.current_index != before
    }

    /// One-way latch; returns true only on the first call.
    pub fn mark_interacted(&mut self) -> bool {
        let first = !self.user_has_interacted;
        self.user_has_interacted = true;
        first
    }
}

pub fn focused_caption(index: usize) -> String {
    format!("Card {}", index + 1)
}
