use smallvec::SmallVec;

/// A playable track owned by the gate.
///
/// `stop` pauses and rewinds to the start. `play` may start asynchronously,
/// but `is_playing` must report true as soon as it was requested so that the
/// gate does not request it twice.
pub trait AudioHandle {
    fn is_playing(&self) -> bool;
    fn play(&mut self);
    fn stop(&mut self);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateAction {
    Started(usize),
    Stopped(usize),
}

pub type GateActions = SmallVec<[GateAction; 2]>;

/// Single authority deciding which track, if any, may play.
pub struct AudioGate<H: AudioHandle> {
    handles: Vec<H>,
}

impl<H: AudioHandle> AudioGate<H> {
    pub fn new(handles: Vec<H>) -> Self {
        Self { handles }
    }

    pub fn handles(&self) -> &[H] {
        &self.handles
    }

    /// Slot of the track that belongs to a card.
    pub fn slot_for(&self, card_index: usize) -> Option<usize> {
        if self.handles.is_empty() {
            None
        } else {
            Some(card_index % self.handles.len())
        }
    }

    pub fn playing_slot(&self) -> Option<usize> {
        self.handles.iter().position(|h| h.is_playing())
    }

    /// Bring playback in line with the focused card.
    ///
    /// Stops everything that is not the focused slot first, then starts the
    /// focused slot if the user has interacted and it is not already
    /// playing. Calling it again with the same inputs does nothing.
    pub fn sync(&mut self, focused_index: usize, user_has_interacted: bool) -> GateActions {
        let mut actions = GateActions::new();
        let wanted = if user_has_interacted {
            self.slot_for(focused_index)
        } else {
            None
        };
        for (slot, handle) in self.handles.iter_mut().enumerate() {
            if Some(slot) != wanted && handle.is_playing() {
                handle.stop();
                actions.push(GateAction::Stopped(slot));
            }
        }
        if let Some(slot) = wanted {
            let handle = &mut self.handles[slot];
            if !handle.is_playing() {
                handle.play();
                actions.push(GateAction::Started(slot));
            }
        }
        actions
    }

    pub fn stop_all(&mut self) -> GateActions {
        let mut actions = GateActions::new();
        for (slot, handle) in self.handles.iter_mut().enumerate() {
            if handle.is_playing() {
                handle.stop();
                actions.push(GateAction::Stopped(slot));
            }
        }
        actions
    }
}
