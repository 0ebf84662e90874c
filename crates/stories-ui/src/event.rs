use stories_engine::input::{Key, KeyEvent, PointerEvent};

/// Input events routed to components.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// Pointer down/move/up/leave/cancel in page coordinates.
    Pointer(PointerEvent),
    /// Key pressed while the component has focus.
    Key(KeyEvent),
}

impl UiEvent {
    /// Shorthand for an unmodified, non-repeat key press.
    pub fn key(key: Key) -> Self {
        UiEvent::Key(KeyEvent::new(key))
    }
}

impl From<PointerEvent> for UiEvent {
    fn from(ev: PointerEvent) -> Self {
        UiEvent::Pointer(ev)
    }
}

impl From<KeyEvent> for UiEvent {
    fn from(ev: KeyEvent) -> Self {
        UiEvent::Key(ev)
    }
}

/// Whether a component handled an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was handled; the host should stop default handling.
    Consumed,
    /// Event was not handled; keep routing.
    Ignored,
}

impl EventResult {
    #[inline]
    pub fn is_consumed(self) -> bool {
        self == EventResult::Consumed
    }
}
