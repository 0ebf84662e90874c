use std::cell::RefCell;
use std::rc::Rc;

/// Analytics events emitted by the help center.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackingEvent {
    /// `status` is `"open"` or `"closed"`.
    HelpCenterToggled { status: &'static str },
    HelpCenterReadTip { name: String },
    TutorialBegin,
    TutorialComplete,
}

impl TrackingEvent {
    /// Event name as reported to the analytics backend.
    pub fn name(&self) -> &'static str {
        match self {
            TrackingEvent::HelpCenterToggled { .. } => "help_center_toggled",
            TrackingEvent::HelpCenterReadTip { .. } => "help_center_read_tip",
            TrackingEvent::TutorialBegin => "tutorial_begin",
            TrackingEvent::TutorialComplete => "tutorial_complete",
        }
    }
}

/// Sink for analytics events. Tracking never fails the caller.
pub trait Tracker {
    fn track(&mut self, event: TrackingEvent);
}

/// Writes events to the log at info level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogTracker;

impl Tracker for LogTracker {
    fn track(&mut self, event: TrackingEvent) {
        match &event {
            TrackingEvent::HelpCenterToggled { status } => log::info!("{} status={status}", event.name()),
            TrackingEvent::HelpCenterReadTip { name } => log::info!("{} name={name}", event.name()),
            _ => log::info!("{}", event.name()),
        }
    }
}

/// Keeps events in memory. Clones share the same list.
#[derive(Debug, Default, Clone)]
pub struct RecordingTracker {
    events: Rc<RefCell<Vec<TrackingEvent>>>,
}

impl RecordingTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<TrackingEvent> {
        self.events.borrow().clone()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.events.borrow().iter().map(TrackingEvent::name).collect()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}

impl Tracker for RecordingTracker {
    fn track(&mut self, event: TrackingEvent) {
        self.events.borrow_mut().push(event);
    }
}
