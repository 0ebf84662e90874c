use stories_engine::coords::Rect;

use crate::event::{EventResult, UiEvent};

/// An interactive view over a model it does not own.
///
/// Widgets translate raw input into actions; their owner applies the actions to
/// the model. This keeps every model change flowing through one reducer no
/// matter which input produced it.
///
/// `rect` is the widget's bounding box in page coordinates at the time of the
/// event, as measured by the host.
pub trait Widget {
    /// Read-only model the widget presents.
    type Model: ?Sized;
    /// Edit requested from the owner.
    type Action;

    fn on_event(&mut self, model: &Self::Model, event: &UiEvent, rect: Rect) -> Response<Self::Action>;
}

/// Outcome of [`Widget::on_event`].
#[derive(Debug, Clone, PartialEq)]
pub struct Response<A> {
    pub result: EventResult,
    pub action: Option<A>,
}

impl<A> Response<A> {
    #[inline]
    pub fn ignored() -> Self {
        Self { result: EventResult::Ignored, action: None }
    }

    #[inline]
    pub fn consumed() -> Self {
        Self { result: EventResult::Consumed, action: None }
    }

    #[inline]
    pub fn action(action: A) -> Self {
        Self { result: EventResult::Consumed, action: Some(action) }
    }
}
