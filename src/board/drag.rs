use std::fmt;
use std::time::Duration;

use super::gesture::{EdgeConfig, EdgeNavigator};
use crate::models::event::{Event, EventId};

/// Payload kind carried by event cards
pub const EVENT_PAYLOAD_KIND: &str = "event";

/// What a drag carries. Drop targets only accept [`DragPayload::Event`].
#[derive(Debug, Clone, PartialEq)]
pub enum DragPayload {
    Event(Event),
    /// Anything else the transport may carry (files, text, other widgets)
    Foreign { kind: String },
}

impl DragPayload {
    pub fn kind(&self) -> &str {
        match self {
            DragPayload::Event(_) => EVENT_PAYLOAD_KIND,
            DragPayload::Foreign { kind } => kind.as_str(),
        }
    }

    pub fn as_event(&self) -> Option<&Event> {
        match self {
            DragPayload::Event(event) => Some(event),
            DragPayload::Foreign { .. } => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragPoint {
    pub x: f32,
    pub y: f32,
}

impl DragPoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportKind {
    Pointer,
    Touch,
}

/// What the input layer can do, probed when a drag begins
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputCapabilities {
    pub touch: bool,
}

/// Carries a payload from a drag source to a drop target and reports where
/// the pointer or finger currently is.
pub trait DragTransport: fmt::Debug {
    fn kind(&self) -> TransportKind;
    fn start(&mut self, payload: DragPayload, at: DragPoint);
    fn update(&mut self, at: DragPoint);
    fn is_dragging(&self) -> bool;
    fn position(&self) -> Option<DragPoint>;
    fn payload(&self) -> Option<&DragPayload>;
    /// End the drag, handing the payload to whoever accepts the drop
    fn finish(&mut self) -> Option<DragPayload>;
    fn cancel(&mut self);
    /// Touch input hides the card under the finger, so it needs a floating preview
    fn shows_preview(&self) -> bool;
}

/// Carries the payload for pointer and touch drags. Only touch shows a preview.
#[derive(Debug)]
pub struct CarryTransport {
    kind: TransportKind,
    payload: Option<DragPayload>,
    position: Option<DragPoint>,
}

impl CarryTransport {
    pub fn new(kind: TransportKind) -> Self {
        Self {
            kind,
            payload: None,
            position: None,
        }
    }

    pub fn pointer() -> Self {
        Self::new(TransportKind::Pointer)
    }

    pub fn touch() -> Self {
        Self::new(TransportKind::Touch)
    }

    fn take(&mut self) -> Option<DragPayload> {
        self.position = None;
        self.payload.take()
    }
}

impl DragTransport for CarryTransport {
    fn kind(&self) -> TransportKind {
        self.kind
    }

    fn start(&mut self, payload: DragPayload, at: DragPoint) {
        self.payload = Some(payload);
        self.position = Some(at);
    }

    fn update(&mut self, at: DragPoint) {
        if self.payload.is_some() {
            self.position = Some(at);
        }
    }

    fn is_dragging(&self) -> bool {
        self.payload.is_some()
    }

    fn position(&self) -> Option<DragPoint> {
        self.position
    }

    fn payload(&self) -> Option<&DragPayload> {
        self.payload.as_ref()
    }

    fn finish(&mut self) -> Option<DragPayload> {
        self.take()
    }

    fn cancel(&mut self) {
        self.take();
    }

    fn shows_preview(&self) -> bool {
        self.kind == TransportKind::Touch
    }
}

pub fn select_transport(capabilities: InputCapabilities) -> Box<dyn DragTransport> {
    if capabilities.touch {
        Box::new(CarryTransport::touch())
    } else {
        Box::new(CarryTransport::pointer())
    }
}

/// Per-card draggable handle
#[derive(Debug, Clone)]
pub struct DragSource {
    event: Event,
    dragging: bool,
}

impl DragSource {
    pub fn new(event: Event) -> Self {
        Self {
            event,
            dragging: false,
        }
    }

    /// Mark whether this card is the one currently being carried.
    ///
    /// Sources are rebuilt every frame, so this is how a drag's end reaches them.
    pub fn with_active(mut self, dragging: bool) -> Self {
        self.dragging = dragging;
        self
    }

    pub fn event(&self) -> &Event {
        &self.event
    }

    /// Pick up the card: marks it active and hands out the payload that
    /// [`BoardController::begin_drag`](super::BoardController::begin_drag) carries.
    pub fn begin(&mut self) -> DragPayload {
        self.dragging = true;
        DragPayload::Event(self.event.clone())
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn opacity(&self) -> f32 {
        if self.dragging {
            0.5
        } else {
            1.0
        }
    }
}

/// Everything that exists only while an event is being carried.
///
/// The edge navigator lives here so dropping the session drops its deadlines.
#[derive(Debug)]
pub struct DragSession {
    transport: Box<dyn DragTransport>,
    edge: EdgeNavigator,
    started_at: Duration,
}

impl DragSession {
    pub fn begin(
        mut transport: Box<dyn DragTransport>,
        payload: DragPayload,
        at: DragPoint,
        edge_config: EdgeConfig,
        now: Duration,
    ) -> Self {
        transport.start(payload, at);
        Self {
            transport,
            edge: EdgeNavigator::new(edge_config),
            started_at: now,
        }
    }

    pub fn event(&self) -> Option<&Event> {
        self.transport.payload().and_then(DragPayload::as_event)
    }

    pub fn event_id(&self) -> Option<EventId> {
        self.event().map(|e| e.id)
    }

    pub fn position(&self) -> Option<DragPoint> {
        self.transport.position()
    }

    pub fn transport_kind(&self) -> TransportKind {
        self.transport.kind()
    }

    pub fn shows_preview(&self) -> bool {
        self.transport.shows_preview()
    }

    pub fn started_at(&self) -> Duration {
        self.started_at
    }

    pub fn edge(&self) -> &EdgeNavigator {
        &self.edge
    }

    pub fn edge_mut(&mut self) -> &mut EdgeNavigator {
        &mut self.edge
    }

    pub fn update(&mut self, now: Duration, at: DragPoint, viewport_width: f32) {
        self.transport.update(at);
        self.edge.observe(now, at.x, viewport_width);
    }

    /// Consume the session for a drop
    pub fn finish(mut self) -> Option<DragPayload> {
        self.edge.reset();
        self.transport.finish()
    }

    pub fn cancel(mut self) {
        self.edge.reset();
        self.transport.cancel();
    }
}
