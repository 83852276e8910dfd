use crate::projection::EquityProjection;
use crate::visibility::KeyStroke;

/// Notifications the host delivers to the indicator, one at a time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChartEvent {
    /// Indicator attached to the chart.
    Started,
    /// A bar was added or its last price changed.
    BarUpdated { index: usize },
    /// The refresh timer fired.
    TimerTick,
    /// Chart objects were changed by the user (e.g. the line was dragged).
    ObjectsUpdated,
    KeyDown(KeyStroke),
    ScrollChanged,
    ZoomChanged,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Started,
    BarUpdated,
    TimerTick,
    ObjectsUpdated,
    KeyDown,
    ScrollChanged,
    ZoomChanged,
}

impl ChartEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            ChartEvent::Started => EventKind::Started,
            ChartEvent::BarUpdated { .. } => EventKind::BarUpdated,
            ChartEvent::TimerTick => EventKind::TimerTick,
            ChartEvent::ObjectsUpdated => EventKind::ObjectsUpdated,
            ChartEvent::KeyDown(_) => EventKind::KeyDown,
            ChartEvent::ScrollChanged => EventKind::ScrollChanged,
            ChartEvent::ZoomChanged => EventKind::ZoomChanged,
        }
    }
}

/// What handling an event did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EventOutcome {
    /// Values were recomputed (and the label redrawn if enabled).
    Recomputed(EquityProjection),
    /// Label re-anchored with unchanged values.
    Redrawn,
    VisibilityChanged { visible: bool },
    Ignored,
}

impl EventOutcome {
    pub fn projection(&self) -> Option<&EquityProjection> {
        match self {
            EventOutcome::Recomputed(p) => Some(p),
            _ => None,
        }
    }
}
