//! Synchronous event emitter for player events

use std::fmt;

use super::commands::PlayerCommands;
use crate::types::{RepeatMode, Track, TrackId};

/// Player events
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerEvent {
    // Playlist events
    /// Track appended to the playlist
    TrackAdded {
        /// Added track
        track: Track,
    },
    /// Track removed from the playlist
    TrackRemoved {
        /// ID of the removed track
        id: TrackId,
    },
    /// Playlist emptied
    PlaylistCleared,

    // Playback events
    /// A track was selected for playback
    TrackChanged {
        /// New track
        track: Track,
        /// Its index in the playlist
        index: usize,
    },
    /// Output started playing
    Play {
        /// Cursor at the time of the event
        index: Option<usize>,
    },
    /// Output paused
    Pause {
        /// Cursor at the time of the event
        index: Option<usize>,
    },
    /// Playback stopped and cursor cleared
    Stop,
    /// Position updated
    TimeUpdate {
        /// Position in seconds
        current_time: f64,
        /// Duration in seconds, if known
        duration: Option<f64>,
        /// Progress percentage (0 - 100)
        progress: f64,
    },
    /// Output finished loading track metadata
    TrackLoaded {
        /// Duration in seconds
        duration: f64,
    },

    // Mode events
    /// Shuffle toggled
    ShuffleChanged {
        /// New shuffle state
        shuffle: bool,
    },
    /// Repeat mode changed
    RepeatChanged {
        /// New repeat mode
        mode: RepeatMode,
    },

    // Error events
    /// Playback error reported by the output
    Error {
        /// Error message
        message: String,
    },
}

/// Discriminant of a `PlayerEvent`, used as the subscription key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// `trackadded`
    TrackAdded,
    /// `trackremoved`
    TrackRemoved,
    /// `playlistcleared`
    PlaylistCleared,
    /// `trackchange`
    TrackChanged,
    /// `play`
    Play,
    /// `pause`
    Pause,
    /// `stop`
    Stop,
    /// `timeupdate`
    TimeUpdate,
    /// `trackloaded`
    TrackLoaded,
    /// `shufflechange`
    ShuffleChanged,
    /// `repeatchange`
    RepeatChanged,
    /// `error`
    Error,
}

impl EventKind {
    /// Every event kind, in declaration order
    pub const ALL: [Self; 12] = [
        Self::TrackAdded,
        Self::TrackRemoved,
        Self::PlaylistCleared,
        Self::TrackChanged,
        Self::Play,
        Self::Pause,
        Self::Stop,
        Self::TimeUpdate,
        Self::TrackLoaded,
        Self::ShuffleChanged,
        Self::RepeatChanged,
        Self::Error,
    ];

    /// Wire name of the event as seen by UI code
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::TrackAdded => "trackadded",
            Self::TrackRemoved => "trackremoved",
            Self::PlaylistCleared => "playlistcleared",
            Self::TrackChanged => "trackchange",
            Self::Play => "play",
            Self::Pause => "pause",
            Self::Stop => "stop",
            Self::TimeUpdate => "timeupdate",
            Self::TrackLoaded => "trackloaded",
            Self::ShuffleChanged => "shufflechange",
            Self::RepeatChanged => "repeatchange",
            Self::Error => "error",
        }
    }

    /// Look up a kind by its wire name
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl PlayerEvent {
    /// Kind of this event
    #[must_use]
    pub fn kind(&self) -> EventKind {
        match self {
            Self::TrackAdded { .. } => EventKind::TrackAdded,
            Self::TrackRemoved { .. } => EventKind::TrackRemoved,
            Self::PlaylistCleared => EventKind::PlaylistCleared,
            Self::TrackChanged { .. } => EventKind::TrackChanged,
            Self::Play { .. } => EventKind::Play,
            Self::Pause { .. } => EventKind::Pause,
            Self::Stop => EventKind::Stop,
            Self::TimeUpdate { .. } => EventKind::TimeUpdate,
            Self::TrackLoaded { .. } => EventKind::TrackLoaded,
            Self::ShuffleChanged { .. } => EventKind::ShuffleChanged,
            Self::RepeatChanged { .. } => EventKind::RepeatChanged,
            Self::Error { .. } => EventKind::Error,
        }
    }
}

/// Handle returned by `subscribe`, used to unsubscribe later
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Event callback
///
/// Receives the event and a command list it may fill with player operations.
pub type EventCallback = Box<dyn FnMut(&PlayerEvent, &mut PlayerCommands) + Send + 'static>;

struct Subscriber {
    id: SubscriptionId,
    /// None receives every event
    kind: Option<EventKind>,
    callback: EventCallback,
}

/// Registry of event subscribers
///
/// Callbacks run synchronously, in registration order, and see the event by
/// shared reference. Delivery can be stepped one subscriber at a time with
/// `deliver` so that the commands a callback issues run before the next
/// subscriber is called.
#[derive(Default)]
pub struct EventEmitter {
    subscribers: Vec<Subscriber>,
    next_id: u64,
}

impl EventEmitter {
    /// Create an emitter with no subscribers
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to one kind of event
    pub fn subscribe<F>(&mut self, kind: EventKind, mut callback: F) -> SubscriptionId
    where
        F: FnMut(&PlayerEvent) + Send + 'static,
    {
        self.register(Some(kind), Box::new(move |event: &PlayerEvent, _: &mut PlayerCommands| {
            callback(event);
        }))
    }

    /// Subscribe to every event
    pub fn subscribe_all<F>(&mut self, mut callback: F) -> SubscriptionId
    where
        F: FnMut(&PlayerEvent) + Send + 'static,
    {
        self.register(None, Box::new(move |event: &PlayerEvent, _: &mut PlayerCommands| {
            callback(event);
        }))
    }

    /// Subscribe to one kind of event with a callback that may issue player commands
    pub fn subscribe_with_commands<F>(&mut self, kind: EventKind, callback: F) -> SubscriptionId
    where
        F: FnMut(&PlayerEvent, &mut PlayerCommands) + Send + 'static,
    {
        self.register(Some(kind), Box::new(callback))
    }

    /// Remove a subscriber; returns false if it was already gone
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|s| s.id != id);
        self.subscribers.len() != before
    }

    /// Number of subscribers that will receive events of `kind`
    #[must_use]
    pub fn subscriber_count(&self, kind: EventKind) -> usize {
        self.subscribers
            .iter()
            .filter(|s| s.kind.is_none_or(|k| k == kind))
            .count()
    }

    /// Deliver an event to every matching subscriber
    ///
    /// Returns the commands issued by all callbacks, in order.
    pub fn emit(&mut self, event: &PlayerEvent) -> PlayerCommands {
        tracing::trace!("emit {}", event.kind());
        let mut commands = PlayerCommands::new();
        let mut from = 0;
        while let Some(next) = self.deliver(from, event, &mut commands) {
            from = next;
        }
        commands
    }

    /// Deliver an event to the first matching subscriber at or after position `from`
    ///
    /// Returns the position to resume from, or `None` once no subscriber is
    /// left.
    pub fn deliver(
        &mut self,
        from: usize,
        event: &PlayerEvent,
        commands: &mut PlayerCommands,
    ) -> Option<usize> {
        let kind = event.kind();
        let offset = self
            .subscribers
            .iter()
            .skip(from)
            .position(|s| s.kind.is_none_or(|k| k == kind))?;
        let index = from + offset;
        (self.subscribers[index].callback)(event, commands);
        Some(index + 1)
    }

    fn register(&mut self, kind: Option<EventKind>, callback: EventCallback) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push(Subscriber { id, kind, callback });
        id
    }
}

impl fmt::Debug for EventEmitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventEmitter")
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
