//! Player events and subscriptions

mod commands;
mod events;
#[cfg(test)]
mod tests;

pub use commands::{PlayerCommand, PlayerCommands};
pub use events::{EventCallback, EventEmitter, EventKind, PlayerEvent, SubscriptionId};
