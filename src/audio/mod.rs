//! Audio output module

pub mod output;

#[cfg(test)]
mod tests;

pub use output::{AudioOutput, AudioOutputError, OutputEvent};
