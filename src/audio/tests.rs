use super::output::*;
use crate::testing::MockOutput;
use crate::types::TrackSource;

#[test]
fn test_boxed_output_forwards_calls() {
    let mut output: Box<dyn AudioOutput> = Box::new(MockOutput::new());
    let source = TrackSource::Embedded("data:audio/wav;base64,AA==".to_string());

    output.set_source(&source);
    output.play().unwrap();
    output.set_current_time(12.0);
    output.set_volume(0.4);

    assert!((output.current_time() - 12.0).abs() < f64::EPSILON);
    assert!((output.volume() - 0.4).abs() < f32::EPSILON);
    assert_eq!(output.duration(), None);
}

#[test]
fn test_play_without_source_fails() {
    let mut output = MockOutput::new();
    assert_eq!(output.play(), Err(AudioOutputError::NoSource));
}

#[test]
fn test_error_display() {
    assert_eq!(
        AudioOutputError::Unsupported("audio/x-foo".into()).to_string(),
        "Format not supported: audio/x-foo"
    );
    assert_eq!(AudioOutputError::Busy.to_string(), "Output busy");
}
