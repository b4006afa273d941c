//! Camera, microphone and face-scan checks that precede the assessment.

mod media;
mod session;

pub use media::{MediaDevices, MediaStream, MediaTrack, SimulatedMediaDevices, SimulatedOutcome};
pub use session::{ProctorSession, ProctorSnapshot};
