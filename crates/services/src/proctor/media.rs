use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use tracing::debug;
use verify_core::model::{Capability, DenyReason};

/// One live capture track. Stopping is idempotent.
#[derive(Debug)]
pub struct MediaTrack {
    capability: Capability,
    live: AtomicBool,
    on_stop: Option<Arc<AtomicUsize>>,
}

impl MediaTrack {
    #[must_use]
    pub fn new(capability: Capability) -> Self {
        Self {
            capability,
            live: AtomicBool::new(true),
            on_stop: None,
        }
    }

    /// A track that decrements `live_count` when it stops.
    #[must_use]
    pub fn counted(capability: Capability, live_count: Arc<AtomicUsize>) -> Self {
        live_count.fetch_add(1, Ordering::SeqCst);
        Self {
            capability,
            live: AtomicBool::new(true),
            on_stop: Some(live_count),
        }
    }

    #[must_use]
    pub fn capability(&self) -> Capability {
        self.capability
    }

    #[must_use]
    pub fn is_live(&self) -> bool {
        self.live.load(Ordering::SeqCst)
    }

    pub fn stop(&self) {
        if self.live.swap(false, Ordering::SeqCst) {
            if let Some(count) = &self.on_stop {
                count.fetch_sub(1, Ordering::SeqCst);
            }
            debug!(capability = self.capability.label(), "track stopped");
        }
    }
}

/// Handle to an acquired capture stream. Every track is stopped when the
/// stream is stopped or dropped.
#[derive(Debug)]
pub struct MediaStream {
    tracks: Vec<MediaTrack>,
}

impl MediaStream {
    #[must_use]
    pub fn new(tracks: Vec<MediaTrack>) -> Self {
        Self { tracks }
    }

    #[must_use]
    pub fn tracks(&self) -> &[MediaTrack] {
        &self.tracks
    }

    #[must_use]
    pub fn is_live(&self) -> bool {
        self.tracks.iter().any(MediaTrack::is_live)
    }

    pub fn stop(&self) {
        for track in &self.tracks {
            track.stop();
        }
    }
}

impl Drop for MediaStream {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Source of camera and microphone streams.
#[async_trait]
pub trait MediaDevices: Send + Sync {
    /// Ask for access to `capability`. May wait on the user indefinitely.
    ///
    /// # Errors
    ///
    /// Returns the `DenyReason` when access is refused or no device exists.
    async fn open(&self, capability: Capability) -> Result<MediaStream, DenyReason>;
}

/// Scripted answer for one simulated request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulatedOutcome {
    Grant,
    Deny(DenyReason),
    /// Never answers, like an ignored browser prompt.
    Hang,
}

/// Devices that answer from a script instead of hardware.
///
/// Each capability replays its queued outcomes in order, then falls back to
/// its default. Live tracks are counted so release can be observed.
#[derive(Debug, Clone, Default)]
pub struct SimulatedMediaDevices {
    defaults: HashMap<Capability, SimulatedOutcome>,
    scripts: Arc<Mutex<HashMap<Capability, VecDeque<SimulatedOutcome>>>>,
    live_tracks: Arc<AtomicUsize>,
    requests: Arc<AtomicUsize>,
}

impl SimulatedMediaDevices {
    /// Devices that grant everything.
    #[must_use]
    pub fn granting() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_default(mut self, capability: Capability, outcome: SimulatedOutcome) -> Self {
        self.defaults.insert(capability, outcome);
        self
    }

    /// Queue outcomes to be used before the default.
    #[must_use]
    pub fn with_script(
        self,
        capability: Capability,
        outcomes: impl IntoIterator<Item = SimulatedOutcome>,
    ) -> Self {
        self.scripts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(capability)
            .or_default()
            .extend(outcomes);
        self
    }

    /// Tracks handed out and not yet stopped.
    #[must_use]
    pub fn live_tracks(&self) -> usize {
        self.live_tracks.load(Ordering::SeqCst)
    }

    /// Requests received so far.
    #[must_use]
    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }

    fn next_outcome(&self, capability: Capability) -> SimulatedOutcome {
        let scripted = self
            .scripts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get_mut(&capability)
            .and_then(VecDeque::pop_front);
        scripted
            .or_else(|| self.defaults.get(&capability).copied())
            .unwrap_or(SimulatedOutcome::Grant)
    }
}

#[async_trait]
impl MediaDevices for SimulatedMediaDevices {
    async fn open(&self, capability: Capability) -> Result<MediaStream, DenyReason> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        match self.next_outcome(capability) {
            SimulatedOutcome::Grant => Ok(MediaStream::new(vec![MediaTrack::counted(
                capability,
                Arc::clone(&self.live_tracks),
            )])),
            SimulatedOutcome::Deny(reason) => Err(reason),
            SimulatedOutcome::Hang => std::future::pending().await,
        }
    }
}
