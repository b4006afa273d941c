use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::watch;
use tracing::{debug, info, warn};
use verify_core::model::{
    Capability, CaptureStatus, DenyReason, FaceScanStatus, GateError, PermissionGate,
    PermissionState,
};

use super::media::{MediaDevices, MediaStream};
use crate::config::ProctorConfig;

/// Point-in-time view of the proctoring checks, for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProctorSnapshot {
    pub camera: CaptureStatus,
    pub microphone: CaptureStatus,
    pub face: FaceScanStatus,
    pub ready: bool,
}

impl ProctorSnapshot {
    #[must_use]
    pub fn status(&self, capability: Capability) -> CaptureStatus {
        match capability {
            Capability::Camera => self.camera,
            Capability::Microphone => self.microphone,
        }
    }

    #[must_use]
    pub fn permissions(&self) -> PermissionState {
        PermissionState {
            camera: self.camera.is_granted(),
            microphone: self.microphone.is_granted(),
            face_confirmed: self.face.is_confirmed(),
        }
    }
}

#[derive(Default)]
struct Inner {
    gate: PermissionGate,
    camera: Option<MediaStream>,
    microphone: Option<MediaStream>,
}

impl Inner {
    fn stream_mut(&mut self, capability: Capability) -> &mut Option<MediaStream> {
        match capability {
            Capability::Camera => &mut self.camera,
            Capability::Microphone => &mut self.microphone,
        }
    }

    fn snapshot(&self) -> ProctorSnapshot {
        ProctorSnapshot {
            camera: self.gate.status(Capability::Camera),
            microphone: self.gate.status(Capability::Microphone),
            face: self.gate.face(),
            ready: self.gate.is_ready(),
        }
    }
}

/// Drives the permission gate against real (or simulated) devices and owns
/// the streams it acquires. Dropping the session stops every track.
pub struct ProctorSession {
    devices: Arc<dyn MediaDevices>,
    config: ProctorConfig,
    inner: Mutex<Inner>,
    updates: watch::Sender<ProctorSnapshot>,
}

impl ProctorSession {
    #[must_use]
    pub fn new(devices: Arc<dyn MediaDevices>, config: ProctorConfig) -> Self {
        let (updates, _) = watch::channel(ProctorSnapshot::default());
        Self {
            devices,
            config,
            inner: Mutex::new(Inner::default()),
            updates,
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn publish(&self, snapshot: ProctorSnapshot) {
        self.updates.send_replace(snapshot);
    }

    #[must_use]
    pub fn snapshot(&self) -> ProctorSnapshot {
        self.lock().snapshot()
    }

    /// Receiver that sees every state change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<ProctorSnapshot> {
        self.updates.subscribe()
    }

    /// Whether a live stream is currently held for `capability`.
    #[must_use]
    pub fn holds_stream(&self, capability: Capability) -> bool {
        self.lock()
            .stream_mut(capability)
            .as_ref()
            .is_some_and(MediaStream::is_live)
    }

    /// Ask for `capability` and wait for the answer, at most
    /// `permission_timeout`. A granted or in-flight capability is left alone.
    pub async fn request(&self, capability: Capability) -> CaptureStatus {
        let (ticket, snapshot) = {
            let mut inner = self.lock();
            let ticket = inner.gate.request(capability);
            (ticket, inner.snapshot())
        };
        let Some(ticket) = ticket else {
            return self.snapshot_status(capability);
        };
        self.publish(snapshot);
        debug!(capability = capability.label(), "requesting access");

        let outcome = match tokio::time::timeout(
            self.config.permission_timeout,
            self.devices.open(capability),
        )
        .await
        {
            Ok(result) => result,
            Err(_) => Err(DenyReason::TimedOut),
        };
        let (result, stream) = match outcome {
            Ok(stream) => (Ok(()), Some(stream)),
            Err(reason) => (Err(reason), None),
        };

        let (applied, snapshot) = {
            let mut inner = self.lock();
            let applied = inner.gate.resolve(ticket, result);
            if applied {
                *inner.stream_mut(capability) = stream;
            } else {
                drop(stream);
            }
            (applied, inner.snapshot())
        };
        if !applied {
            debug!(
                capability = capability.label(),
                "discarding stale permission outcome"
            );
            return self.snapshot_status(capability);
        }

        match result {
            Ok(()) => info!(capability = capability.label(), "access granted"),
            Err(reason) => warn!(capability = capability.label(), ?reason, "access denied"),
        }
        self.publish(snapshot);
        snapshot.status(capability)
    }

    /// Abandon an unanswered request. A late answer is discarded and any
    /// stream it carries is released.
    pub fn cancel_request(&self, capability: Capability) -> bool {
        let (cancelled, snapshot) = {
            let mut inner = self.lock();
            (inner.gate.cancel(capability), inner.snapshot())
        };
        if cancelled {
            info!(capability = capability.label(), "request cancelled");
            self.publish(snapshot);
        }
        cancelled
    }

    /// Run the three timed scan phases and confirm the face.
    ///
    /// Returns immediately if a scan is already running or done.
    ///
    /// # Errors
    ///
    /// Returns `GateError::CameraRequired` if the camera is not granted, or if
    /// it is released mid-scan.
    pub async fn run_face_scan(&self) -> Result<FaceScanStatus, GateError> {
        let (started, snapshot) = {
            let mut inner = self.lock();
            (inner.gate.begin_face_scan()?, inner.snapshot())
        };
        if !started {
            return Ok(snapshot.face);
        }
        self.publish(snapshot);

        loop {
            tokio::time::sleep(self.config.face_scan_step).await;
            let (step, snapshot) = {
                let mut inner = self.lock();
                (inner.gate.advance_face_scan(), inner.snapshot())
            };
            self.publish(snapshot);
            match step? {
                FaceScanStatus::Scanning(phase) => debug!(message = phase.message(), "face scan"),
                FaceScanStatus::Confirmed => {
                    info!("face detection successful");
                    return Ok(FaceScanStatus::Confirmed);
                }
                FaceScanStatus::Idle => return Err(GateError::NotScanning),
            }
        }
    }

    /// True exactly once: the first call after all three checks pass.
    pub fn take_ready(&self) -> bool {
        let fired = self.lock().gate.take_ready();
        if fired {
            info!("proctoring checks passed");
        }
        fired
    }

    /// Stop every held stream and return the gate to its initial checks.
    /// The one-shot ready signal is not re-armed.
    pub fn release(&self) {
        let snapshot = {
            let mut inner = self.lock();
            inner.camera.take();
            inner.microphone.take();
            inner.gate.abort_face_scan();
            inner.gate.revoke(Capability::Camera);
            inner.gate.revoke(Capability::Microphone);
            inner.snapshot()
        };
        debug!("media streams released");
        self.publish(snapshot);
    }

    fn snapshot_status(&self, capability: Capability) -> CaptureStatus {
        self.snapshot().status(capability)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proctor::media::{SimulatedMediaDevices, SimulatedOutcome};
    use std::time::Duration;

    fn session(devices: &SimulatedMediaDevices) -> ProctorSession {
        ProctorSession::new(Arc::new(devices.clone()), ProctorConfig::instant())
    }

    #[tokio::test]
    async fn face_scan_needs_camera() {
        let devices = SimulatedMediaDevices::granting();
        let proctor = session(&devices);
        assert_eq!(proctor.run_face_scan().await, Err(GateError::CameraRequired));
    }

    #[tokio::test]
    async fn granted_request_holds_stream_until_release() {
        let devices = SimulatedMediaDevices::granting();
        let proctor = session(&devices);
        assert_eq!(
            proctor.request(Capability::Camera).await,
            CaptureStatus::Granted
        );
        assert!(proctor.holds_stream(Capability::Camera));
        assert_eq!(devices.live_tracks(), 1);

        proctor.release();
        assert_eq!(devices.live_tracks(), 0);
        assert_eq!(proctor.snapshot().camera, CaptureStatus::Idle);
    }

    #[tokio::test]
    async fn repeat_request_for_granted_capability_is_noop() {
        let devices = SimulatedMediaDevices::granting();
        let proctor = session(&devices);
        proctor.request(Capability::Microphone).await;
        proctor.request(Capability::Microphone).await;
        assert_eq!(devices.request_count(), 1);
        assert_eq!(devices.live_tracks(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn unanswered_request_times_out() {
        let devices = SimulatedMediaDevices::granting()
            .with_default(Capability::Camera, SimulatedOutcome::Hang);
        let proctor = ProctorSession::new(
            Arc::new(devices.clone()),
            ProctorConfig::instant().with_permission_timeout(Duration::from_secs(5)),
        );
        assert_eq!(
            proctor.request(Capability::Camera).await,
            CaptureStatus::Denied(DenyReason::TimedOut)
        );
    }

    #[tokio::test]
    async fn subscribers_see_updates() {
        let devices = SimulatedMediaDevices::granting();
        let proctor = session(&devices);
        let rx = proctor.subscribe();
        proctor.request(Capability::Camera).await;
        assert_eq!(rx.borrow().camera, CaptureStatus::Granted);
    }
}
