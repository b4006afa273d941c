use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum GateError {
    #[error("camera must be enabled before face detection")]
    CameraRequired,
    #[error("face detection has not been started")]
    NotScanning,
}

//
// ─── CAPTURE STATUS ────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    Camera,
    Microphone,
}

impl Capability {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Capability::Camera => "Camera",
            Capability::Microphone => "Microphone",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenyReason {
    /// The user (or the OS) refused access.
    Refused,
    /// No usable device.
    Unavailable,
    /// The prompt was never answered.
    TimedOut,
}

impl DenyReason {
    #[must_use]
    pub fn message(self, capability: Capability) -> String {
        let device = capability.label().to_lowercase();
        match self {
            DenyReason::Refused => {
                format!("Unable to access {device}. Please check permissions.")
            }
            DenyReason::Unavailable => format!("No {device} was found."),
            DenyReason::TimedOut => format!("The {device} request timed out. Try again."),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaptureStatus {
    #[default]
    Idle,
    Requesting,
    Granted,
    Denied(DenyReason),
}

impl CaptureStatus {
    #[must_use]
    pub fn is_granted(self) -> bool {
        matches!(self, CaptureStatus::Granted)
    }

    #[must_use]
    pub fn is_requesting(self) -> bool {
        matches!(self, CaptureStatus::Requesting)
    }
}

//
// ─── FACE SCAN ─────────────────────────────────────────────────────────────────
//

/// The three timed phases of the simulated face scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanPhase {
    Searching,
    Aligning,
    Confirming,
}

impl ScanPhase {
    pub const COUNT: usize = 3;

    #[must_use]
    pub fn next(self) -> Option<Self> {
        match self {
            ScanPhase::Searching => Some(ScanPhase::Aligning),
            ScanPhase::Aligning => Some(ScanPhase::Confirming),
            ScanPhase::Confirming => None,
        }
    }

    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ScanPhase::Searching => "Scanning for face...",
            ScanPhase::Aligning => "Aligning face position...",
            ScanPhase::Confirming => "Confirming facial features...",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FaceScanStatus {
    #[default]
    Idle,
    Scanning(ScanPhase),
    Confirmed,
}

impl FaceScanStatus {
    #[must_use]
    pub fn is_confirmed(self) -> bool {
        matches!(self, FaceScanStatus::Confirmed)
    }
}

//
// ─── GATE ──────────────────────────────────────────────────────────────────────
//

/// Identifies one in-flight capability request.
///
/// Outcomes carrying an older ticket are discarded, so a cancelled or
/// superseded prompt cannot flip the gate later.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket {
    capability: Capability,
    serial: u64,
}

impl RequestTicket {
    #[must_use]
    pub fn capability(&self) -> Capability {
        self.capability
    }
}

/// Flattened success flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PermissionState {
    pub camera: bool,
    pub microphone: bool,
    pub face_confirmed: bool,
}

impl PermissionState {
    #[must_use]
    pub fn all_granted(self) -> bool {
        self.camera && self.microphone && self.face_confirmed
    }
}

/// Proctoring prerequisites: camera, microphone, and a face scan that needs
/// the camera. Opens once all three succeed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PermissionGate {
    camera: CaptureStatus,
    microphone: CaptureStatus,
    face: FaceScanStatus,
    next_serial: u64,
    camera_serial: Option<u64>,
    microphone_serial: Option<u64>,
    ready_fired: bool,
}

impl PermissionGate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn status(&self, capability: Capability) -> CaptureStatus {
        match capability {
            Capability::Camera => self.camera,
            Capability::Microphone => self.microphone,
        }
    }

    #[must_use]
    pub fn face(&self) -> FaceScanStatus {
        self.face
    }

    #[must_use]
    pub fn state(&self) -> PermissionState {
        PermissionState {
            camera: self.camera.is_granted(),
            microphone: self.microphone.is_granted(),
            face_confirmed: self.face.is_confirmed(),
        }
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.state().all_granted()
    }

    /// Starts a request. Returns `None` when the capability is already
    /// granted or a request is in flight.
    pub fn request(&mut self, capability: Capability) -> Option<RequestTicket> {
        match self.status(capability) {
            CaptureStatus::Granted | CaptureStatus::Requesting => None,
            CaptureStatus::Idle | CaptureStatus::Denied(_) => {
                self.next_serial += 1;
                let serial = self.next_serial;
                *self.status_mut(capability) = CaptureStatus::Requesting;
                *self.serial_mut(capability) = Some(serial);
                Some(RequestTicket { capability, serial })
            }
        }
    }

    /// Applies the outcome of a request. Returns false if the ticket is stale.
    pub fn resolve(&mut self, ticket: RequestTicket, outcome: Result<(), DenyReason>) -> bool {
        let capability = ticket.capability;
        if !self.status(capability).is_requesting()
            || *self.serial_mut(capability) != Some(ticket.serial)
        {
            return false;
        }
        *self.serial_mut(capability) = None;
        *self.status_mut(capability) = match outcome {
            Ok(()) => CaptureStatus::Granted,
            Err(reason) => CaptureStatus::Denied(reason),
        };
        true
    }

    /// Abandons an in-flight request. Returns false if nothing was pending.
    pub fn cancel(&mut self, capability: Capability) -> bool {
        if !self.status(capability).is_requesting() {
            return false;
        }
        *self.serial_mut(capability) = None;
        *self.status_mut(capability) = CaptureStatus::Idle;
        true
    }

    /// Drops a capability back to idle, e.g. when its stream ended. Losing the
    /// camera also voids the face scan.
    pub fn revoke(&mut self, capability: Capability) {
        *self.serial_mut(capability) = None;
        *self.status_mut(capability) = CaptureStatus::Idle;
        if capability == Capability::Camera {
            self.face = FaceScanStatus::Idle;
        }
    }

    /// Enters the first scan phase. Returns `Ok(false)` if a scan is already
    /// running or done.
    ///
    /// # Errors
    ///
    /// Returns `GateError::CameraRequired` unless the camera is granted.
    pub fn begin_face_scan(&mut self) -> Result<bool, GateError> {
        if !self.camera.is_granted() {
            return Err(GateError::CameraRequired);
        }
        match self.face {
            FaceScanStatus::Idle => {
                self.face = FaceScanStatus::Scanning(ScanPhase::Searching);
                Ok(true)
            }
            FaceScanStatus::Scanning(_) | FaceScanStatus::Confirmed => Ok(false),
        }
    }

    /// Moves to the next scan phase, confirming after the last one.
    ///
    /// # Errors
    ///
    /// Returns `GateError::NotScanning` if no scan is running, or
    /// `GateError::CameraRequired` if the camera went away mid-scan.
    pub fn advance_face_scan(&mut self) -> Result<FaceScanStatus, GateError> {
        let FaceScanStatus::Scanning(phase) = self.face else {
            return match self.face {
                FaceScanStatus::Confirmed => Ok(FaceScanStatus::Confirmed),
                _ => Err(GateError::NotScanning),
            };
        };
        if !self.camera.is_granted() {
            self.face = FaceScanStatus::Idle;
            return Err(GateError::CameraRequired);
        }
        self.face = match phase.next() {
            Some(next) => FaceScanStatus::Scanning(next),
            None => FaceScanStatus::Confirmed,
        };
        Ok(self.face)
    }

    /// Stops a running scan without confirming it.
    pub fn abort_face_scan(&mut self) {
        if matches!(self.face, FaceScanStatus::Scanning(_)) {
            self.face = FaceScanStatus::Idle;
        }
    }

    /// True exactly once: the first call after every check has passed.
    pub fn take_ready(&mut self) -> bool {
        if self.ready_fired || !self.is_ready() {
            return false;
        }
        self.ready_fired = true;
        true
    }

    #[must_use]
    pub fn ready_fired(&self) -> bool {
        self.ready_fired
    }

    fn status_mut(&mut self, capability: Capability) -> &mut CaptureStatus {
        match capability {
            Capability::Camera => &mut self.camera,
            Capability::Microphone => &mut self.microphone,
        }
    }

    fn serial_mut(&mut self, capability: Capability) -> &mut Option<u64> {
        match capability {
            Capability::Camera => &mut self.camera_serial,
            Capability::Microphone => &mut self.microphone_serial,
        }
    }
}
