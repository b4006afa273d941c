use services::proctor::ProctorSnapshot;
use verify_core::model::{Capability, CaptureStatus, FaceScanStatus};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CheckTone {
    Pending,
    Busy,
    Ok,
    Failed,
}

impl CheckTone {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            CheckTone::Pending => "check check--pending",
            CheckTone::Busy => "check check--busy",
            CheckTone::Ok => "check check--ok",
            CheckTone::Failed => "check check--failed",
        }
    }
}

/// One row of the proctoring checklist.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckVm {
    pub label: &'static str,
    pub state: &'static str,
    pub tone: CheckTone,
    pub action_label: &'static str,
    pub can_request: bool,
    /// A request is in flight and may be cancelled.
    pub can_cancel: bool,
    pub notice: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProctorVm {
    pub camera: CheckVm,
    pub microphone: CheckVm,
    pub face: CheckVm,
    pub ready: bool,
}

#[must_use]
pub fn map_proctor(snapshot: &ProctorSnapshot) -> ProctorVm {
    ProctorVm {
        camera: capture_check(Capability::Camera, snapshot.camera),
        microphone: capture_check(Capability::Microphone, snapshot.microphone),
        face: face_check(snapshot.face, snapshot.camera.is_granted()),
        ready: snapshot.ready,
    }
}

fn capture_check(capability: Capability, status: CaptureStatus) -> CheckVm {
    let action_label = match capability {
        Capability::Camera => "Enable Camera",
        Capability::Microphone => "Enable Microphone",
    };
    let mut check = CheckVm {
        label: capability.label(),
        state: "Not enabled",
        tone: CheckTone::Pending,
        action_label,
        can_request: true,
        can_cancel: false,
        notice: None,
    };
    match status {
        CaptureStatus::Idle => {}
        CaptureStatus::Requesting => {
            check.state = "Waiting for permission...";
            check.tone = CheckTone::Busy;
            check.can_request = false;
            check.can_cancel = true;
        }
        CaptureStatus::Granted => {
            check.state = match capability {
                Capability::Camera => "Camera access granted",
                Capability::Microphone => "Microphone access granted",
            };
            check.tone = CheckTone::Ok;
            check.action_label = "Enabled";
            check.can_request = false;
        }
        CaptureStatus::Denied(reason) => {
            check.state = "Access denied";
            check.tone = CheckTone::Failed;
            check.action_label = "Try Again";
            check.notice = Some(reason.message(capability));
        }
    }
    check
}

fn face_check(face: FaceScanStatus, camera_granted: bool) -> CheckVm {
    match face {
        FaceScanStatus::Idle => CheckVm {
            label: "Face Detection",
            state: "Not verified",
            tone: CheckTone::Pending,
            action_label: "Verify Face",
            can_request: camera_granted,
            can_cancel: false,
            notice: (!camera_granted).then(|| "Camera must be enabled first".to_owned()),
        },
        FaceScanStatus::Scanning(phase) => CheckVm {
            label: "Face Detection",
            state: phase.message(),
            tone: CheckTone::Busy,
            action_label: "Scanning...",
            can_request: false,
            can_cancel: false,
            notice: None,
        },
        FaceScanStatus::Confirmed => CheckVm {
            label: "Face Detection",
            state: "Face detection successful",
            tone: CheckTone::Ok,
            action_label: "Verified",
            can_request: false,
            can_cancel: false,
            notice: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use verify_core::model::{DenyReason, ScanPhase};

    #[test]
    fn fresh_snapshot_blocks_face_until_camera() {
        let vm = map_proctor(&ProctorSnapshot::default());
        assert!(vm.camera.can_request);
        assert!(vm.microphone.can_request);
        assert!(!vm.face.can_request);
        assert_eq!(vm.face.notice.as_deref(), Some("Camera must be enabled first"));
        assert!(!vm.ready);
    }

    #[test]
    fn denied_camera_offers_retry_with_message() {
        let snapshot = ProctorSnapshot {
            camera: CaptureStatus::Denied(DenyReason::Refused),
            ..ProctorSnapshot::default()
        };
        let vm = map_proctor(&snapshot);
        assert_eq!(vm.camera.action_label, "Try Again");
        assert_eq!(vm.camera.tone, CheckTone::Failed);
        assert!(vm.camera.can_request);
        assert_eq!(
            vm.camera.notice.as_deref(),
            Some("Unable to access camera. Please check permissions.")
        );
    }

    #[test]
    fn requesting_can_be_cancelled_but_not_repeated() {
        let snapshot = ProctorSnapshot {
            microphone: CaptureStatus::Requesting,
            ..ProctorSnapshot::default()
        };
        let vm = map_proctor(&snapshot);
        assert!(!vm.microphone.can_request);
        assert!(vm.microphone.can_cancel);
    }

    #[test]
    fn scanning_shows_phase_message() {
        let snapshot = ProctorSnapshot {
            camera: CaptureStatus::Granted,
            face: FaceScanStatus::Scanning(ScanPhase::Aligning),
            ..ProctorSnapshot::default()
        };
        let vm = map_proctor(&snapshot);
        assert_eq!(vm.face.state, "Aligning face position...");
        assert!(!vm.face.can_request);
        assert_eq!(vm.camera.state, "Camera access granted");
        assert!(!vm.camera.can_request);
    }
}
