use crate::constants::WINK_COOLDOWN_MS;
use crate::gestures;
use crate::landmarks::{Eye, FaceLandmarks};

/// Wink classifier with an independent cooldown per eye.
#[derive(Debug, Default)]
pub struct WinkDetector {
    last_fired: [Option<f64>; 2],
}

impl WinkDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// The eye whose wink should spark this frame, stamping its cooldown.
    pub fn observe(&mut self, face: &FaceLandmarks, now_ms: f64) -> Option<Eye> {
        let eye = gestures::detect_wink(face)?;
        let slot = &mut self.last_fired[eye.index()];
        match *slot {
            Some(last) if now_ms - last <= WINK_COOLDOWN_MS => None,
            _ => {
                *slot = Some(now_ms);
                Some(eye)
            }
        }
    }

    pub fn last_fired(&self, eye: Eye) -> Option<f64> {
        self.last_fired[eye.index()]
    }
}
