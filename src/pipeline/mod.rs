//! Frame-driven orchestration. One `SignPipeline` owns all cross-frame
//! state for a single camera session and must see frames one at a time, in
//! arrival order.

mod session;

pub use session::{SessionCommand, SessionInput, start_session};

use crate::emergency::EmergencyDetector;
use crate::stabilizer::{Stability, TemporalStabilizer};
use crate::types::{
    ContextLabel, EmotionLabel, FrameOutput, GestureLabel, Language, SignEvent, TrackedFrame,
};
use crate::{emotion, fusion, gesture};

pub struct SignPipeline {
    stabilizer: TemporalStabilizer,
    emergency: EmergencyDetector,
    emotion: EmotionLabel,
    context: ContextLabel,
    language: Language,
}

impl SignPipeline {
    pub fn new() -> Self {
        SignPipeline {
            stabilizer: TemporalStabilizer::new(),
            emergency: EmergencyDetector::new(),
            emotion: EmotionLabel::Neutral,
            context: ContextLabel::General,
            language: Language::EnUs,
        }
    }

    /// Drives one tracked frame through the classifiers. The face runs
    /// first, so a sign confirmed in this frame fuses with this frame's
    /// emotion rather than a stale one.
    pub fn process_frame(&mut self, frame: &TrackedFrame) -> FrameOutput {
        if let Some(face) = &frame.face {
            self.emotion = emotion::classify(face);
        }

        let mut events = Vec::new();
        let mut announcement = None;

        for hand in &frame.hands {
            let raw = gesture::classify(hand);

            if self.emergency.observe(raw) {
                log::warn!("emergency latch raised");
                announcement = Some(fusion::EMERGENCY_SENTENCE);
            }

            match self.stabilizer.observe(raw) {
                Stability::Settled(label) => {
                    let sentence = fusion::fuse(label, self.context, self.emotion);
                    log::debug!(
                        "stable sign {} ({}) -> {sentence:?}",
                        label.display_name(),
                        self.emotion.display_name()
                    );
                    events.push(self.event(Some(label), Some(sentence)));
                }
                Stability::Cleared => {
                    log::debug!("stable sign cleared");
                    events.push(self.event(None, None));
                }
                Stability::Unchanged => {}
            }
        }

        FrameOutput {
            emotion: self.emotion,
            events,
            emergency_active: self.emergency.active(),
            emergency_announcement: announcement,
        }
    }

    fn event(&self, label: Option<GestureLabel>, sentence: Option<String>) -> SignEvent {
        SignEvent {
            label,
            sentence,
            emotion: self.emotion,
            emergency_active: self.emergency.active(),
            language: self.language,
        }
    }

    pub fn set_context(&mut self, context: ContextLabel) {
        self.context = context;
    }

    pub fn context(&self) -> ContextLabel {
        self.context
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn current_emotion(&self) -> EmotionLabel {
        self.emotion
    }

    pub fn emergency_active(&self) -> bool {
        self.emergency.active()
    }

    /// User dismissal of a raised emergency; the only way it clears.
    pub fn acknowledge_emergency(&mut self) {
        self.emergency.acknowledge();
    }

    /// Location-driven context switching. Returns the mode announcement for
    /// the speech consumer.
    pub fn set_location(&mut self, location: &str) -> &'static str {
        if location == "Hospital" {
            self.context = ContextLabel::Hospital;
            "Detected Location: City Hospital. Switching to Medical mode."
        } else {
            self.context = ContextLabel::General;
            "Location Normal. Switching to General mode."
        }
    }

    /// Drops all cross-frame state, as when tracking stops and restarts.
    /// Context and language are user choices and survive the reset.
    pub fn reset(&mut self) {
        self.stabilizer = TemporalStabilizer::new();
        self.emergency = EmergencyDetector::new();
        self.emotion = EmotionLabel::Neutral;
    }
}

impl Default for SignPipeline {
    fn default() -> Self {
        SignPipeline::new()
    }
}
