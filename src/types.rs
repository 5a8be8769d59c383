use std::str::FromStr;

use thiserror::Error;

/// One tracked keypoint in normalized image coordinates: x/y typically in
/// `[0, 1]` with y growing downward, z in a small signed range.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Point3 {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Point3 { x, y, z }
    }
}

/// One video frame's worth of tracker output: zero or more hands (21 points
/// each) and at most one face mesh (≥ 468 points). Transient, rebuilt every
/// frame by the external tracker.
#[derive(Clone, Debug, Default)]
pub struct TrackedFrame {
    pub hands: Vec<Vec<Point3>>,
    pub face: Option<Vec<Point3>>,
}

/// Signs the pipeline can voice. The geometric classifier detects the first
/// eight; the remaining signs are spoken only through the context phrase
/// tables and emotion overrides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GestureLabel {
    Hello,
    Victory,
    Good,
    Love,
    Look,
    Help,
    Call,
    Thanks,
    Pain,
    Water,
    Yes,
    No,
}

impl GestureLabel {
    pub fn display_name(&self) -> &'static str {
        match self {
            GestureLabel::Hello => "Hello",
            GestureLabel::Victory => "Victory",
            GestureLabel::Good => "Good",
            GestureLabel::Love => "Love",
            GestureLabel::Look => "Look",
            GestureLabel::Help => "Help",
            GestureLabel::Call => "Call",
            GestureLabel::Thanks => "Thanks",
            GestureLabel::Pain => "Pain",
            GestureLabel::Water => "Water",
            GestureLabel::Yes => "Yes",
            GestureLabel::No => "No",
        }
    }
}

/// Facial expression reduced to the three states that change phrasing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EmotionLabel {
    #[default]
    Neutral,
    Happy,
    Urgent,
}

impl EmotionLabel {
    pub fn display_name(&self) -> &'static str {
        match self {
            EmotionLabel::Neutral => "Neutral",
            EmotionLabel::Happy => "Happy",
            EmotionLabel::Urgent => "Urgent",
        }
    }
}

/// Situational profile selected by the user; picks the phrase table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ContextLabel {
    #[default]
    General,
    Hospital,
    Class,
    Shop,
}

impl ContextLabel {
    pub fn display_name(&self) -> &'static str {
        match self {
            ContextLabel::General => "General",
            ContextLabel::Hospital => "Hospital",
            ContextLabel::Class => "Class",
            ContextLabel::Shop => "Shop",
        }
    }

    /// Lenient resolution for UI-supplied names: anything unrecognized falls
    /// back to `General`.
    pub fn from_ui(name: &str) -> Self {
        name.parse().unwrap_or(ContextLabel::General)
    }
}

impl FromStr for ContextLabel {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "General" => Ok(ContextLabel::General),
            "Hospital" => Ok(ContextLabel::Hospital),
            "Class" => Ok(ContextLabel::Class),
            "Shop" => Ok(ContextLabel::Shop),
            other => Err(UnknownLabel(other.to_string())),
        }
    }
}

/// Speech-synthesis language selected by the user. Carried through to the
/// downstream voice; never influences classification.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    EnUs,
    HiIn,
    EsEs,
}

impl Language {
    /// BCP 47 tag the speech consumer hands to its voice picker.
    pub fn tag(&self) -> &'static str {
        match self {
            Language::EnUs => "en-US",
            Language::HiIn => "hi-IN",
            Language::EsEs => "es-ES",
        }
    }
}

impl FromStr for Language {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en-US" => Ok(Language::EnUs),
            "hi-IN" => Ok(Language::HiIn),
            "es-ES" => Ok(Language::EsEs),
            other => Err(UnknownLabel(other.to_string())),
        }
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unrecognized label {0:?}")]
pub struct UnknownLabel(pub String);

/// Emitted once per stability transition: a newly confirmed sign with its
/// spoken sentence, or a cleared sign (`label: None`) once no-match holds
/// the window.
#[derive(Clone, Debug)]
pub struct SignEvent {
    pub label: Option<GestureLabel>,
    pub sentence: Option<String>,
    pub emotion: EmotionLabel,
    pub emergency_active: bool,
    pub language: Language,
}

/// Result of driving one tracked frame through the pipeline. `emotion` is
/// refreshed every frame; `events` only carries stability transitions.
/// `emergency_announcement` is set exactly on the frame the latch rises.
#[derive(Clone, Debug)]
pub struct FrameOutput {
    pub emotion: EmotionLabel,
    pub events: Vec<SignEvent>,
    pub emergency_active: bool,
    pub emergency_announcement: Option<&'static str>,
}
