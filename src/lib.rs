//! Core pipeline of a sign-to-speech bridge: consumes hand and face
//! keypoints from an external tracker and produces stabilized, context- and
//! emotion-aware sentences for a downstream voice, including a sustained
//! emergency escalation path.
//!
//! Per frame, hands run through geometric sign classification, a
//! supermajority debounce and the emergency latch, while the face feeds the
//! emotion heuristics; confirmed signs are fused with the active context
//! and current emotion into a spoken sentence. Camera capture, landmark
//! tracking, rendering and speech synthesis all live outside this crate.

pub mod emergency;
pub mod emotion;
pub mod fusion;
pub mod geometry;
pub mod gesture;
pub mod pipeline;
pub mod stabilizer;
pub mod types;

#[cfg(test)]
pub(crate) mod testutil;

pub use pipeline::{SessionCommand, SessionInput, SignPipeline, start_session};
pub use types::{
    ContextLabel, EmotionLabel, FrameOutput, GestureLabel, Language, Point3, SignEvent,
    TrackedFrame,
};
