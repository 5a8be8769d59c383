//! Context-aware sentence construction for confirmed signs.
//!
//! Each context carries a small phrase table; a confirmed sign picks one of
//! its phrasings at random so repeated signs do not sound canned, then the
//! current emotion may override or decorate the result.

use rand::seq::SliceRandom;

use crate::types::{ContextLabel, EmotionLabel, GestureLabel};

/// Spoken when the emergency latch rises, and for an urgent `Help` sign.
pub const EMERGENCY_SENTENCE: &str = "EMERGENCY! I need help immediately!";

const PAIN_SENTENCE: &str = "It hurts a lot! Please help!";
const HAPPY_HELLO: &str = "Hello! So glad to see you!";
const HAPPY_THANKS: &str = "Thank you so much!";
const HAPPY_SUFFIX: &str = " 😊";
const URGENT_SUFFIX: &str = "! HURRY!";

/// Candidate phrasings for a sign in one context. `None` when the table has
/// no entry, in which case the sign's display text stands in.
pub fn phrasings(context: ContextLabel, label: GestureLabel) -> Option<&'static [&'static str]> {
    use ContextLabel::*;
    use GestureLabel::*;

    let options: &'static [&'static str] = match (context, label) {
        (General, Hello) => &["Hello, how are you?", "Hi there!"],
        (General, Help) => &["Can you help me?", "I need assistance."],
        (General, Thanks) => &["Thank you very much.", "Thanks a lot."],
        (General, Yes) => &["Yes, that is correct.", "Sure."],
        (General, No) => &["No, thank you.", "I don't think so."],

        (Hospital, Hello) => &["Hello, Doctor.", "Hi, Nurse."],
        (Hospital, Help) => &["I need a doctor immediately.", "Please call a nurse."],
        (Hospital, Pain) => &["I am experiencing severe pain.", "It hurts right here."],
        (Hospital, Water) => &["Can I get some water, please?", "I am thirsty."],
        (Hospital, Thanks) => &["Thank you for your care.", "Thanks for helping me."],

        (Class, Hello) => &["Good morning, Teacher.", "Hi everyone."],
        (Class, Help) => &["I have a doubt.", "Can you explain this again?"],
        (Class, Yes) => &["I understand.", "Present, sir/ma'am."],
        (Class, No) => &["I didn't get that.", "I disagree."],
        (Class, Thanks) => &["Thank you for the explanation.", "Thanks, teacher."],

        (Shop, Hello) => &["Hi, do you have this item?", "Hello, I am looking for something."],
        (Shop, Help) => &["Where is the billing counter?", "Can you show me the price?"],
        (Shop, Yes) => &["I will take this.", "Yes, pack it please."],
        (Shop, No) => &["No, that's too expensive.", "I don't need a bag."],
        (Shop, Thanks) => &["Thank you.", "Keep the change."],

        _ => return None,
    };
    Some(options)
}

/// Builds the spoken sentence for a stability-confirmed sign. Never invoked
/// with raw per-frame labels.
pub fn fuse(label: GestureLabel, context: ContextLabel, emotion: EmotionLabel) -> String {
    let base = match phrasings(context, label) {
        Some(options) => options
            .choose(&mut rand::thread_rng())
            .copied()
            .unwrap_or(label.display_name())
            .to_string(),
        None => label.display_name().to_string(),
    };

    match emotion {
        EmotionLabel::Urgent => match label {
            GestureLabel::Help => EMERGENCY_SENTENCE.to_string(),
            GestureLabel::Pain => PAIN_SENTENCE.to_string(),
            _ => format!("{}{URGENT_SUFFIX}", base.to_uppercase()),
        },
        EmotionLabel::Happy => match label {
            GestureLabel::Hello => HAPPY_HELLO.to_string(),
            GestureLabel::Thanks => HAPPY_THANKS.to_string(),
            _ => format!("{base}{HAPPY_SUFFIX}"),
        },
        EmotionLabel::Neutral => base,
    }
}
