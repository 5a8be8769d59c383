//! Scripted demo: drives synthesized landmark frames through a session and
//! prints what the speech consumer would receive. No camera or tracker is
//! involved; the hand poses are hard-coded.

use anyhow::{Context, Result};
use crossbeam_channel::bounded;
use handspeak::{
    ContextLabel, Point3, SessionCommand, SessionInput, TrackedFrame, start_session,
};

fn main() -> Result<()> {
    env_logger::init();

    let context = match std::env::args().nth(1) {
        Some(name) => name
            .parse::<ContextLabel>()
            .with_context(|| format!("unknown context {name:?}"))?,
        None => ContextLabel::Hospital,
    };

    let (input_tx, input_rx) = bounded(8);
    let (output_tx, output_rx) = bounded(256);
    let worker = start_session(input_rx, output_tx);

    input_tx.send(SessionInput::Command(SessionCommand::SetContext(context)))?;

    // Greet, then hold a fist past the emergency hold window.
    for _ in 0..8 {
        input_tx.send(SessionInput::Frame(TrackedFrame {
            hands: vec![open_palm()],
            face: None,
        }))?;
    }
    for _ in 0..61 {
        input_tx.send(SessionInput::Frame(TrackedFrame {
            hands: vec![fist()],
            face: None,
        }))?;
    }
    drop(input_tx);

    for output in output_rx {
        for event in &output.events {
            match (&event.label, &event.sentence) {
                (Some(label), Some(sentence)) => {
                    println!(
                        "[{}] {} -> \"{sentence}\" (lang {})",
                        event.emotion.display_name(),
                        label.display_name(),
                        event.language.tag()
                    );
                }
                _ => println!("(sign cleared)"),
            }
        }
        if let Some(announcement) = output.emergency_announcement {
            println!("!!! {announcement}");
        }
    }

    if worker.join().is_err() {
        log::error!("session worker panicked");
    }
    Ok(())
}

fn p(x: f32, y: f32) -> Point3 {
    Point3::new(x, y, 0.0)
}

/// All five digits extended: reads as the `Hello` sign.
fn open_palm() -> Vec<Point3> {
    let mut points = vec![Point3::default(); 21];
    points[0] = p(0.50, 0.90);
    // Thumb, spread clear of the palm.
    points[1] = p(0.42, 0.80);
    points[2] = p(0.38, 0.74);
    points[3] = p(0.34, 0.68);
    points[4] = p(0.24, 0.70);
    for (finger, x) in [0.40, 0.50, 0.58, 0.66].into_iter().enumerate() {
        let base = 5 + finger * 4;
        points[base] = p(x, 0.55);
        points[base + 1] = p(x, 0.44);
        points[base + 2] = p(x, 0.36);
        points[base + 3] = p(x, 0.28);
    }
    points
}

/// Everything curled into the palm: reads as the `Help` sign.
fn fist() -> Vec<Point3> {
    let mut points = vec![Point3::default(); 21];
    points[0] = p(0.50, 0.90);
    // Thumb tucked against the knuckles, tip below its IP joint.
    points[1] = p(0.44, 0.78);
    points[2] = p(0.42, 0.70);
    points[3] = p(0.46, 0.56);
    points[4] = p(0.48, 0.58);
    for (finger, x) in [0.40, 0.50, 0.58, 0.66].into_iter().enumerate() {
        let base = 5 + finger * 4;
        points[base] = p(x, 0.55);
        points[base + 1] = p(x, 0.44);
        points[base + 2] = p(x, 0.52);
        points[base + 3] = p(x, 0.62);
    }
    points
}
