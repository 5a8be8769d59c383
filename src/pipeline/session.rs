use std::thread;

use crossbeam_channel::{Receiver, Sender};

use super::SignPipeline;
use crate::types::{ContextLabel, FrameOutput, Language, TrackedFrame};

/// Everything a running session consumes, in one stream so tracker frames
/// and UI commands keep their relative order.
#[derive(Clone, Debug)]
pub enum SessionInput {
    Frame(TrackedFrame),
    Command(SessionCommand),
}

/// UI-driven session controls.
#[derive(Clone, Debug)]
pub enum SessionCommand {
    SetContext(ContextLabel),
    SetLanguage(Language),
    SetLocation(String),
    AcknowledgeEmergency,
}

/// Spawns the session worker: one thread, one pipeline, frames processed
/// strictly in arrival order. The loop ends when the input sender hangs up.
pub fn start_session(
    input_rx: Receiver<SessionInput>,
    output_tx: Sender<FrameOutput>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || run_session_loop(input_rx, output_tx))
}

fn run_session_loop(input_rx: Receiver<SessionInput>, output_tx: Sender<FrameOutput>) {
    let mut pipeline = SignPipeline::new();
    log::info!("sign session started");

    while let Ok(input) = input_rx.recv() {
        match input {
            SessionInput::Frame(frame) => {
                let output = pipeline.process_frame(&frame);
                let noteworthy =
                    !output.events.is_empty() || output.emergency_announcement.is_some();
                // Drop if the consumer is busy, never stall the frame path.
                if output_tx.try_send(output).is_err() && noteworthy {
                    log::warn!("consumer busy, dropped a frame output carrying events");
                }
            }
            SessionInput::Command(command) => apply_command(&mut pipeline, command),
        }
    }

    log::info!("sign session ended");
}

fn apply_command(pipeline: &mut SignPipeline, command: SessionCommand) {
    match command {
        SessionCommand::SetContext(context) => {
            log::info!("context -> {}", context.display_name());
            pipeline.set_context(context);
        }
        SessionCommand::SetLanguage(language) => {
            log::info!("language -> {}", language.tag());
            pipeline.set_language(language);
        }
        SessionCommand::SetLocation(location) => {
            let announcement = pipeline.set_location(&location);
            log::info!("location {location:?}: {announcement}");
        }
        SessionCommand::AcknowledgeEmergency => {
            log::info!("emergency acknowledged");
            pipeline.acknowledge_emergency();
        }
    }
}
