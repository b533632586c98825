/// Voice module
///
/// Maps speech-to-text transcripts to structured actions and builds
/// spoken feedback text. Capturing audio and speaking the text back is
/// the UI layer's job.

pub mod feedback;
pub mod interpreter;

pub use feedback::{motivational_message, progress_feedback, MessageContext};
pub use interpreter::{process_voice_command, VoiceAction};
