pub mod client;
pub mod grouping;
pub mod pipeline;
pub mod result;

pub use client::{TranscriberClient, UploadRequest};
pub use grouping::{group_by_speaker, SpeakerTurn};
pub use pipeline::{ActiveResult, Completion, Pipeline};
pub use result::{Segment, TranscriptionResult};
