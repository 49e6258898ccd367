//! Ports - async trait boundaries toward external collaborators.
//!
//! Adapters implement these traits; application handlers depend only on
//! them. The scoring and aggregation core stays a pure function of the
//! snapshots these ports return.

mod ai_provider;
mod axis_meta_reader;
mod deep_dive_store;
mod detail_answer_store;
mod owner_note_store;
mod score_snapshot_writer;
mod token_verifier;

pub use ai_provider::{AiError, AiProvider, CompletionRequest, Message, MessageRole};
pub use axis_meta_reader::AxisMetaReader;
pub use deep_dive_store::{CardProgress, DeepDiveStore, DeepDiveStoreError};
pub use detail_answer_store::{AnswerStoreError, DetailAnswerStore};
pub use owner_note_store::{NoteStoreError, OwnerNoteStore};
pub use score_snapshot_writer::{ScoreSnapshotWriter, SnapshotError};
pub use token_verifier::TokenVerifier;
