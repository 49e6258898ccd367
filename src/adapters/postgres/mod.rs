//! PostgreSQL adapters.

mod axis_meta_reader;
mod deep_dive_store;
mod detail_answer_store;
mod owner_note_store;
mod score_snapshot_writer;

pub use axis_meta_reader::PostgresAxisMetaReader;
pub use deep_dive_store::PostgresDeepDiveStore;
pub use detail_answer_store::PostgresDetailAnswerStore;
pub use owner_note_store::PostgresOwnerNoteStore;
pub use score_snapshot_writer::PostgresScoreSnapshotWriter;
