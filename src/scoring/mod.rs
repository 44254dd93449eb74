pub mod collaboration;
pub mod pipeline;
pub mod tier;

pub use collaboration::CollaborationScorer;
pub use pipeline::LeadScoringPipeline;
pub use tier::LeadTiering;
