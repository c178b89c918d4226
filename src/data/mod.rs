pub mod artifact;
pub mod context;

pub use artifact::{load_artifact, ArtifactError, ModelArtifact};
pub use context::ModelContext;
