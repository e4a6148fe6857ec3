//! Domain logic - pure versioning rules independent of any document format

pub mod prerelease;
pub mod release;
pub mod sequence;
pub mod version;

pub use prerelease::Prerelease;
pub use release::Release;
pub use sequence::{check_sequential_release, is_sequential_upgrade};
pub use version::SemanticVersion;
