pub mod address;
pub mod enums;
pub mod error;
pub mod options;

pub use address::{AddressInput, CorrectedAddress, RegionPair};
pub use enums::Confidence;
pub use error::ModelError;
pub use options::ResolverOptions;
