pub mod country;
pub mod errors;

pub use country::Country;
pub use errors::{GenError, GenResult};
