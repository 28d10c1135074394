// External services
// HTTP access to the Akesomind API and the records it returns

pub mod akesomind;
pub mod profile;

pub use akesomind::{load_profile, AkesomindApi};
pub use profile::ClientProfile;
