pub mod use_client_profile;

pub use use_client_profile::use_client_profile;
