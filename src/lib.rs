pub mod cli;
pub mod manifest;
pub mod profile;

pub use profile::PublishProfile;
