// One file per group of registry endpoints, each extending `RegistryClient`

pub mod modules;
pub mod source;
pub mod stats;
pub mod versions;
