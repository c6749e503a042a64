pub mod envelope;
pub mod module;
pub mod search;
pub mod source;
pub mod versions;
