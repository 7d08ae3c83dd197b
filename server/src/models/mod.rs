pub mod payloads;
pub mod records;
