// Serializable views of parsed traces.

pub mod dto;
