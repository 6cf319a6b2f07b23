//! Identifier generation for stored records.

mod id_generator;

pub use id_generator::{IdGenerator, UuidIdGenerator};
