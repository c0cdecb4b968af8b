//! Types which aren't structures, e.g. errors.

pub mod err;
