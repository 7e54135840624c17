pub mod assembly;
pub mod classify;
pub mod convert;
