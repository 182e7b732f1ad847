pub mod catalog;
pub mod constants;
pub mod equations;
pub mod infer;
pub mod solve;
pub mod validate;
