pub mod dispose;
pub mod traceability_ext;
