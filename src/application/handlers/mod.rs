//! Application handlers - use-case orchestration over ports.

pub mod assessment;
