pub mod match_recompute;

pub use match_recompute::{run_match_recompute, run_operation_match};
