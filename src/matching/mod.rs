// Fund-opportunity matching: pure scoring plus the orchestration and
// persistence around it.
pub mod engine;
pub mod repository;
pub mod score;

pub use engine::{
    run_matching, MatchRunSummary, MatchScope, ENTITY_TYPE_OPERATION, OPERATION_STATUS_ACTIVE,
};
pub use repository::{MatchRepository, NewMatch, SqlMatchRepository};
pub use score::{score_pair, ScoredPair, FUND_STATUS_SEARCHING};
