pub mod acquisition;
pub mod fund;
pub mod fund_match;
pub mod operation;

pub use acquisition::Entity as Acquisition;
pub use fund::Entity as Fund;
pub use fund_match::Entity as FundMatch;
pub use fund_match::MatchReasons;
pub use operation::Entity as Operation;
