// Export all route modules
pub mod matching;

// Re-export route handlers for easy importing
pub use matching::*;
