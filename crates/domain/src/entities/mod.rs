pub mod pool;
pub mod position;
pub mod token;

// Re-export for easier access
pub use pool::Pool;
pub use position::{ClosedPosition, Position, PositionId};
pub use token::PoolToken;
