//! Frontier containers used by the searches

pub mod priority_queue;
pub mod set_queue;

pub use self::priority_queue::PriorityQueue;
pub use self::set_queue::SetQueue;
