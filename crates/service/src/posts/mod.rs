pub mod memory;
pub mod seed;
pub mod store;

pub use memory::MemoryPostStore;
pub use store::PostStore;
