pub mod r#trait {
    pub use super::trait_::*;
}
#[path = "trait.rs"]
mod trait_;
pub mod memory;

#[cfg(test)]
mod tests {
    mod memory_tests;
}

pub use memory::InMemoryRepository;
pub use r#trait::RecordRepository;
