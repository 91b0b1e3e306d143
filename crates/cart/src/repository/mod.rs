mod memory;

pub use self::memory::MemoryCartRepository;
