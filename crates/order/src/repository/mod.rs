mod memory;

pub use self::memory::MemoryOrderRepository;
