mod circular;

pub use circular::Circular;
