pub mod order;
pub mod sort;
pub mod tick;
