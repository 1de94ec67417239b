mod order;
mod product;

pub use self::order::OrderRepository;
pub use self::product::ProductRepository;
