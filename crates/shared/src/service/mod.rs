mod order;
mod product;

pub use self::order::{OrderService, OrderServiceDeps};
pub use self::product::ProductService;
