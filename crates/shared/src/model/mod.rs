mod customer;
mod order;
mod product;

pub use self::customer::Customer;
pub use self::order::{Order, OrderItem, OrderStatus};
pub use self::product::Product;
