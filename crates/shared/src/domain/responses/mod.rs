mod message;
mod order;
mod product;

pub use self::message::MessageResponse;
pub use self::order::OrderResponse;
pub use self::product::ProductResponse;
