//! Domain models for the ordering session.
//!
//! Plain data records. The stores that own and mutate them live in the
//! sibling modules (`cart`, `orders`, `inbox`, `calendar`).

pub mod event;
pub mod message;
pub mod order;
pub mod product;

pub use event::CalendarEvent;
pub use message::Message;
pub use order::Order;
pub use product::{CartLine, Product};
