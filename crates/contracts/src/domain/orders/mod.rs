pub mod model;
pub mod view;

pub use model::{Order, OrderStatus, OrdersPage, OrdersQuery, StatusInfo};
pub use view::{compose, matches_search, SortDirection};
