use contracts::domain::orders::{compose, Order, SortDirection};
use leptos::prelude::*;

#[derive(Clone, Debug, Default)]
pub struct OrdersListState {
    pub orders: Vec<Order>,
    pub search: String,
    pub direction: SortDirection,
    pub is_loaded: bool,
}

impl OrdersListState {
    /// A successful fetch replaces the whole collection; nothing is merged.
    pub fn replace_orders(&mut self, orders: Vec<Order>) {
        self.orders = orders;
        self.is_loaded = true;
    }

    /// Flip the status column between ascending and descending.
    /// The search text is left untouched.
    pub fn toggle_sort(&mut self) {
        self.direction = self.direction.toggled();
    }

    /// Rows currently visible: sorted and filtered copy of the collection.
    pub fn visible_orders(&self) -> Vec<Order> {
        compose(&self.orders, &self.search, self.direction)
    }
}

/// Create state signal
pub fn create_state() -> RwSignal<OrdersListState> {
    RwSignal::new(OrdersListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::orders::StatusInfo;

    fn order(id: i64, status_code: &str) -> Order {
        Order {
            id,
            order_code: format!("ORD-{:03}", id),
            description: String::new(),
            vin: String::new(),
            status: StatusInfo {
                code: status_code.to_string(),
                name: None,
            },
        }
    }

    #[test]
    fn test_fetch_replaces_collection() {
        let mut state = OrdersListState::default();
        assert!(!state.is_loaded);

        state.replace_orders(vec![order(1, "sklad"), order(2, "onway")]);
        assert_eq!(state.orders.len(), 2);
        assert!(state.is_loaded);

        // A later fetch leaves no residue of the previous collection.
        state.replace_orders(vec![order(3, "comed")]);
        let ids: Vec<i64> = state.orders.iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![3]);
    }

    #[test]
    fn test_toggle_sort_flips_direction_only() {
        let mut state = OrdersListState {
            search: "vin".to_string(),
            ..Default::default()
        };
        assert_eq!(state.direction, SortDirection::Asc);

        state.toggle_sort();
        assert_eq!(state.direction, SortDirection::Desc);
        assert_eq!(state.search, "vin");

        state.toggle_sort();
        assert_eq!(state.direction, SortDirection::Asc);
    }

    #[test]
    fn test_visible_orders_derive_without_mutation() {
        let mut state = OrdersListState::default();
        state.replace_orders(vec![order(1, "onway"), order(2, "sklad")]);

        // "In transit" sorts before "In warehouse".
        let visible: Vec<i64> = state.visible_orders().iter().map(|o| o.id).collect();
        assert_eq!(visible, vec![1, 2]);

        // The source collection keeps its fetch order.
        let raw: Vec<i64> = state.orders.iter().map(|o| o.id).collect();
        assert_eq!(raw, vec![1, 2]);

        state.search = "2".to_string();
        let visible: Vec<i64> = state.visible_orders().iter().map(|o| o.id).collect();
        assert_eq!(visible, vec![2]);
    }
}
