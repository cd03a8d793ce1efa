//! Pure derivation of the visible order rows: sort by status label,
//! then filter by the search string. Never mutates the source collection.

use super::model::Order;

/// Sort direction of the status column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// The fields the text search runs over: id, order code, description,
/// VIN, status code and status name. A fixed projection, not a
/// reflection pass over the wire shape.
fn search_fields(order: &Order) -> [String; 6] {
    [
        order.id.to_string(),
        order.order_code.clone(),
        order.description.clone(),
        order.vin.clone(),
        order.status.code.clone(),
        order.status.name.clone().unwrap_or_default(),
    ]
}

/// True when any searchable field contains the query, case-insensitively.
/// An empty query matches everything.
pub fn matches_search(order: &Order, query: &str) -> bool {
    let query = query.to_lowercase();
    search_fields(order)
        .iter()
        .any(|field| field.to_lowercase().contains(&query))
}

/// Derive the visible rows from the fetched collection: a stable sort of
/// a copy by status display label (`Asc` natural, `Desc` reversed, ties
/// keep their input order), then the search filter.
pub fn compose(orders: &[Order], search: &str, direction: SortDirection) -> Vec<Order> {
    let mut result: Vec<Order> = orders.to_vec();

    result.sort_by(|a, b| {
        let ord = a.display_status().cmp(&b.display_status());
        match direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });

    result
        .into_iter()
        .filter(|order| matches_search(order, search))
        .collect()
}
