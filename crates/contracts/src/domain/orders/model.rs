use serde::{Deserialize, Serialize};

/// Shipment lifecycle states known to this client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    Sklad,
    Onway,
    Comed,
    Finished,
}

impl OrderStatus {
    /// Wire code of the status, as used in transition endpoints.
    pub fn code(&self) -> &'static str {
        match self {
            OrderStatus::Sklad => "sklad",
            OrderStatus::Onway => "onway",
            OrderStatus::Comed => "comed",
            OrderStatus::Finished => "finished",
        }
    }

    /// Human-readable label shown in the orders table.
    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::Sklad => "In warehouse",
            OrderStatus::Onway => "In transit",
            OrderStatus::Comed => "Arrived",
            OrderStatus::Finished => "Completed",
        }
    }

    /// All lifecycle states, in shipment order.
    pub fn all() -> Vec<OrderStatus> {
        vec![
            OrderStatus::Sklad,
            OrderStatus::Onway,
            OrderStatus::Comed,
            OrderStatus::Finished,
        ]
    }

    /// Parse a wire code. Codes outside the enumeration yield `None`.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "sklad" => Some(OrderStatus::Sklad),
            "onway" => Some(OrderStatus::Onway),
            "comed" => Some(OrderStatus::Comed),
            "finished" => Some(OrderStatus::Finished),
            _ => None,
        }
    }
}

impl ToString for OrderStatus {
    fn to_string(&self) -> String {
        self.code().to_string()
    }
}

/// Status value as served by the backend: a code plus an optional
/// human label used as fallback for codes this client does not know.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StatusInfo {
    #[serde(default)]
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl StatusInfo {
    /// Display label: the fixed mapping for known codes, the
    /// backend-supplied name otherwise, blank when both are missing.
    pub fn display_label(&self) -> String {
        match OrderStatus::from_code(&self.code) {
            Some(status) => status.display_name().to_string(),
            None => self.name.clone().unwrap_or_default(),
        }
    }
}

/// Shipment order as served by the orders query endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    pub id: i64,

    #[serde(rename = "orderCode")]
    pub order_code: String,

    pub description: String,
    pub vin: String,

    #[serde(default)]
    pub status: StatusInfo,
}

impl Order {
    /// Status label shown in the table; also the sort key.
    pub fn display_status(&self) -> String {
        self.status.display_label()
    }
}

/// Page request for the orders query endpoint.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct OrdersQuery {
    pub page: u32,
    pub size: u32,
}

impl OrdersQuery {
    /// The admin view always requests the first hundred orders.
    pub fn first_page() -> Self {
        Self { page: 0, size: 100 }
    }
}

/// Paged envelope of the orders query endpoint. Only the page content
/// is consumed; the rest of the envelope is ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrdersPage {
    pub content: Vec<Order>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes_round_trip() {
        for status in OrderStatus::all() {
            assert_eq!(OrderStatus::from_code(status.code()), Some(status));
        }
    }

    #[test]
    fn test_status_display_names() {
        assert_eq!(OrderStatus::Sklad.display_name(), "In warehouse");
        assert_eq!(OrderStatus::Onway.display_name(), "In transit");
        assert_eq!(OrderStatus::Comed.display_name(), "Arrived");
        assert_eq!(OrderStatus::Finished.display_name(), "Completed");
    }

    #[test]
    fn test_unknown_code_is_rejected() {
        assert_eq!(OrderStatus::from_code(""), None);
        assert_eq!(OrderStatus::from_code("lost"), None);
        assert_eq!(OrderStatus::from_code("SKLAD"), None);
    }

    #[test]
    fn test_display_label_falls_back_to_name() {
        let known = StatusInfo {
            code: "onway".to_string(),
            name: Some("backend label".to_string()),
        };
        assert_eq!(known.display_label(), "In transit");

        let unknown = StatusInfo {
            code: "lost".to_string(),
            name: Some("Lost in transit".to_string()),
        };
        assert_eq!(unknown.display_label(), "Lost in transit");

        let blank = StatusInfo {
            code: "lost".to_string(),
            name: None,
        };
        assert_eq!(blank.display_label(), "");
    }

    #[test]
    fn test_order_wire_shape() {
        let json = r#"{
            "id": 7,
            "orderCode": "ORD-007",
            "description": "Engine parts",
            "vin": "WDB9634031L912345",
            "status": { "code": "comed", "name": "Arrived" }
        }"#;

        let order: Order = serde_json::from_str(json).expect("order should parse");
        assert_eq!(order.id, 7);
        assert_eq!(order.order_code, "ORD-007");
        assert_eq!(order.status.code, "comed");
        assert_eq!(order.display_status(), "Arrived");
    }

    #[test]
    fn test_order_parses_without_status() {
        let json = r#"{
            "id": 1,
            "orderCode": "ORD-001",
            "description": "",
            "vin": ""
        }"#;

        let order: Order = serde_json::from_str(json).expect("order should parse");
        assert_eq!(order.status, StatusInfo::default());
        assert_eq!(order.display_status(), "");
    }

    #[test]
    fn test_first_page_body() {
        let body = serde_json::to_value(OrdersQuery::first_page()).unwrap();
        assert_eq!(body, serde_json::json!({ "page": 0, "size": 100 }));
    }

    #[test]
    fn test_page_envelope_ignores_extra_fields() {
        let json = r#"{
            "content": [],
            "totalElements": 0,
            "totalPages": 0,
            "number": 0
        }"#;

        let page: OrdersPage = serde_json::from_str(json).expect("page should parse");
        assert!(page.content.is_empty());
    }
}
