use serde::{Deserialize, Serialize};

/// Order lifecycle labels as the backend writes them.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OrderStatus {
    #[default]
    Pending,
    InProgress,
    Shipped,
    Delivered,
    Cancelled,
    /// Any label this client does not know, kept verbatim.
    Other(String),
}

impl OrderStatus {
    pub fn from_label(label: &str) -> Self {
        match label {
            "Pendiente" => OrderStatus::Pending,
            "En proceso" => OrderStatus::InProgress,
            "Enviado" => OrderStatus::Shipped,
            "Entregado" => OrderStatus::Delivered,
            "Cancelado" => OrderStatus::Cancelled,
            other => OrderStatus::Other(other.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            OrderStatus::Pending => "Pendiente",
            OrderStatus::InProgress => "En proceso",
            OrderStatus::Shipped => "Enviado",
            OrderStatus::Delivered => "Entregado",
            OrderStatus::Cancelled => "Cancelado",
            OrderStatus::Other(label) => label,
        }
    }

    /// Badge severity used when listing orders
    pub fn severity(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "warning",
            OrderStatus::InProgress => "info",
            OrderStatus::Shipped => "secondary",
            OrderStatus::Delivered => "success",
            OrderStatus::Cancelled => "danger",
            OrderStatus::Other(_) => "info",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_labels_round_trip() {
        for label in ["Pendiente", "En proceso", "Enviado", "Entregado", "Cancelado"] {
            assert_eq!(OrderStatus::from_label(label).label(), label);
        }
    }

    #[test]
    fn test_unknown_label_is_kept() {
        let status = OrderStatus::from_label("Devuelto");
        assert_eq!(status, OrderStatus::Other("Devuelto".to_string()));
        assert_eq!(status.label(), "Devuelto");
        assert_eq!(status.severity(), "info");
    }
}
