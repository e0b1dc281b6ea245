use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "asc" => Some(Self::Asc),
            "desc" => Some(Self::Desc),
            _ => None,
        }
    }
}

impl From<SortOrder> for String {
    fn from(order: SortOrder) -> String {
        order.as_str().to_string()
    }
}

/// Columns a timeline listing can be sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum NodeSortField {
    #[default]
    Year,
    Title,
    CreatedAt,
}

impl NodeSortField {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Year => "year",
            Self::Title => "title",
            Self::CreatedAt => "created_at",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "year" => Some(Self::Year),
            "title" => Some(Self::Title),
            "created_at" => Some(Self::CreatedAt),
            _ => None,
        }
    }
}

impl From<NodeSortField> for String {
    fn from(field: NodeSortField) -> String {
        field.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_order_round_trip_names() {
        assert_eq!(SortOrder::from_str("desc"), Some(SortOrder::Desc));
        assert_eq!(SortOrder::from_str("DESC"), None);
        assert_eq!(String::from(SortOrder::Asc), "asc");
    }

    #[test]
    fn test_node_sort_field_names() {
        assert_eq!(NodeSortField::from_str("created_at"), Some(NodeSortField::CreatedAt));
        assert_eq!(NodeSortField::from_str("position"), None);
        assert_eq!(NodeSortField::default(), NodeSortField::Year);
    }
}
