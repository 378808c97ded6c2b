use serde::Serialize;

/// Minutes accumulated for one grouping key (subject, type, teacher or location).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupRecord {
    pub key: String,
    pub spent: f64,
    pub total: f64,
}

impl GroupRecord {
    pub fn new(key: &str, spent: f64, total: f64) -> Self {
        Self {
            key: key.to_string(),
            spent,
            total,
        }
    }
}
