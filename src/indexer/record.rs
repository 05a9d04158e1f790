use serde::{Deserialize, Serialize};

/// One entry of the search index. Field order is the serialized order.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct IndexRecord {
    pub id: String,
    pub title: String,
    pub date: String,
    pub summary: String,
    pub category: Vec<String>,
    pub tags: Vec<String>,
    pub word_count: usize,
}
