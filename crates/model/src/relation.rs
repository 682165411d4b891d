use crate::envelope::Entity;
use serde::{Deserialize, Serialize};

/// Single-valued relation wrapper: `{ "data": { "id": ..., "attributes": ... } | null }`.
///
/// The CMS nests every relation and media field behind this indirection, and
/// omits or nulls it when the relation is unpopulated. Defaulting happens
/// here, once, so rendering code never sees the raw shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Relation<T> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Entity<T>>,
}

impl<T> Relation<T> {
    pub fn attributes(&self) -> Option<&T> {
        self.data.as_ref().map(|entity| &entity.attributes)
    }
}

/// Multi-valued relation wrapper: `{ "data": [ ... ] }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelationList<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<Entity<T>>,
}

impl<T> Default for RelationList<T> {
    fn default() -> Self {
        Self { data: Vec::new() }
    }
}

impl<T> RelationList<T> {
    pub fn attributes(&self) -> impl Iterator<Item = &T> {
        self.data.iter().map(|entity| &entity.attributes)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaAttributes {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub alternative_text: Option<String>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

pub type MediaRef = Relation<MediaAttributes>;
pub type MediaList = RelationList<MediaAttributes>;
