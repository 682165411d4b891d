mod blog;
mod envelope;
mod portfolio;
mod record;
mod relation;
pub mod slug;

pub use blog::{BlogPost, CategoryAttributes};
pub use envelope::{Entity, Envelope, Meta, Pagination, Timestamps};
pub use portfolio::{
    CaseStudySection, CodeSnippet, ContentStatus, DemoLink, PortfolioItem, TechStackEntry,
};
pub use record::Record;
pub use relation::{MediaAttributes, MediaList, MediaRef, Relation, RelationList};
