mod facets;
mod filter;
mod pipeline;
mod sort;

pub use facets::{FacetSet, FilterDimension};
pub use filter::{DateRange, FilterState};
pub use pipeline::apply;
pub use sort::{sort_records, SortKey};
