mod driver;
mod feed;
mod source;

pub use driver::FeedDriver;
pub use feed::{Feed, FeedPhase, FetchTicket};
pub use source::{CollectionSource, ContentSource};
