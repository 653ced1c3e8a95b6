//! Search backend adapters.

mod firecrawl;

pub use firecrawl::FirecrawlClient;
