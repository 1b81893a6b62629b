//! Configuration section definitions.
//!
//! Each module corresponds to a section in `cdnify.toml`:
//!
//! | Module | TOML Section | Purpose                                  |
//! |--------|--------------|------------------------------------------|
//! | `cdn`  | `[cdn]`      | CDN URL and per-category rewrite toggles |
//! | `site` | `[site]`     | Site base URL for feeds and sitemaps     |

mod cdn;
mod site;

pub use cdn::CdnConfig;
pub use site::SiteConfig;
