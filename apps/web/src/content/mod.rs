//! Static content registry: the literal catalogs behind every page.
//!
//! Sample data stands in for a future database. Built once at startup,
//! shared read-only across requests.

pub mod catalog;
pub mod models;

pub use catalog::{Catalog, CATEGORY_LABELS};
pub use models::{
    ExperienceEntry, Project, ProjectDetail, Skill, TechnologyGroup, TechnologyNote,
};
