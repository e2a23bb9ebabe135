//! Directory search and filtering

mod filter;

pub use filter::{
    visible_profiles, DirectoryFilter, FounderTypeFilter, LocationFilter, SortOrder, ALL,
};
