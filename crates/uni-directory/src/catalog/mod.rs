mod domain;
mod normalize;
mod options;
mod source;
mod store;

pub use domain::{Institution, InstitutionType, Program};
pub use normalize::slugify;
pub use options::{FilterOptions, OptionEntry};
pub use source::{CatalogLocation, FetchError, ParseError};
pub use store::{CatalogStore, LookupError};

pub(crate) use domain::parse_priority;
pub(crate) use normalize::{capitalize_first, normalize_key};
