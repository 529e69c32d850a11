// Content model: region schema plus the site's frozen section list.

pub mod model;
pub mod sections;

pub use model::{ContentRegion, ContentSection};
pub use sections::site_sections;
