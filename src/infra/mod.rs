pub mod filename;
pub mod frontmatter;
pub mod fs;

pub use filename::suggested_filename;
pub use frontmatter::{ParseError, ParsedNote};
pub use fs::{read_note, write_export, FsError};
