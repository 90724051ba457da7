pub mod io;
pub mod json_source;
pub mod xml_sink;

pub use io::{FsError, atomic_write_str};
pub use json_source::JsonReleaseSource;
pub use xml_sink::XmlFileSink;
