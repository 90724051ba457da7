pub mod document_sink;
pub mod notification;
pub mod release_source;

pub use document_sink::{DocumentSink, SinkError};
pub use notification::NotificationGenerator;
pub use release_source::{ReleaseSource, SourceError};
