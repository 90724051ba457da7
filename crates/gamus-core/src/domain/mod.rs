pub mod delivery;
pub mod ids;
pub mod release;
pub mod release_type;

pub use delivery::{DeliveryConfig, ReleaseNotification};
pub use ids::MessageId;
pub use release::{ReleaseRecord, TrackRecord};
pub use release_type::ReleaseType;
