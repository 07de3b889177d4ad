//! Bazaar Console - presentation-layer contracts
//!
//! The cross-cutting pieces every admin screen shares: the
//! login/session flow (including the forced password change), the
//! cosmetic permission gate, the deactivate-with-reassign workflows,
//! the product browser query state and the banner image cropper.
//!
//! Everything here is a client-side mirror of server-enforced rules;
//! the backend re-validates every constraint.

pub mod browser;
pub mod cropper;
pub mod permissions;
pub mod session;
pub mod workflow;

pub use browser::{BrowseError, ProductBrowser};
pub use cropper::{CropError, CropRegion, OutputFormat, crop_to_position};
pub use permissions::PermissionSet;
pub use session::{Session, SessionState};
pub use workflow::{DeactivationOutcome, DeleteOutcome};
