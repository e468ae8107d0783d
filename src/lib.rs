pub mod authz;
pub mod errors;
pub mod nav;
pub mod session;

// Re-export commonly used items for tests
pub use authz::{
    all_capabilities, can_access_route, describe_role, has_capability, has_capability_named,
    Capability, CapabilitySet, Gate, Role,
};
pub use errors::{AccessError, AccessResult};
pub use session::{FileStore, MemoryStore, Session, SessionManager, SessionStore};
