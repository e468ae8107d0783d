//! Authorization core - roles, capabilities, and gating
//!
//! This module implements the console's RBAC model:
//! - a closed capability schema grouped by resource area
//! - a closed role enumeration with a total role -> capability registry
//! - pure query functions consumed by UI gating
//! - a route guard for navigation destinations
//! - a declarative access gate for protected content
//!
//! Every check is a synchronous pure function over the immutable registry;
//! nothing here mutates state or performs I/O.

mod capability;
mod evaluator;
mod gate;
mod registry;
mod role;
mod route_guard;

pub use capability::{Capability, ResourceArea};
pub use evaluator::{
    all_capabilities, describe_role, has_capability, has_capability_named, PolicyEvaluator,
    RegistryPolicy,
};
pub use gate::Gate;
pub use registry::{capability_set, grants, CapabilitySet};
pub use role::{Emphasis, Role, RoleDescriptor};
pub use route_guard::{can_access_route, required_capability};
