//! Navigation routing subsystem.
//!
//! # Data Flow
//! ```text
//! Requested path ("/admin/model/train")
//!     → table.rs (route lookup, declaration order)
//!     → resolver.rs (segment matching, nested children)
//!     → Resolution (matched chain, parent first)
//!     → load_views() invokes each view loader
//!
//! Table construction (at startup):
//!     RouteTable::builder() + Route entries
//!     → validate (duplicate names, path shapes)
//!     → Freeze as immutable RouteTable
//! ```
//!
//! # Design Decisions
//! - Table built and validated at startup, immutable at runtime
//! - First match in declaration order wins
//! - Children match relative to their parent's path
//! - View loaders run only on navigation, never at construction

pub mod resolver;
pub mod route;
pub mod table;

pub use resolver::Resolution;
pub use route::{Route, ViewHandle, ViewLoadError, ViewLoader};
pub use table::{console_routes, RouteTable, RouteTableError, ValidationError};
