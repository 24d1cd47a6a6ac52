//! `orp-topology` — static weighted topology and path enumeration.
//!
//! # Crate layout
//!
//! | Module      | Contents                                        |
//! |-------------|-------------------------------------------------|
//! | [`network`] | `Topology` (CSR), `TopologyBuilder`             |
//! | [`paths`]   | `SimplePaths` lazy simple-path iterator         |
//! | [`loader`]  | `load_topology_csv` / `load_topology_reader`    |
//! | [`error`]   | `TopologyError`, `TopologyResult<T>`            |
//!
//! The topology is built once from static configuration, validated at build
//! time, and read-only afterwards.

pub mod error;
pub mod loader;
pub mod network;
pub mod paths;


pub use error::{TopologyError, TopologyResult};
pub use loader::{load_topology_csv, load_topology_reader};
pub use network::{Topology, TopologyBuilder};
pub use paths::SimplePaths;
