//! Semantic version parsing and minimum-version gating.
//!
//! # Example
//!
//! ```
//! use xtool::version::{RequiredVersion, VersionGate};
//!
//! let gate = VersionGate::new().unwrap();
//! let v = gate
//!     .check_version("12.0.1", RequiredVersion::new(12, 0, 0), "clang-format")
//!     .unwrap();
//! assert_eq!(v.triple(), (12, 0, 1));
//! ```

pub mod gate;
pub mod semver;

pub use gate::VersionGate;
pub use semver::{RequiredVersion, Version};
