//! Property-based tests for the query compiler
//!
//! Property tests verify invariants that should hold for all inputs, rather
//! than testing specific cases.
//!
//! ## Running Property Tests
//!
//! ```sh
//! cargo test property --release
//! ```
//!
//! ## Test Modules
//!
//! - `query_compiler_props`: Tests for the query compiler
//!   - Same configuration compiles to the same query
//!   - Escaped text matches itself literally
//!   - Proximity distances are always clamped into range
//!   - Complexity scores stay within 0-100
//!   - Blank input is always rejected
//!
//! ## Configuration
//!
//! By default, proptest runs 256 cases per property. This can be configured
//! via the `PROPTEST_CASES` environment variable:
//!
//! ```sh
//! PROPTEST_CASES=1000 cargo test property --release
//! ```

mod query_compiler_props;
