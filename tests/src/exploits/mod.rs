//! # Exploit Reproductions
//!
//! Each module reproduces one defect class and asserts it stays fixed.
//!
//! | Module | Target | Defect |
//! |--------|--------|--------|
//! | `hdr_validate` | qc-13, shared-types | Empty header hashes; block accepted against a different signed header; time regression after skipping |
//! | `block_for_loop` | qc-16 | Range bounds near `i64::MIN` overflow into an unbounded loop |
//! | `sec_config` | node-runtime | Duplicate peer IPs allowed by default |
//! | `max_limit` | shared-bus | List panics instead of refusing when full |

pub mod block_for_loop;
pub mod hdr_validate;
pub mod max_limit;
pub mod sec_config;
