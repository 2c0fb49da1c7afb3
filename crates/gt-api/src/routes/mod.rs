//! # Route Modules
//!
//! | Module | Prefix |
//! |--------|--------|
//! | [`content`] | `/v1/partners`, `/v1/truck-types`, `/v1/careers`, `/v1/services`, `/v1/navigation` |
//! | [`states`] | `/v1/states` |
//! | [`areas`] | `/areas-we-serve` |
//! | [`forms`] | `/v1/forms` |

pub mod areas;
pub mod content;
pub mod forms;
pub mod states;
