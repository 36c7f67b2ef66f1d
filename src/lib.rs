// Library surface so integration tests can drive drills and sessions
// headlessly. Keep this lean to avoid coupling to bin-only types in main.rs.
pub mod clock;
pub mod config;
pub mod digits;
pub mod drill;
pub mod numeral;
pub mod script;
pub mod session;
pub mod speech;
pub mod stats;
