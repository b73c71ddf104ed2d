//! Core business logic - framework-agnostic settlement and ledger
//! operations, independent of the store client and the command surface.

/// Viewer-perspective presentation derivation
pub mod display;
/// Ledger view operations - ordering, filtering, grouping
pub mod expense;
/// The two-party settlement engine
pub mod settlement;
