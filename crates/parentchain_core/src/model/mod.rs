//! Parent-agnostic tree data.
//!
//! # Responsibility
//! - Define the element/text node shapes every builder writes into.
//! - Own children exclusively; no shared or back-referencing edges.
//!
//! # Invariants
//! - Every element carries a stable `NodeId` assigned at creation.
//! - Child order is append order and is never rearranged.
//! - Attribute keys are unique; a repeated key overwrites the prior value.

pub mod element;
