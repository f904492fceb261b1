// handlers/mod.rs - route handlers grouped by resource
//
// Every mutating handler runs the same gate, in this order:
//   identity -> body fields -> path ids -> store ownership -> single-row mutation
// Reads skip identity and ownership and are scoped only by the store id in the path.
// Store routes are the exception: a store is private to its owner, so reads are gated too.

pub mod billboards;
pub mod categories;
pub mod ownership;
pub mod stores;
pub mod system;
