/// Bitsets over tileset positions for candidate tracking
pub mod bitset;
/// Memoization of candidate sets per edge constraint
pub mod cache;
/// Uniform tile selection and seeded random sources
pub mod selection;
/// Column-major pattern fill
pub mod solver;
