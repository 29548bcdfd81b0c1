//! Unit tests mirroring the `src/` module layout
