//! Integration test driver for the `tests/integration/` submodules.
//!
//! Each `mod` below maps to a file that exercises the controller against
//! mock adapters.  No view layer or vehicle bus is required.

mod backend_tests;
mod controller_tests;
mod mock_host;
