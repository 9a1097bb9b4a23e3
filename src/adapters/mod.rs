//! Adapters: concrete implementations of the hexagonal port traits.
//!
//! | Adapter        | Implements           | Connects to               |
//! |----------------|----------------------|---------------------------|
//! | `bus`          | VehicleBusPort       | Loopback link (counted)   |
//! | `config_store` | ConfigPort           | In-memory blob store      |
//! | `host`         | VideoPlayerPort      | Log output (demo host)    |
//! |                | NavigationHostPort   |                           |
//! | `log_sink`     | EventSink            | Log output                |

pub mod bus;
pub mod config_store;
pub mod host;
pub mod log_sink;
