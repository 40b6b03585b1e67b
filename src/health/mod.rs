//! Liveness endpoint payload.
//!
//! `/health` reports that the process is serving requests. It does not probe
//! the database: a liveness failure restarts the container, and an
//! unreachable database is not fixed by a restart.
//!
//! # Kubernetes Integration
//!
//! ```yaml
//! livenessProbe:
//!   httpGet:
//!     path: /health
//!     port: 80
//!   initialDelaySeconds: 5
//!   periodSeconds: 10
//! ```

mod status;

pub use status::HealthStatus;
