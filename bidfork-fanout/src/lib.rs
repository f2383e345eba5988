//! Per-participant snapshots of an OpenRTB bid request.
//!
//! An exchange forwards the same request to many bidders and lets each one's
//! adapter rewrite its copy. [`Fanout`] produces those copies with
//! [`DeepCopy`](bidfork_openrtb::DeepCopy), so no edit made for one
//! participant can reach another participant or the source request.
//!
//! # Example
//!
//! ```
//! use bidfork_fanout::{Fanout, FanoutConfig};
//! use bidfork_openrtb::BidRequest;
//!
//! let request = BidRequest {
//!     id: "req-1".to_string(),
//!     ..Default::default()
//! };
//! let fanout = Fanout::new(FanoutConfig::default());
//! let snapshots = fanout
//!     .fork_with(&request, &["alpha", "beta"], |bidder, copy| {
//!         copy.id = format!("{}-{bidder}", copy.id);
//!     })
//!     .unwrap();
//!
//! assert_eq!(snapshots[1].request.id, "req-1-beta");
//! assert_eq!(request.id, "req-1");
//! ```

mod config;
mod engine;
mod error;

pub use config::FanoutConfig;
pub use engine::{Fanout, Snapshot};
pub use error::{FanoutError, FanoutResult};
