//! OpenRTB 2.6 bid request object model.
//!
//! Models an inbound bid request as an owned tree rooted at [`BidRequest`]
//! and provides an aliasing-free copy of any node in it. Exchanges fan one
//! request out to many auction participants; each participant gets its own
//! copy and may mutate it without coordinating with anyone else.
//!
//! - every object implements [`DeepCopy`], and `Clone` delegates to it
//! - [`copy_opt`] maps an absent object to an absent copy
//! - [`BidRequest::par_deep_copy`] copies impressions on the rayon pool
//!
//! Enumerated codes live in [`codes`] and `ext` payloads are [`Extension`]s.
//! Neither is interpreted here.

mod macros;

mod content;
mod device;
mod imp;
mod media;
mod placement;
mod regs;
mod request;
mod source;
mod user;

pub use bidfork_types::{DeepCopy, Extension, codes, copy_ext, copy_opt, copy_scalar, copy_seq};

pub use content::{Channel, Content, Data, Network, Producer, Segment};
pub use device::{BrandVersion, Device, Geo, UserAgent};
pub use imp::{Deal, Imp, Metric, Pmp, Qty, RefSettings, Refresh};
pub use media::{Audio, Banner, DurFloors, Format, Native, Video};
pub use placement::{App, Dooh, Publisher, Site};
pub use regs::Regs;
pub use request::BidRequest;
pub use source::{Source, SupplyChain, SupplyChainNode};
pub use user::{Eid, Uid, User};
