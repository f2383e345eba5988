//! Request provenance and the supply chain behind it.

use crate::macros::openrtb_object;
use bidfork_types::Extension;

openrtb_object! {
    /// 3.2.2 Source: the entity responsible for the final impression sale.
    pub struct Source {
        /// 1 when the exchange makes the final decision, 0 for upstream.
        pub fd: Option<i8>,
        /// Transaction ID shared by every participant in this auction.
        pub tid: String,
        pub pchain: String,
        pub schain: Option<SupplyChain>,
        pub ext: Option<Extension>,
    }
}

openrtb_object! {
    /// 3.2.25 SupplyChain: every party that resold the inventory, in order.
    pub struct SupplyChain {
        pub complete: i8,
        pub nodes: Option<Vec<SupplyChainNode>>,
        pub ver: String,
        pub ext: Option<Extension>,
    }
}

openrtb_object! {
    /// 3.2.26 SupplyChainNode
    pub struct SupplyChainNode {
        /// Canonical domain of the system the seller account lives on.
        pub asi: String,
        pub sid: String,
        pub rid: String,
        pub name: String,
        pub domain: String,
        /// 1 when this node is involved in the flow of payment.
        pub hp: Option<i8>,
        pub ext: Option<Extension>,
    }
}
