//! Impressions and the objects that hang off them.

use crate::macros::openrtb_object;
use crate::media::{Audio, Banner, DurFloors, Native, Video};
use bidfork_types::Extension;
use bidfork_types::codes::{AutoRefreshTrigger, MultiplierMeasurementSourceType};

openrtb_object! {
    /// 3.2.4 Imp: one ad placement being auctioned.
    ///
    /// Any combination of `banner`, `video`, `audio` and `native` may be
    /// present. Nothing here enforces that only one is populated.
    pub struct Imp {
        pub id: String,
        pub metric: Option<Vec<Metric>>,
        pub banner: Option<Banner>,
        pub video: Option<Video>,
        pub audio: Option<Audio>,
        pub native: Option<Native>,
        pub pmp: Option<Pmp>,
        pub displaymanager: String,
        pub displaymanagerver: String,
        /// 1 for interstitial or full screen.
        pub instl: i8,
        pub tagid: String,
        /// Minimum bid in CPM, in `bidfloorcur`.
        pub bidfloor: f64,
        pub bidfloorcur: String,
        pub clickbrowser: Option<i8>,
        pub secure: Option<i8>,
        pub iframebuster: Option<Vec<String>>,
        pub rwdd: i8,
        pub ssai: i8,
        /// Seconds that may elapse between auction and impression.
        pub exp: i64,
        pub qty: Option<Qty>,
        /// Timestamp of the expected impression, in milliseconds since the epoch.
        pub dt: f64,
        pub refresh: Option<Refresh>,
        pub ext: Option<Extension>,
    }
}

openrtb_object! {
    /// 3.2.5 Metric: a measurement about the impression from a vendor.
    pub struct Metric {
        pub r#type: String,
        pub value: f64,
        pub vendor: String,
        pub ext: Option<Extension>,
    }
}

openrtb_object! {
    /// 3.2.11 Pmp: private marketplace container for direct deals.
    pub struct Pmp {
        /// 0 accepts all bids, 1 restricts bidding to `deals`.
        pub private_auction: i8,
        pub deals: Option<Vec<Deal>>,
        pub ext: Option<Extension>,
    }
}

openrtb_object! {
    /// 3.2.12 Deal: one direct deal between a buyer and a seller.
    pub struct Deal {
        pub id: String,
        pub bidfloor: f64,
        pub bidfloorcur: String,
        pub at: i64,
        pub wseat: Option<Vec<String>>,
        pub wadomain: Option<Vec<String>>,
        pub guar: i8,
        pub mincpmpersec: f64,
        pub durfloors: Option<Vec<DurFloors>>,
        pub ext: Option<Extension>,
    }
}

openrtb_object! {
    /// 3.2.31 Qty: impression multiplier for DOOH placements.
    pub struct Qty {
        pub multiplier: f64,
        pub sourcetype: MultiplierMeasurementSourceType,
        pub vendor: String,
        pub ext: Option<Extension>,
    }
}

openrtb_object! {
    /// 3.2.33 Refresh: how a placement refreshes on its own.
    pub struct Refresh {
        pub refsettings: Option<Vec<RefSettings>>,
        /// Refreshes since the last page load.
        pub count: Option<i64>,
        pub ext: Option<Extension>,
    }
}

openrtb_object! {
    /// 3.2.34 RefSettings
    pub struct RefSettings {
        pub reftype: AutoRefreshTrigger,
        /// Minimum refresh interval in seconds.
        pub minint: i64,
        pub ext: Option<Extension>,
    }
}
