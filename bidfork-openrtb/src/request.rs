//! The bid request root.

use crate::device::Device;
use crate::imp::Imp;
use crate::macros::openrtb_object;
use crate::placement::{App, Dooh, Site};
use crate::regs::Regs;
use crate::source::Source;
use crate::user::User;
use bidfork_types::codes::CategoryTaxonomy;
use bidfork_types::{DeepCopy, Extension};
use rayon::prelude::*;

openrtb_object! {
    /// 3.2.1 BidRequest: the top-level object of an auction.
    ///
    /// Owns every other object in the request. `deep_copy` (and `clone`) on
    /// the root yields a tree that shares nothing with the original, so the
    /// two can be mutated from different threads without synchronization.
    pub struct BidRequest {
        /// Exchange-provided request ID.
        pub id: String,
        /// Impressions offered. Absent and empty are kept distinct.
        pub imp: Option<Vec<Imp>>,
        pub site: Option<Site>,
        pub app: Option<App>,
        pub dooh: Option<Dooh>,
        pub device: Option<Device>,
        pub user: Option<User>,
        /// 1 for test mode, where auctions are not billable.
        pub test: i8,
        /// Auction type: 1 first price, 2 second price plus.
        pub at: i64,
        /// Maximum time in milliseconds to submit a bid.
        pub tmax: i64,
        pub wseat: Option<Vec<String>>,
        pub bseat: Option<Vec<String>>,
        pub allimps: i8,
        pub cur: Option<Vec<String>>,
        pub wlang: Option<Vec<String>>,
        pub wlangb: Option<Vec<String>>,
        pub acat: Option<Vec<String>>,
        pub bcat: Option<Vec<String>>,
        pub cattax: CategoryTaxonomy,
        pub badv: Option<Vec<String>>,
        pub bapp: Option<Vec<String>>,
        pub source: Option<Source>,
        pub regs: Option<Regs>,
        pub ext: Option<Extension>,
    }
}

impl BidRequest {
    /// Copies the request, spreading impressions across the rayon pool.
    ///
    /// Produces exactly what [`DeepCopy::deep_copy`] produces.
    #[must_use]
    pub fn par_deep_copy(&self) -> Self {
        // Destructured without `..` so every field is listed below.
        let Self {
            id,
            imp,
            site,
            app,
            dooh,
            device,
            user,
            test,
            at,
            tmax,
            wseat,
            bseat,
            allimps,
            cur,
            wlang,
            wlangb,
            acat,
            bcat,
            cattax,
            badv,
            bapp,
            source,
            regs,
            ext,
        } = self;

        let imp = imp
            .as_ref()
            .map(|imps| imps.par_iter().map(Imp::deep_copy).collect::<Vec<_>>());

        Self {
            id: id.deep_copy(),
            imp,
            site: site.deep_copy(),
            app: app.deep_copy(),
            dooh: dooh.deep_copy(),
            device: device.deep_copy(),
            user: user.deep_copy(),
            test: *test,
            at: *at,
            tmax: *tmax,
            wseat: wseat.deep_copy(),
            bseat: bseat.deep_copy(),
            allimps: *allimps,
            cur: cur.deep_copy(),
            wlang: wlang.deep_copy(),
            wlangb: wlangb.deep_copy(),
            acat: acat.deep_copy(),
            bcat: bcat.deep_copy(),
            cattax: *cattax,
            badv: badv.deep_copy(),
            bapp: bapp.deep_copy(),
            source: source.deep_copy(),
            regs: regs.deep_copy(),
            ext: ext.deep_copy(),
        }
    }

    /// Number of impressions offered, zero when `imp` is absent.
    #[must_use]
    pub fn imp_count(&self) -> usize {
        self.imp.as_ref().map_or(0, Vec::len)
    }
}
