//! Distribution channels: where the impression will be shown.
//!
//! A request names at most one of [`Site`], [`App`] or [`Dooh`], though the
//! model keeps whatever the producer populated.

use crate::content::Content;
use crate::macros::openrtb_object;
use bidfork_types::Extension;
use bidfork_types::codes::{CategoryTaxonomy, VenueTaxonomy};

openrtb_object! {
    /// 3.2.13 Site: a website carrying the impression.
    pub struct Site {
        pub id: String,
        pub name: String,
        pub domain: String,
        pub cattax: CategoryTaxonomy,
        pub cat: Option<Vec<String>>,
        pub sectioncat: Option<Vec<String>>,
        pub pagecat: Option<Vec<String>>,
        pub page: String,
        /// Referrer URL that led to the page.
        pub r#ref: String,
        pub search: String,
        /// 1 when the layout is optimized for mobile devices.
        pub mobile: Option<i8>,
        pub privacypolicy: Option<i8>,
        pub publisher: Option<Publisher>,
        pub content: Option<Content>,
        pub keywords: String,
        pub kwarray: Option<Vec<String>>,
        pub inventorypartnerdomain: String,
        pub ext: Option<Extension>,
    }
}

openrtb_object! {
    /// 3.2.14 App: a non-browser application carrying the impression.
    pub struct App {
        pub id: String,
        pub name: String,
        /// Store-specific identifier, e.g. a package name or numeric store ID.
        pub bundle: String,
        pub domain: String,
        pub storeurl: String,
        pub cattax: CategoryTaxonomy,
        pub cat: Option<Vec<String>>,
        pub sectioncat: Option<Vec<String>>,
        pub pagecat: Option<Vec<String>>,
        pub ver: String,
        pub privacypolicy: Option<i8>,
        /// 0 for a free app, 1 for a paid one.
        pub paid: Option<i8>,
        pub publisher: Option<Publisher>,
        pub content: Option<Content>,
        pub keywords: String,
        pub kwarray: Option<Vec<String>>,
        pub inventorypartnerdomain: String,
        pub ext: Option<Extension>,
    }
}

openrtb_object! {
    /// 3.2.23 Dooh: a digital out-of-home screen.
    pub struct Dooh {
        pub id: String,
        pub name: String,
        pub venuetype: Option<Vec<String>>,
        pub venuetypetax: Option<VenueTaxonomy>,
        pub publisher: Option<Publisher>,
        pub domain: String,
        pub keywords: String,
        pub content: Option<Content>,
        pub ext: Option<Extension>,
    }
}

openrtb_object! {
    /// 3.2.15 Publisher
    pub struct Publisher {
        pub id: String,
        pub name: String,
        pub cattax: CategoryTaxonomy,
        pub cat: Option<Vec<String>>,
        pub domain: String,
        pub ext: Option<Extension>,
    }
}
