//! Content metadata and the data segments attached to it.

use crate::macros::openrtb_object;
use bidfork_types::Extension;
use bidfork_types::codes::{CategoryTaxonomy, ContentContext, MediaRating, ProductionQuality};

openrtb_object! {
    /// 3.2.16 Content: the content in which the impression appears.
    pub struct Content {
        pub id: String,
        pub episode: i64,
        pub title: String,
        pub series: String,
        pub season: String,
        pub artist: String,
        pub genre: String,
        pub album: String,
        /// International Standard Recording Code.
        pub isrc: String,
        pub producer: Option<Producer>,
        pub url: String,
        pub cattax: CategoryTaxonomy,
        pub cat: Option<Vec<String>>,
        pub prodq: Option<ProductionQuality>,
        /// Deprecated in favor of `prodq`.
        pub videoquality: Option<ProductionQuality>,
        pub context: ContentContext,
        pub contentrating: String,
        pub userrating: String,
        pub qagmediarating: MediaRating,
        pub keywords: String,
        pub kwarray: Option<Vec<String>>,
        pub livestream: Option<i8>,
        pub sourcerelationship: Option<i8>,
        /// Length in seconds.
        pub len: i64,
        pub language: String,
        pub langb: String,
        pub embeddable: Option<i8>,
        pub data: Option<Vec<Data>>,
        pub network: Option<Network>,
        pub channel: Option<Channel>,
        pub ext: Option<Extension>,
    }
}

openrtb_object! {
    /// 3.2.17 Producer
    pub struct Producer {
        pub id: String,
        pub name: String,
        pub cattax: CategoryTaxonomy,
        pub cat: Option<Vec<String>>,
        pub domain: String,
        pub ext: Option<Extension>,
    }
}

openrtb_object! {
    /// 3.2.23 Network: the parent entity of a channel, e.g. a broadcaster.
    pub struct Network {
        pub id: String,
        pub name: String,
        pub domain: String,
        pub ext: Option<Extension>,
    }
}

openrtb_object! {
    /// 3.2.24 Channel: a single stream or station within a network.
    pub struct Channel {
        pub id: String,
        pub name: String,
        pub domain: String,
        pub ext: Option<Extension>,
    }
}

openrtb_object! {
    /// 3.2.21 Data: audience data from one provider.
    pub struct Data {
        pub id: String,
        pub name: String,
        pub segment: Option<Vec<Segment>>,
        pub ext: Option<Extension>,
    }
}

openrtb_object! {
    /// 3.2.22 Segment
    pub struct Segment {
        pub id: String,
        pub name: String,
        pub value: String,
        pub ext: Option<Extension>,
    }
}
