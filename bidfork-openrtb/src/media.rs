//! Media descriptions offered by an impression.

use crate::macros::openrtb_object;
use bidfork_types::Extension;
use bidfork_types::codes::{
    ApiFramework, BannerAdType, CompanionType, CreativeAttribute, DeliveryMethod,
    ExpandableDirection, FeedType, LinearityMode, MediaCreativeSubtype, PlacementPosition,
    PlaybackCessationMode, PlaybackMethod, PodDedupe, PodSequence, SlotPositionInPod, StartDelay,
    VideoPlacementSubtype, VideoPlcmtSubtype, VolumeNormalizationMode,
};

openrtb_object! {
    /// 3.2.6 Banner: a display placement, also used for video and audio companions.
    pub struct Banner {
        /// Permitted sizes, in order of preference.
        pub format: Option<Vec<Format>>,
        /// Exact width in device-independent pixels.
        pub w: Option<i64>,
        /// Exact height in device-independent pixels.
        pub h: Option<i64>,
        pub wmax: i64,
        pub hmax: i64,
        pub wmin: i64,
        pub hmin: i64,
        pub btype: Option<Vec<BannerAdType>>,
        pub battr: Option<Vec<CreativeAttribute>>,
        pub pos: Option<PlacementPosition>,
        pub mimes: Option<Vec<String>>,
        /// 1 when delivered in the top frame, 0 when in an iframe.
        pub topframe: i8,
        pub expdir: Option<Vec<ExpandableDirection>>,
        pub api: Option<Vec<ApiFramework>>,
        /// Unique identifier, used to tie companions to their video.
        pub id: String,
        /// Companion render mode: 0 concurrent, 1 end card.
        pub vcm: Option<i8>,
        pub ext: Option<Extension>,
    }
}

openrtb_object! {
    /// 3.2.10 Format: one allowed banner size, absolute or as a ratio.
    pub struct Format {
        pub w: i64,
        pub h: i64,
        pub wratio: i64,
        pub hratio: i64,
        pub wmin: i64,
        pub ext: Option<Extension>,
    }
}

openrtb_object! {
    /// 3.2.7 Video: an in-stream or out-stream video placement.
    pub struct Video {
        pub mimes: Option<Vec<String>>,
        pub minduration: i64,
        pub maxduration: i64,
        pub startdelay: Option<StartDelay>,
        pub maxseq: i64,
        pub poddur: i64,
        pub protocols: Option<Vec<MediaCreativeSubtype>>,
        /// Deprecated in favor of `protocols`.
        pub protocol: MediaCreativeSubtype,
        pub w: Option<i64>,
        pub h: Option<i64>,
        pub podid: String,
        pub podseq: PodSequence,
        pub rqddurs: Option<Vec<i64>>,
        /// Deprecated in favor of `plcmt`.
        pub placement: VideoPlacementSubtype,
        pub plcmt: VideoPlcmtSubtype,
        pub linearity: LinearityMode,
        pub skip: Option<i8>,
        pub skipmin: i64,
        pub skipafter: i64,
        /// Deprecated in favor of `slotinpod`.
        pub sequence: i8,
        pub slotinpod: SlotPositionInPod,
        pub mincpmpersec: f64,
        pub battr: Option<Vec<CreativeAttribute>>,
        pub maxextended: i64,
        pub minbitrate: i64,
        pub maxbitrate: i64,
        pub boxingallowed: Option<i8>,
        pub playbackmethod: Option<Vec<PlaybackMethod>>,
        pub playbackend: PlaybackCessationMode,
        pub delivery: Option<Vec<DeliveryMethod>>,
        pub pos: Option<PlacementPosition>,
        pub companionad: Option<Vec<Banner>>,
        pub api: Option<Vec<ApiFramework>>,
        pub companiontype: Option<Vec<CompanionType>>,
        pub poddedupe: Option<Vec<PodDedupe>>,
        pub durfloors: Option<Vec<DurFloors>>,
        pub ext: Option<Extension>,
    }
}

openrtb_object! {
    /// 3.2.8 Audio: an audio placement, including stitched streams.
    pub struct Audio {
        pub mimes: Option<Vec<String>>,
        pub minduration: i64,
        pub maxduration: i64,
        pub poddur: i64,
        pub protocols: Option<Vec<MediaCreativeSubtype>>,
        pub startdelay: Option<StartDelay>,
        pub rqddurs: Option<Vec<i64>>,
        pub podid: String,
        pub podseq: PodSequence,
        /// Deprecated in favor of `slotinpod`.
        pub sequence: i8,
        pub slotinpod: SlotPositionInPod,
        pub mincpmpersec: f64,
        pub battr: Option<Vec<CreativeAttribute>>,
        pub maxextended: i64,
        pub minbitrate: i64,
        pub maxbitrate: i64,
        pub delivery: Option<Vec<DeliveryMethod>>,
        pub companionad: Option<Vec<Banner>>,
        pub api: Option<Vec<ApiFramework>>,
        pub companiontype: Option<Vec<CompanionType>>,
        pub maxseq: i64,
        pub feed: FeedType,
        pub stitched: Option<i8>,
        pub nvol: Option<VolumeNormalizationMode>,
        pub durfloors: Option<Vec<DurFloors>>,
        pub ext: Option<Extension>,
    }
}

openrtb_object! {
    /// 3.2.9 Native: a native placement. `request` is the Native Ad Specification
    /// payload as a string and is carried as-is.
    pub struct Native {
        pub request: String,
        pub ver: String,
        pub api: Option<Vec<ApiFramework>>,
        pub battr: Option<Vec<CreativeAttribute>>,
        pub ext: Option<Extension>,
    }
}

openrtb_object! {
    /// 3.2.35 DurFloors: a floor applying to creatives within a duration range.
    pub struct DurFloors {
        pub mindur: i64,
        pub maxdur: i64,
        pub bidfloor: f64,
        pub ext: Option<Extension>,
    }
}
