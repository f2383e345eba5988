//! Enumerated AdCOM and OpenRTB codes.
//!
//! Each code is a transparent newtype over its wire integer. The object model
//! copies codes by value and never checks them against a catalogue, so values
//! outside the published lists pass through untouched. Only the handful of
//! named values callers commonly branch on are provided as constants.

use crate::{DeepCopy, OmitEmpty};
use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! codes {
    ($( $(#[$meta:meta])* $name:ident($repr:ty); )*) => {
        $(
            $(#[$meta])*
            #[derive(
                Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
            )]
            #[serde(transparent)]
            pub struct $name(pub $repr);

            impl $name {
                /// Returns the wire value.
                #[must_use]
                pub const fn get(self) -> $repr {
                    self.0
                }
            }

            impl From<$repr> for $name {
                fn from(value: $repr) -> Self {
                    Self(value)
                }
            }

            impl From<$name> for $repr {
                fn from(code: $name) -> Self {
                    code.0
                }
            }

            impl fmt::Display for $name {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, "{}", self.0)
                }
            }

            impl DeepCopy for $name {
                #[inline]
                fn deep_copy(&self) -> Self {
                    *self
                }
            }

            impl OmitEmpty for $name {
                #[inline]
                fn omit(&self) -> bool {
                    self.0 == 0
                }
            }
        )*
    };
}

codes! {
    /// Taxonomy used by a `cat`/`bcat` style list.
    CategoryTaxonomy(i64);
    /// Creative attribute to block (`battr`).
    CreativeAttribute(i64);
    /// API framework supported by the placement.
    ApiFramework(i64);
    /// Direction a banner may expand.
    ExpandableDirection(i64);
    /// Position of the placement on screen.
    PlacementPosition(i64);
    /// Media creative subtype, used for video and audio `protocols`.
    MediaCreativeSubtype(i64);
    /// Start delay in seconds, or a negative sentinel for roll position.
    StartDelay(i64);
    /// Legacy video placement subtype (`placement`).
    VideoPlacementSubtype(i64);
    /// Video placement subtype (`plcmt`).
    VideoPlcmtSubtype(i64);
    /// Linear or non-linear video.
    LinearityMode(i64);
    /// Playback initiation method.
    PlaybackMethod(i64);
    /// Event that ends playback.
    PlaybackCessationMode(i64);
    /// Content delivery method.
    DeliveryMethod(i64);
    /// Companion ad type.
    CompanionType(i64);
    /// Pod deduplication signal.
    PodDedupe(i64);
    /// Pod sequence hint.
    PodSequence(i8);
    /// Slot position within a pod.
    SlotPositionInPod(i8);
    /// Audio feed type.
    FeedType(i64);
    /// Volume normalization mode.
    VolumeNormalizationMode(i64);
    /// Source of a DOOH impression multiplier.
    MultiplierMeasurementSourceType(i64);
    /// Trigger for automatic placement refresh.
    AutoRefreshTrigger(i64);
    /// Venue taxonomy used by `venuetype`.
    VenueTaxonomy(i64);
    /// Content production quality.
    ProductionQuality(i64);
    /// Content context.
    ContentContext(i64);
    /// Media rating.
    MediaRating(i64);
    /// Device type.
    DeviceType(i64);
    /// Network connection type.
    ConnectionType(i64);
    /// How a location was determined.
    LocationType(i64);
    /// IP geolocation provider.
    LocationService(i64);
    /// Origin of structured user agent data.
    UserAgentSource(i64);
    /// Agent type for an extended identifier.
    AgentType(i64);
    /// Banner ad type to block (`btype`).
    BannerAdType(i8);
}

impl CategoryTaxonomy {
    /// IAB Tech Lab Content Category Taxonomy 1.0.
    pub const IAB_CONTENT_1_0: Self = Self(1);
    /// IAB Tech Lab Content Taxonomy 2.0.
    pub const IAB_CONTENT_2_0: Self = Self(2);
    /// IAB Tech Lab Ad Product Taxonomy 1.0.
    pub const IAB_AD_PRODUCT_1_0: Self = Self(3);
    /// IAB Tech Lab Audience Taxonomy 1.1.
    pub const IAB_AUDIENCE_1_1: Self = Self(4);
    /// IAB Tech Lab Content Taxonomy 2.1.
    pub const IAB_CONTENT_2_1: Self = Self(5);
    /// IAB Tech Lab Content Taxonomy 2.2.
    pub const IAB_CONTENT_2_2: Self = Self(6);
    /// IAB Tech Lab Content Taxonomy 3.0.
    pub const IAB_CONTENT_3_0: Self = Self(7);
}

impl LocationType {
    /// GPS or other location services on the device.
    pub const GPS: Self = Self(1);
    /// IP address lookup.
    pub const IP: Self = Self(2);
    /// Supplied by the user, e.g. a registration zip code.
    pub const USER_PROVIDED: Self = Self(3);
}

impl UserAgentSource {
    /// Source not known.
    pub const UNKNOWN: Self = Self(0);
    /// User-Agent client hints, low-entropy values only.
    pub const LOW_ENTROPY: Self = Self(1);
    /// User-Agent client hints, including high-entropy values.
    pub const HIGH_ENTROPY: Self = Self(2);
    /// Parsed from the `User-Agent` header.
    pub const USER_AGENT_PARSED: Self = Self(3);
}

impl AgentType {
    /// Identifier tied to a device or app instance.
    pub const DEVICE: Self = Self(1);
    /// Identifier tied to a browser or client.
    pub const BROWSER: Self = Self(2);
    /// Identifier tied to a person across devices.
    pub const PERSON: Self = Self(3);
}
