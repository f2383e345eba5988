//! The device and its location.

use crate::macros::openrtb_object;
use bidfork_types::Extension;
use bidfork_types::codes::{
    ConnectionType, DeviceType, LocationService, LocationType, UserAgentSource,
};

openrtb_object! {
    /// 3.2.18 Device: the hardware the impression will be shown on.
    pub struct Device {
        /// Location of the device, assumed to be the user's current location.
        pub geo: Option<Geo>,
        /// Do Not Track flag from the browser.
        pub dnt: Option<i8>,
        /// Limit Ad Tracking flag from the operating system.
        pub lmt: Option<i8>,
        pub ua: String,
        /// Structured user agent, preferred over `ua` when both are present.
        pub sua: Option<UserAgent>,
        pub ip: String,
        pub ipv6: String,
        pub devicetype: DeviceType,
        pub make: String,
        pub model: String,
        pub os: String,
        pub osv: String,
        pub hwv: String,
        pub h: i64,
        pub w: i64,
        pub ppi: i64,
        pub pxratio: f64,
        pub js: Option<i8>,
        pub geofetch: Option<i8>,
        pub flashver: String,
        pub language: String,
        pub langb: String,
        pub carrier: String,
        pub mccmnc: String,
        pub connectiontype: Option<ConnectionType>,
        /// Advertising ID in the clear.
        pub ifa: String,
        pub didsha1: String,
        pub didmd5: String,
        pub dpidsha1: String,
        pub dpidmd5: String,
        pub macsha1: String,
        pub macmd5: String,
        pub ext: Option<Extension>,
    }
}

openrtb_object! {
    /// 3.2.19 Geo: a location, from GPS, IP lookup or user registration.
    pub struct Geo {
        /// Latitude from -90.0 to +90.0, negative is south.
        pub lat: Option<f64>,
        /// Longitude from -180.0 to +180.0, negative is west.
        pub lon: Option<f64>,
        pub r#type: LocationType,
        /// Estimated accuracy in meters.
        pub accuracy: i64,
        pub lastfix: i64,
        pub ipservice: LocationService,
        pub country: String,
        pub region: String,
        pub regionfips104: String,
        pub metro: String,
        pub city: String,
        pub zip: String,
        /// Offset from UTC in minutes.
        pub utcoffset: i64,
        pub ext: Option<Extension>,
    }
}

openrtb_object! {
    /// 3.2.29 UserAgent: structured user agent, typically from client hints.
    pub struct UserAgent {
        pub browsers: Option<Vec<BrandVersion>>,
        pub platform: Option<BrandVersion>,
        pub mobile: Option<i8>,
        pub architecture: String,
        pub bitness: String,
        pub model: String,
        pub source: UserAgentSource,
        pub ext: Option<Extension>,
    }
}

openrtb_object! {
    /// 3.2.30 BrandVersion
    pub struct BrandVersion {
        pub brand: String,
        /// Version components, most significant first.
        pub version: Option<Vec<String>>,
        pub ext: Option<Extension>,
    }
}
