use crate::macros::openrtb_object;
use bidfork_types::Extension;

openrtb_object! {
    /// 3.2.3 Regs: legal and regulatory signals in force for the request.
    pub struct Regs {
        pub coppa: i8,
        pub gdpr: Option<i8>,
        pub us_privacy: String,
        pub gpp: String,
        /// GPP section IDs that apply to this request.
        pub gpp_sid: Option<Vec<i8>>,
        pub ext: Option<Extension>,
    }
}
