use crate::content::Data;
use crate::device::Geo;
use crate::macros::openrtb_object;
use bidfork_types::Extension;
use bidfork_types::codes::AgentType;

openrtb_object! {
    /// 3.2.20 User: the human audience of the impression.
    pub struct User {
        pub id: String,
        pub buyeruid: String,
        /// Year of birth as a 4-digit integer.
        pub yob: i64,
        pub gender: String,
        pub keywords: String,
        pub kwarray: Option<Vec<String>>,
        pub customdata: String,
        /// Home base of the user, not necessarily the current location.
        pub geo: Option<Geo>,
        pub data: Option<Vec<Data>>,
        /// TCF consent string when GDPR applies.
        pub consent: String,
        pub eids: Option<Vec<Eid>>,
        pub ext: Option<Extension>,
    }
}

openrtb_object! {
    /// 3.2.27 Eid: identifiers for the user from one source.
    pub struct Eid {
        /// Top-level domain of the identity provider.
        pub source: String,
        pub uids: Option<Vec<Uid>>,
        pub ext: Option<Extension>,
    }
}

openrtb_object! {
    /// 3.2.28 Uid
    pub struct Uid {
        pub id: String,
        pub atype: AgentType,
        pub ext: Option<Extension>,
    }
}
