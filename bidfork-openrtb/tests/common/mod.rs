#![allow(dead_code)]

use bidfork_openrtb::codes::*;
use bidfork_openrtb::*;

pub fn ext(json: &str) -> Option<Extension> {
    Some(Extension::from(json))
}

pub fn strs(items: &[&str]) -> Option<Vec<String>> {
    Some(items.iter().map(|s| (*s).to_string()).collect())
}

pub fn banner() -> Banner {
    Banner {
        format: Some(vec![Format {
            w: 300,
            h: 250,
            wratio: 16,
            hratio: 9,
            wmin: 100,
            ext: ext(r#"{"format":1}"#),
        }]),
        w: Some(300),
        h: Some(250),
        wmax: 1000,
        hmax: 1000,
        btype: Some(vec![BannerAdType(1), BannerAdType(2)]),
        battr: Some(vec![CreativeAttribute(1), CreativeAttribute(2)]),
        pos: Some(PlacementPosition(1)),
        mimes: strs(&["image/jpeg", "image/png"]),
        topframe: 1,
        expdir: Some(vec![ExpandableDirection(1)]),
        api: Some(vec![ApiFramework(3), ApiFramework(5)]),
        id: "banner1".into(),
        vcm: Some(1),
        ext: ext(r#"{"k":"v"}"#),
        ..Banner::default()
    }
}

pub fn dur_floors() -> Option<Vec<DurFloors>> {
    Some(vec![
        DurFloors {
            mindur: 15,
            maxdur: 0,
            bidfloor: 2.5,
            ext: ext(r#"{"d":1}"#),
        },
        DurFloors {
            mindur: 30,
            maxdur: 30,
            bidfloor: 4.5,
            ext: None,
        },
    ])
}

pub fn video() -> Video {
    Video {
        mimes: strs(&["video/mp4", "video/webm"]),
        minduration: 15,
        maxduration: 30,
        startdelay: Some(StartDelay(0)),
        maxseq: 3,
        poddur: 90,
        protocols: Some(vec![MediaCreativeSubtype(2), MediaCreativeSubtype(3)]),
        w: Some(640),
        h: Some(480),
        podid: "pod1".into(),
        podseq: PodSequence(1),
        rqddurs: Some(vec![15, 30]),
        plcmt: VideoPlcmtSubtype(1),
        linearity: LinearityMode(1),
        skip: Some(1),
        skipmin: 5,
        skipafter: 5,
        slotinpod: SlotPositionInPod(1),
        mincpmpersec: 1.5,
        battr: Some(vec![CreativeAttribute(9)]),
        boxingallowed: Some(1),
        playbackmethod: Some(vec![PlaybackMethod(1), PlaybackMethod(2)]),
        playbackend: PlaybackCessationMode(1),
        delivery: Some(vec![DeliveryMethod(2)]),
        pos: Some(PlacementPosition(7)),
        companionad: Some(vec![Banner {
            id: "companion1".into(),
            w: Some(300),
            h: Some(250),
            ext: ext(r#"{"companion":true}"#),
            ..Banner::default()
        }]),
        api: Some(vec![ApiFramework(7)]),
        companiontype: Some(vec![CompanionType(1)]),
        poddedupe: Some(vec![PodDedupe(1), PodDedupe(3)]),
        durfloors: dur_floors(),
        ext: ext(r#"{"video":"v"}"#),
        ..Video::default()
    }
}

pub fn audio() -> Audio {
    Audio {
        mimes: strs(&["audio/mp4"]),
        minduration: 15,
        maxduration: 30,
        poddur: 90,
        protocols: Some(vec![MediaCreativeSubtype(9)]),
        startdelay: Some(StartDelay(-1)),
        rqddurs: Some(vec![15]),
        podid: "apod".into(),
        maxseq: 3,
        feed: FeedType(1),
        stitched: Some(1),
        nvol: Some(VolumeNormalizationMode(2)),
        companionad: Some(vec![Banner {
            id: "acompanion".into(),
            ..Banner::default()
        }]),
        durfloors: dur_floors(),
        ext: ext(r#"{"audio":"a"}"#),
        ..Audio::default()
    }
}

pub fn native() -> Native {
    Native {
        request: r#"{"native":{"assets":[{"id":1,"title":{"len":25}}]}}"#.into(),
        ver: "1.2".into(),
        api: Some(vec![ApiFramework(3)]),
        battr: Some(vec![CreativeAttribute(1)]),
        ext: ext(r#"{"native":"n"}"#),
    }
}

pub fn imp() -> Imp {
    Imp {
        id: "imp1".into(),
        metric: Some(vec![Metric {
            r#type: "viewability".into(),
            value: 0.85,
            vendor: "vendor1".into(),
            ext: ext(r#"{"metric":"m"}"#),
        }]),
        banner: Some(banner()),
        video: Some(video()),
        audio: Some(audio()),
        native: Some(native()),
        pmp: Some(Pmp {
            private_auction: 1,
            deals: Some(vec![Deal {
                id: "deal1".into(),
                bidfloor: 1.23,
                bidfloorcur: "USD".into(),
                at: 1,
                wseat: strs(&["seat1", "seat2"]),
                wadomain: strs(&["advertiser.com"]),
                guar: 1,
                mincpmpersec: 0.5,
                durfloors: dur_floors(),
                ext: ext(r#"{"deal":"d"}"#),
            }]),
            ext: ext(r#"{"pmp":"p"}"#),
        }),
        displaymanager: "dm".into(),
        displaymanagerver: "1.0".into(),
        instl: 1,
        tagid: "tag1".into(),
        bidfloor: 1.23,
        bidfloorcur: "USD".into(),
        clickbrowser: Some(1),
        secure: Some(1),
        iframebuster: strs(&["buster1", "buster2"]),
        rwdd: 1,
        ssai: 2,
        exp: 30,
        qty: Some(Qty {
            multiplier: 14.2,
            sourcetype: MultiplierMeasurementSourceType(1),
            vendor: "example.com".into(),
            ext: ext(r#"{"qty":"q"}"#),
        }),
        dt: 1_621_234_567_890.0,
        refresh: Some(Refresh {
            refsettings: Some(vec![RefSettings {
                reftype: AutoRefreshTrigger(1),
                minint: 30,
                ext: ext(r#"{"ref":"r"}"#),
            }]),
            count: Some(2),
            ext: ext(r#"{"refresh":"r"}"#),
        }),
        ext: ext(r#"{"imp":"i"}"#),
    }
}

pub fn content() -> Content {
    Content {
        id: "content1".into(),
        episode: 1,
        title: "Title".into(),
        series: "Series".into(),
        season: "S1".into(),
        artist: "Artist".into(),
        genre: "Genre".into(),
        album: "Album".into(),
        isrc: "USRC17607839".into(),
        producer: Some(Producer {
            id: "prod1".into(),
            name: "Producer".into(),
            cattax: CategoryTaxonomy::IAB_CONTENT_2_2,
            cat: strs(&["IAB1"]),
            domain: "producer.com".into(),
            ext: ext(r#"{"producer":"p"}"#),
        }),
        url: "https://example.com/watch".into(),
        cattax: CategoryTaxonomy::IAB_CONTENT_1_0,
        cat: strs(&["IAB1", "IAB2"]),
        prodq: Some(ProductionQuality(1)),
        videoquality: Some(ProductionQuality(1)),
        context: ContentContext(1),
        contentrating: "PG".into(),
        userrating: "4.5".into(),
        qagmediarating: MediaRating(1),
        keywords: "a,b".into(),
        kwarray: strs(&["a", "b"]),
        livestream: Some(0),
        sourcerelationship: Some(1),
        len: 300,
        language: "en".into(),
        langb: "en-US".into(),
        embeddable: Some(1),
        data: Some(vec![Data {
            id: "data1".into(),
            name: "Provider".into(),
            segment: Some(vec![
                Segment {
                    id: "seg1".into(),
                    name: "Sports".into(),
                    value: "1".into(),
                    ext: ext(r#"{"seg":1}"#),
                },
                Segment {
                    id: "seg2".into(),
                    ..Segment::default()
                },
            ]),
            ext: ext(r#"{"data":"d"}"#),
        }]),
        network: Some(Network {
            id: "net1".into(),
            name: "Network".into(),
            domain: "network.com".into(),
            ext: ext(r#"{"net":"n"}"#),
        }),
        channel: Some(Channel {
            id: "ch1".into(),
            name: "Channel".into(),
            domain: "channel.com".into(),
            ext: ext(r#"{"ch":"c"}"#),
        }),
        ext: ext(r#"{"content":"c"}"#),
    }
}

pub fn publisher(id: &str) -> Publisher {
    Publisher {
        id: id.into(),
        name: "Publisher".into(),
        cattax: CategoryTaxonomy::IAB_CONTENT_2_0,
        cat: strs(&["IAB3"]),
        domain: "publisher.com".into(),
        ext: ext(r#"{"publisher":"p"}"#),
    }
}

pub fn site() -> Site {
    Site {
        id: "site1".into(),
        name: "example.com".into(),
        domain: "example.com".into(),
        cattax: CategoryTaxonomy::IAB_CONTENT_1_0,
        cat: strs(&["IAB1"]),
        sectioncat: strs(&["IAB1-1"]),
        pagecat: strs(&["IAB1-2"]),
        page: "https://example.com/page".into(),
        r#ref: "https://search.example/".into(),
        search: "query".into(),
        mobile: Some(1),
        privacypolicy: Some(1),
        publisher: Some(publisher("pub1")),
        content: Some(content()),
        keywords: "k1,k2".into(),
        kwarray: strs(&["k1", "k2"]),
        inventorypartnerdomain: "partner.com".into(),
        ext: ext(r#"{"site":"s"}"#),
    }
}

pub fn app() -> App {
    App {
        id: "app1".into(),
        name: "Example App".into(),
        bundle: "com.example.app".into(),
        domain: "example.com".into(),
        storeurl: "https://store.example/app".into(),
        cattax: CategoryTaxonomy::IAB_CONTENT_1_0,
        cat: strs(&["IAB9"]),
        ver: "2.1".into(),
        privacypolicy: Some(1),
        paid: Some(0),
        publisher: Some(publisher("pub2")),
        content: Some(content()),
        kwarray: Some(Vec::new()),
        ext: ext(r#"{"app":"a"}"#),
        ..App::default()
    }
}

pub fn dooh() -> Dooh {
    Dooh {
        id: "dooh1".into(),
        name: "Times Square Display".into(),
        venuetype: strs(&["street", "billboard"]),
        venuetypetax: Some(VenueTaxonomy(1)),
        publisher: Some(publisher("pub3")),
        domain: "dooh.example".into(),
        keywords: "nyc".into(),
        content: Some(Content {
            id: "feed".into(),
            ..Content::default()
        }),
        ext: ext(r#"{"dooh":"d"}"#),
    }
}

pub fn geo(lat: f64, lon: f64) -> Geo {
    Geo {
        lat: Some(lat),
        lon: Some(lon),
        r#type: LocationType::GPS,
        accuracy: 10,
        city: "New York".into(),
        region: "NY".into(),
        country: "USA".into(),
        zip: "10001".into(),
        utcoffset: -300,
        ext: ext(r#"{"geo":"g"}"#),
        ..Geo::default()
    }
}

pub fn device() -> Device {
    Device {
        geo: Some(geo(40.7128, -74.006)),
        dnt: Some(0),
        lmt: Some(0),
        ua: "Mozilla/5.0".into(),
        sua: Some(UserAgent {
            browsers: Some(vec![
                BrandVersion {
                    brand: "Chromium".into(),
                    version: strs(&["124", "0"]),
                    ext: ext(r#"{"b":1}"#),
                },
                BrandVersion {
                    brand: "Not-A.Brand".into(),
                    version: strs(&["99"]),
                    ext: None,
                },
            ]),
            platform: Some(BrandVersion {
                brand: "macOS".into(),
                version: strs(&["14", "4"]),
                ext: None,
            }),
            mobile: Some(0),
            architecture: "arm".into(),
            bitness: "64".into(),
            model: String::new(),
            source: UserAgentSource::HIGH_ENTROPY,
            ext: ext(r#"{"sua":"s"}"#),
        }),
        ip: "192.168.1.1".into(),
        ipv6: "2001:db8::1".into(),
        devicetype: DeviceType(2),
        make: "Apple".into(),
        model: "MacBookPro18,3".into(),
        os: "macOS".into(),
        osv: "14.4".into(),
        h: 1080,
        w: 1920,
        ppi: 254,
        pxratio: 2.0,
        js: Some(1),
        geofetch: Some(0),
        language: "en".into(),
        carrier: "WIFI".into(),
        connectiontype: Some(ConnectionType(2)),
        ifa: "AAAAAA-BBBB-CCCC-1111".into(),
        ext: ext(r#"{"device":"d"}"#),
        ..Device::default()
    }
}

pub fn user() -> User {
    User {
        id: "user1".into(),
        buyeruid: "buyer1".into(),
        yob: 1990,
        gender: "O".into(),
        keywords: "sports".into(),
        kwarray: strs(&["sports"]),
        geo: Some(geo(42.3601, -71.0589)),
        data: Some(vec![Data {
            id: "data2".into(),
            name: "Audience".into(),
            segment: Some(Vec::new()),
            ext: None,
        }]),
        consent: "CONSENT".into(),
        eids: Some(vec![
            Eid {
                source: "id5-sync.com".into(),
                uids: Some(vec![Uid {
                    id: "ID5-abc".into(),
                    atype: AgentType::PERSON,
                    ext: ext(r#"{"linkType":2}"#),
                }]),
                ext: ext(r#"{"eid":1}"#),
            },
            Eid {
                source: "liveramp.com".into(),
                uids: Some(vec![Uid {
                    id: "XY1000".into(),
                    atype: AgentType::PERSON,
                    ext: None,
                }]),
                ext: None,
            },
        ]),
        ext: ext(r#"{"user":"u"}"#),
        ..User::default()
    }
}

pub fn source() -> Source {
    Source {
        fd: Some(1),
        tid: "tid1".into(),
        pchain: "pchain1".into(),
        schain: Some(SupplyChain {
            complete: 1,
            nodes: Some(vec![SupplyChainNode {
                asi: "ssp.example.com".into(),
                sid: "seller1".into(),
                rid: "req1".into(),
                name: "Example SSP".into(),
                domain: "ssp.example.com".into(),
                hp: Some(1),
                ext: ext(r#"{"node":"n"}"#),
            }]),
            ver: "1.0".into(),
            ext: ext(r#"{"schain":"s"}"#),
        }),
        ext: ext(r#"{"source":"s"}"#),
    }
}

pub fn regs() -> Regs {
    Regs {
        coppa: 1,
        gdpr: Some(1),
        us_privacy: "1YNY".into(),
        gpp: "DBACNYA~CPXxRfAPXxRfAAfKABENB-CgAAAAAAAAAAYgAAAAAAAA".into(),
        gpp_sid: Some(vec![2, 6]),
        ext: ext(r#"{"regs":"r"}"#),
    }
}

/// A request with every object type populated at least once.
pub fn full_request() -> BidRequest {
    BidRequest {
        id: "req1".into(),
        imp: Some(vec![imp(), Imp {
            id: "imp2".into(),
            banner: Some(banner()),
            ..Imp::default()
        }]),
        site: Some(site()),
        app: Some(app()),
        dooh: Some(dooh()),
        device: Some(device()),
        user: Some(user()),
        test: 1,
        at: 2,
        tmax: 500,
        wseat: strs(&["seat1", "seat2"]),
        bseat: strs(&["seat3"]),
        allimps: 1,
        cur: strs(&["USD", "EUR"]),
        wlang: strs(&["en", "es"]),
        wlangb: strs(&["en-US"]),
        acat: strs(&["IAB1"]),
        bcat: strs(&["IAB25", "IAB26"]),
        cattax: CategoryTaxonomy::IAB_CONTENT_1_0,
        badv: strs(&["blocked.com"]),
        bapp: Some(Vec::new()),
        source: Some(source()),
        regs: Some(regs()),
        ext: ext(r#"{"request":"r"}"#),
    }
}
