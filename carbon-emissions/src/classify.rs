//! Deterministic transaction-to-category classification.
//!
//! Two stages: an exact MCC (merchant category code) lookup, then ordered
//! keyword matching over the description. No ML, no I/O — substring rules
//! cover the overwhelming majority of card transactions.

/// Category returned when neither the MCC nor the description matches
pub const DEFAULT_CATEGORY: &str = "other";

/// Ordered keyword rules: first category whose keyword appears in the
/// lowercased description wins. Declaration order is part of the contract
/// (e.g. "subway" belongs to transit here, not to the sandwich chain,
/// because transit is declared first).
pub const CATEGORY_KEYWORDS: &[(&str, &[&str])] = &[
    ("transport.fuel", &[
        "gas", "fuel", "shell", "exxon", "chevron", "bp", "mobil", "texaco", "sunoco", "valero",
    ]),
    ("transport.publictransit", &[
        "metro", "subway", "bus", "transit", "train", "rail", "bart", "mta",
    ]),
    ("transport.airline", &[
        "airline", "airways", "flight", "delta", "united", "american airlines", "southwest",
    ]),
    ("utilities.electricity", &["electric", "power", "utility", "pge", "energy"]),
    ("utilities.telecom", &[
        "verizon", "att", "t-mobile", "sprint", "comcast", "xfinity", "spectrum",
    ]),
    ("grocery", &[
        "grocery", "supermarket", "safeway", "whole foods", "trader joe", "kroger", "costco",
        "walmart",
    ]),
    ("restaurants", &[
        "restaurant", "cafe", "coffee", "starbucks", "mcdonald", "burger", "pizza", "taco",
        "subway",
    ]),
    ("apparel", &[
        "clothing", "apparel", "fashion", "nike", "adidas", "zara", "h&m", "gap", "nordstrom",
    ]),
    ("electronics", &["electronics", "apple", "best buy", "computer", "phone", "amazon"]),
    ("home", &["home depot", "lowes", "ikea", "furniture", "hardware"]),
    ("entertainment", &["movie", "cinema", "netflix", "spotify", "hulu", "disney", "gaming"]),
    ("healthcare", &[
        "hospital", "clinic", "pharmacy", "cvs", "walgreens", "doctor", "medical",
    ]),
];

/// Map a merchant category code to a spending category.
///
/// Codes follow the ISO 18245 card-network assignments; the groupings
/// reproduce the reference dataset this engine was calibrated against.
pub fn mcc_category(mcc: &str) -> Option<&'static str> {
    // Financial-institution codes come in two runs (6013-6019 are
    // unassigned in the reference dataset).
    if let Ok(code) = mcc.parse::<u16>() {
        if matches!(code, 6010..=6012 | 6020..=6099) {
            return Some("financial");
        }
    }

    let category = match mcc {
        // Fuel dealers and service stations
        "5541" | "5542" | "5172" | "5983" => "transport.fuel",
        // Commuter transport, taxis, bus lines
        "4111" | "4112" | "4119" | "4121" | "4131" => "transport.publictransit",
        // Airlines and airports
        "3000" | "3001" | "3002" | "4511" | "4582" => "transport.airline",
        // Freight, couriers, warehousing
        "4214" | "4215" | "4225" => "transport.shipping",
        "4411" => "transport.cruise",
        "4457" | "4468" => "transport.boat",
        // Travel agencies, tolls
        "4722" | "4784" | "4789" => "transport.travel",
        "4900" | "4911" | "4931" => "utilities.electricity",
        "4814" | "4816" | "4821" | "4829" | "4899" | "4961" => "utilities.telecom",
        "4922" | "4923" | "4932" => "utilities.gas",
        "4924" | "4925" => "utilities.water",
        "4939" | "4999" => "utilities.other",
        // Supermarkets, food stores, general merchandise, auto supply
        "5411" | "5412" | "5422" | "5451" | "5462" | "5499" | "5310" | "5311" | "5331"
        | "5399" | "5441" | "5531" | "5532" | "5533" | "5561" | "5571" | "5592" | "5598"
        | "5599" => "grocery",
        "5611" | "5621" | "5631" | "5641" | "5651" | "5661" | "5681" | "5691" | "5697"
        | "5698" | "5699" => "apparel",
        "5712" | "5713" | "5714" | "5718" | "5719" | "5722" => "home",
        // Electronics stores and repair shops
        "5732" | "5733" | "5734" | "5735" | "7622" | "7623" | "7629" | "7631" | "7641"
        | "7692" | "7699" => "electronics",
        "5811" | "5812" | "5813" | "5814" => "restaurants",
        "5912" => "pharmacy",
        "5921" => "alcohol",
        "5931" | "5932" | "5933" | "5935" | "5937" => "antiques",
        // Specialty retail and direct marketing
        "5940" | "5941" | "5942" | "5943" | "5944" | "5945" | "5946" | "5947" | "5948"
        | "5949" | "5950" | "5960" | "5961" | "5962" | "5963" | "5964" | "5965" | "5966"
        | "5967" | "5968" | "5969" | "5970" | "5971" | "5972" | "5973" | "5975" | "5976"
        | "5977" | "5978" | "5992" | "5993" | "5994" | "5995" | "5996" | "5997" | "5998"
        | "5999" => "retail",
        // Lodging, personal services, auto rental and repair
        "7011" | "7012" | "7032" | "7033" | "7210" | "7211" | "7216" | "7217" | "7221"
        | "7230" | "7251" | "7261" | "7273" | "7276" | "7277" | "7278" | "7296" | "7297"
        | "7298" | "7299" | "7511" | "7512" | "7513" | "7519" | "7523" | "7531" | "7533"
        | "7534" | "7535" | "7538" | "7539" | "7542" | "7549" => "travel",
        // Business services
        "7311" | "7321" | "7322" | "7333" | "7338" | "7339" | "7342" | "7349" | "7361"
        | "7372" | "7375" | "7379" | "7392" | "7393" | "7394" | "7395" | "7399" => "advertising",
        "7829" | "7832" | "7841" | "7911" | "7922" | "7929" | "7932" | "7933" | "7941"
        | "7991" | "7992" | "7993" | "7994" | "7995" | "7996" | "7997" | "7998" | "7999" => {
            "entertainment"
        }
        "8011" | "8021" | "8031" | "8041" | "8042" | "8043" | "8049" | "8050" | "8062"
        | "8071" | "8099" => "healthcare",
        "8111" => "legal",
        // Schools, membership and professional organizations
        "8211" | "8220" | "8241" | "8244" | "8249" | "8299" | "8351" | "8398" | "8641"
        | "8651" | "8661" | "8675" | "8699" | "8734" | "8911" | "8931" | "8999" => "education",
        "9211" | "9222" | "9223" | "9311" | "9399" | "9401" | "9402" | "9950" => "government",
        _ => return None,
    };
    Some(category)
}

/// Classify a transaction into a spending category.
///
/// Priority: MCC exact match > first keyword hit in the description >
/// `DEFAULT_CATEGORY`. Always returns a category; never errors.
pub fn classify(mcc: Option<&str>, description: &str) -> &'static str {
    if let Some(code) = mcc {
        if let Some(category) = mcc_category(code) {
            return category;
        }
    }

    let desc = description.to_lowercase();
    for &(category, keywords) in CATEGORY_KEYWORDS {
        for keyword in keywords {
            if desc.contains(keyword) {
                return category;
            }
        }
    }

    DEFAULT_CATEGORY
}
