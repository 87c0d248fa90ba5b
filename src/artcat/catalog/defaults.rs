//! The built-in seed records. These ship with the binary, are never written
//! to the store, and can never be added, edited, or deleted at runtime.

use crate::model::{ArtDraft, RecordDraft};
use crate::store::RecordMap;
use crate::validate;
use once_cell::sync::Lazy;

struct Seed {
    code: &'static str,
    url: &'static str,
    name: &'static str,
    media: &'static str,
    year: &'static str,
    series: &'static str,
    length: &'static str,
    width: &'static str,
    size_category: &'static str,
}

const SEEDS: &[Seed] = &[
    Seed {
        code: "10000000001",
        url: "https://catalogue.example/img/10000000001.png",
        name: "Harbour at Dusk",
        media: "Oil on Canvas",
        year: "2018",
        series: "Coastal",
        length: "60",
        width: "40",
        size_category: "Medium",
    },
    Seed {
        code: "10000000002",
        url: "https://catalogue.example/img/10000000002.png",
        name: "Study in Grey",
        media: "Charcoal",
        year: "2019",
        series: "Studies",
        length: "30",
        width: "21",
        size_category: "Small",
    },
    Seed {
        code: "10000000003",
        url: "https://catalogue.example/img/10000000003.png",
        name: "Field Lines",
        media: "Acrylic",
        year: "2021",
        series: "Landscapes",
        length: "120",
        width: "90",
        size_category: "Large",
    },
];

static DEFAULTS: Lazy<RecordMap> = Lazy::new(|| {
    let mut map = RecordMap::new();
    for seed in SEEDS {
        let code = validate::validate_code(seed.code).expect("seed code is 11 digits");
        let record = RecordDraft::Art(ArtDraft {
            url: seed.url.to_string(),
            name: seed.name.to_string(),
            media: seed.media.to_string(),
            year: seed.year.to_string(),
            series: seed.series.to_string(),
            secondary_series: String::new(),
            length: seed.length.to_string(),
            width: seed.width.to_string(),
            size_category: seed.size_category.to_string(),
        })
        .finish()
        .expect("seed record is complete");
        map.insert(code, record);
    }
    map
});

pub fn default_records() -> &'static RecordMap {
    &DEFAULTS
}
