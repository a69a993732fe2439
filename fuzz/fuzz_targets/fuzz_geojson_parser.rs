#![no_main]

use libfuzzer_sys::fuzz_target;
use row_canvas::BlockfaceSet;

fuzz_target!(|data: &[u8]| {
    let Ok(content) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(set) = BlockfaceSet::from_geojson_str(content, "globalid") {
        // Längen und Projektion müssen endlich bleiben
        for feature in set.iter() {
            assert!(feature.length.is_finite());
            assert!(feature.projected.iter().all(|p| p.is_finite()));
        }
        let _ = set.bounds();
    }
});
