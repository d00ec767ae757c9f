use crate::model::Region;
use crate::utils::contains_ignore_case;

pub const REGIONS: [Region; 16] = [
    Region { name: "Austria", code: "AT" },
    Region { name: "Belgium", code: "BE" },
    Region { name: "Switzerland", code: "CH" },
    Region { name: "Czech Republic", code: "CZ" },
    Region { name: "Germany, Luxembourg", code: "DE-LU" },
    Region { name: "Germany, Austria, Luxembourg", code: "DE-AT-LU" },
    Region { name: "Denmark 1", code: "DK1" },
    Region { name: "Denmark 2", code: "DK2" },
    Region { name: "France", code: "FR" },
    Region { name: "Hungary", code: "HU" },
    Region { name: "Italy North", code: "IT-North" },
    Region { name: "Netherlands", code: "NL" },
    Region { name: "Norway 2", code: "NO2" },
    Region { name: "Poland", code: "PL" },
    Region { name: "Sweden 4", code: "SE4" },
    Region { name: "Slovenia", code: "SI" },
];

/// Keeps regions whose name or code contains `term`, ignoring case.
/// A blank term keeps everything.
pub fn filter_regions<'a>(regions: &'a [Region], term: &str) -> Vec<&'a Region> {
    let term = term.trim();
    regions
        .iter()
        .filter(|region| {
            term.is_empty()
                || contains_ignore_case(region.name, term)
                || contains_ignore_case(region.code, term)
        })
        .collect()
}

pub fn find_region(code: &str) -> Option<&'static Region> {
    let code = code.trim();
    REGIONS.iter().find(|r| r.code.eq_ignore_ascii_case(code))
}
