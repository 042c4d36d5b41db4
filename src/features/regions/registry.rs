/// Districts the reporting app serves
pub const DISTRICTS: [&str; 12] = [
    "Ranchi",
    "Jamshedpur",
    "Dhanbad",
    "Bokaro",
    "Deoghar",
    "Hazaribagh",
    "Giridih",
    "Ramgarh",
    "Medininagar",
    "Chaibasa",
    "Daltonganj",
    "Dumka",
];

/// Match reverse-geocoded region text against the district table
///
/// Comparison is case-insensitive containment, so "Ranchi Division" and
/// "ranchi" both resolve to Ranchi.
pub fn resolve_district(region: &str) -> Option<&'static str> {
    let region = region.to_lowercase();
    DISTRICTS
        .iter()
        .copied()
        .find(|district| region.contains(&district.to_lowercase()))
}
