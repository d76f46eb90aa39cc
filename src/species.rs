//! Fixed report taxonomy.
//!
//! The survey report always carries one column per UK bat species,
//! in this order, regardless of which species the model detects.

/// Species columns of the survey report, in output order.
pub const SPECIES: [&str; 17] = [
    "Barbastellus barbastellus",
    "Eptesicus serotinus",
    "Myotis alcathoe",
    "Myotis bechsteinii",
    "Myotis brandtii",
    "Myotis daubentonii",
    "Myotis mystacinus",
    "Myotis nattereri",
    "Nyctalus leisleri",
    "Nyctalus noctula",
    "Pipistrellus nathusii",
    "Pipistrellus pipistrellus",
    "Pipistrellus pygmaeus",
    "Plecotus auritus",
    "Plecotus austriacus",
    "Rhinolophus ferrumequinum",
    "Rhinolophus hipposideros",
];

/// Number of species columns.
pub const SPECIES_COUNT: usize = SPECIES.len();

/// Leading metadata columns of the report.
pub const METADATA_FIELDS: [&str; 3] = ["filename", "timestamp", "duration"];

/// Position of a species in the report column order, if it is a known
/// report species.
pub fn index_of(name: &str) -> Option<usize> {
    SPECIES.iter().position(|s| *s == name)
}

/// The complete report header: metadata fields followed by the species
/// columns.
pub fn report_header() -> Vec<&'static str> {
    METADATA_FIELDS.into_iter().chain(SPECIES).collect()
}
