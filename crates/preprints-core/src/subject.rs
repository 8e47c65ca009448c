//! Subject area mapping.
//!
//! Upstream records carry subject areas as display names. Consumers expect
//! each one paired with its stable slug.

use std::collections::HashMap;
use std::sync::LazyLock;

use serde::Serialize;

/// Major subject areas and their slugs.
const SUBJECT_AREAS: &[(&str, &str)] = &[
    ("Biochemistry and Chemical Biology", "biochemistry-chemical-biology"),
    ("Cancer Biology", "cancer-biology"),
    ("Cell Biology", "cell-biology"),
    ("Chromosomes and Gene Expression", "chromosomes-gene-expression"),
    ("Computational and Systems Biology", "computational-systems-biology"),
    ("Developmental Biology", "developmental-biology"),
    ("Ecology", "ecology"),
    ("Epidemiology and Global Health", "epidemiology-global-health"),
    ("Evolutionary Biology", "evolutionary-biology"),
    ("Genetics and Genomics", "genetics-genomics"),
    ("Immunology and Inflammation", "immunology-inflammation"),
    ("Medicine", "medicine"),
    ("Microbiology and Infectious Disease", "microbiology-infectious-disease"),
    ("Neuroscience", "neuroscience"),
    ("Physics of Living Systems", "physics-living-systems"),
    ("Plant Biology", "plant-biology"),
    ("Stem Cells and Regenerative Medicine", "stem-cells-regenerative-medicine"),
    ("Structural Biology and Molecular Biophysics", "structural-biology-molecular-biophysics"),
];

static SUBJECT_SLUGS: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| SUBJECT_AREAS.iter().copied().collect());

/// A subject area as exposed to API consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Subject {
    /// Slug, or `None` when the name is not a known subject area.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
}

/// Look up the slug for a subject area name.
pub fn subject_slug(name: &str) -> Option<&'static str> {
    SUBJECT_SLUGS.get(name).copied()
}

/// Pair each subject name with its slug, preserving order.
///
/// Unknown names are kept with no id.
pub fn map_subjects(names: &[String]) -> Vec<Subject> {
    names
        .iter()
        .map(|name| Subject {
            id: subject_slug(name).map(str::to_string),
            name: name.clone(),
        })
        .collect()
}
