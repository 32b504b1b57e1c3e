/// Back-to-front facet ordering (painter's algorithm)
use crate::geometry::Facet;

/// Mean depth of the three vertices of `facet`.
pub fn average_depth(facet: &Facet, depths: &[f64]) -> f64 {
    facet.indices.iter().map(|&i| depths[i]).sum::<f64>() / 3.0
}

/// Order facets by average vertex depth, largest first.
///
/// The sort is stable: facets with equal averages keep their input order.
/// `depths` holds one entry per vertex, indexed like the mesh's vertices.
pub fn sort_back_to_front(facets: &[Facet], depths: &[f64]) -> Vec<Facet> {
    let mut keyed: Vec<(f64, Facet)> = facets
        .iter()
        .map(|facet| (average_depth(facet, depths), *facet))
        .collect();

    keyed.sort_by(|(a, _), (b, _)| b.total_cmp(a));
    keyed.into_iter().map(|(_, facet)| facet).collect()
}
