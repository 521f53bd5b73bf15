//! Sparse link extraction from positioned entities.

use hobbynet_core::{similarity, Category, EntityId};

use crate::matrix::RelationMatrix;
use crate::positioned::PositionedEntity;

/// An undirected relation between two entities.
///
/// `source` and `target` follow extraction order; compare links through
/// [`Link::key`] or [`Link::connects`], which ignore direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    pub source: EntityId,
    pub target: EntityId,
    /// Similarity in (0, 1]
    pub weight: f64,
}

/// Canonical, direction-free identity of a link (lower id first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LinkKey(pub EntityId, pub EntityId);

impl LinkKey {
    pub fn new(a: EntityId, b: EntityId) -> Self {
        if a <= b {
            Self(a, b)
        } else {
            Self(b, a)
        }
    }
}

impl Link {
    pub fn key(&self) -> LinkKey {
        LinkKey::new(self.source, self.target)
    }

    /// Whether this link joins `a` and `b`, in either direction.
    pub fn connects(&self, a: EntityId, b: EntityId) -> bool {
        (self.source == a && self.target == b) || (self.source == b && self.target == a)
    }

    /// Whether `id` is one of the endpoints.
    pub fn involves(&self, id: EntityId) -> bool {
        self.source == id || self.target == id
    }

    /// The endpoint opposite `id`, if `id` is an endpoint.
    pub fn other(&self, id: EntityId) -> Option<EntityId> {
        if self.source == id {
            Some(self.target)
        } else if self.target == id {
            Some(self.source)
        } else {
            None
        }
    }
}

/// Every pair `i < j` of `positioned` with a positive similarity under `category`.
///
/// Links come out in pair order over the positioned (paint-ordered) list.
pub fn extract_links(positioned: &[PositionedEntity<'_>], category: Category) -> Vec<Link> {
    collect_links(positioned, |a, b| {
        similarity(&a.entity.profile, &b.entity.profile, category)
    })
}

/// [`extract_links`] reading weights from a prebuilt relation matrix.
///
/// The matrix must come from the entity list `positioned` was laid out from.
/// Since similarity is exactly symmetric the result is identical to
/// [`extract_links`] for the matrix's category.
pub fn extract_links_with_matrix(
    positioned: &[PositionedEntity<'_>],
    matrix: &RelationMatrix,
) -> Vec<Link> {
    collect_links(positioned, |a, b| matrix.get(a.input_index, b.input_index))
}

fn collect_links<F>(positioned: &[PositionedEntity<'_>], mut weight: F) -> Vec<Link>
where
    F: FnMut(&PositionedEntity<'_>, &PositionedEntity<'_>) -> f64,
{
    let mut links = Vec::new();
    for (i, a) in positioned.iter().enumerate() {
        for b in &positioned[i + 1..] {
            let value = weight(a, b);
            if value > 0.0 {
                links.push(Link {
                    source: a.id(),
                    target: b.id(),
                    weight: value,
                });
            }
        }
    }
    tracing::debug!(nodes = positioned.len(), links = links.len(), "links extracted");
    links
}
