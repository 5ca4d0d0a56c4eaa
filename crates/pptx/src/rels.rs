//! Relationship id allocation for slide parts.

/// Anything that owns the three relationship lists of a slide part.
pub trait RelationshipTarget {
    /// Number of generic relationships (images, hyperlinks, layouts).
    fn rels_len(&self) -> usize;

    /// Number of chart relationships.
    fn chart_rels_len(&self) -> usize;

    /// Number of media relationships (audio, video).
    fn media_rels_len(&self) -> usize;
}

/// The three relationship lists of one slide.
#[derive(Debug, Clone, PartialEq)]
pub struct SlideRelationships<R, C = R, M = R> {
    pub rels: Vec<R>,
    pub rels_chart: Vec<C>,
    pub rels_media: Vec<M>,
}

impl<R, C, M> Default for SlideRelationships<R, C, M> {
    fn default() -> Self {
        Self {
            rels: Vec::new(),
            rels_chart: Vec::new(),
            rels_media: Vec::new(),
        }
    }
}

impl<R, C, M> RelationshipTarget for SlideRelationships<R, C, M> {
    fn rels_len(&self) -> usize {
        self.rels.len()
    }

    fn chart_rels_len(&self) -> usize {
        self.rels_chart.len()
    }

    fn media_rels_len(&self) -> usize {
        self.rels_media.len()
    }
}

/// The next free relationship number for `target`.
///
/// Nothing is registered; the caller adds the relationship under this id.
pub fn next_rel_id(target: &impl RelationshipTarget) -> usize {
    target.rels_len() + target.chart_rels_len() + target.media_rels_len() + 1
}

/// Format a relationship number as an `r:id` value, e.g. `rId4`.
pub fn rel_id_attr(id: usize) -> String {
    format!("rId{}", id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_rel_id() {
        let slide: SlideRelationships<&str> = SlideRelationships {
            rels: vec!["image1", "image2"],
            rels_chart: vec!["chart1"],
            rels_media: vec![],
        };
        assert_eq!(next_rel_id(&slide), 4);
        assert_eq!(rel_id_attr(next_rel_id(&slide)), "rId4");
    }

    #[test]
    fn test_next_rel_id_empty_slide() {
        let slide: SlideRelationships<String> = SlideRelationships::default();
        assert_eq!(next_rel_id(&slide), 1);
    }

    #[test]
    fn test_next_rel_id_custom_target() {
        struct Counts(usize, usize, usize);

        impl RelationshipTarget for Counts {
            fn rels_len(&self) -> usize {
                self.0
            }
            fn chart_rels_len(&self) -> usize {
                self.1
            }
            fn media_rels_len(&self) -> usize {
                self.2
            }
        }

        assert_eq!(next_rel_id(&Counts(3, 0, 2)), 6);
    }
}
