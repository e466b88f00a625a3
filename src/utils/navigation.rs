// src/utils/navigation.rs

use serde::Serialize;

use crate::utils::topic_id::TopicId;

/// Destination of a backward navigation step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NavTarget {
    /// The module overview page; no previous topic exists.
    Overview,
    Topic { level_id: i64, topic_id: String },
}

impl NavTarget {
    pub fn topic(id: TopicId) -> Self {
        NavTarget::Topic {
            level_id: id.level,
            topic_id: id.encode(),
        }
    }
}

/// Computes the backward neighbor of a topic.
///
/// Backward navigation crosses level boundaries: the first topic of level N
/// (N > 1) links to the last topic of level N - 1. The first topic of level 1
/// links to the module overview.
pub fn previous(id: TopicId, level_size: i64) -> NavTarget {
    if id.sequence > 1 {
        return NavTarget::topic(TopicId {
            level: id.level,
            sequence: id.sequence - 1,
        });
    }

    if id.level == 1 {
        return NavTarget::Overview;
    }

    NavTarget::topic(TopicId {
        level: id.level - 1,
        sequence: level_size,
    })
}

/// Computes the forward neighbor of a topic.
///
/// Forward navigation stops at the last topic of every level and never
/// advances into the next one. The asymmetry with [`previous`] is the
/// user-observable contract, kept as-is.
pub fn next(id: TopicId, level_size: i64) -> Option<TopicId> {
    if id.sequence < level_size {
        Some(TopicId {
            level: id.level,
            sequence: id.sequence + 1,
        })
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEVEL_SIZE: i64 = 10;

    fn id(level: i64, sequence: i64) -> TopicId {
        TopicId { level, sequence }
    }

    #[test]
    fn test_previous_within_level_steps_back_by_one() {
        for seq in 2..=LEVEL_SIZE {
            assert_eq!(
                previous(id(4, seq), LEVEL_SIZE),
                NavTarget::topic(id(4, seq - 1))
            );
        }
    }

    #[test]
    fn test_previous_from_start_of_level_one_is_overview() {
        assert_eq!(previous(id(1, 1), LEVEL_SIZE), NavTarget::Overview);
    }

    #[test]
    fn test_previous_crosses_into_prior_level() {
        assert_eq!(
            previous(id(3, 1), LEVEL_SIZE),
            NavTarget::Topic {
                level_id: 2,
                topic_id: "level2-topic-010".to_string(),
            }
        );
    }

    #[test]
    fn test_next_within_level_steps_forward_by_one() {
        assert_eq!(next(id(2, 4), LEVEL_SIZE), Some(id(2, 5)));
    }

    #[test]
    fn test_next_is_terminal_at_every_level_boundary() {
        // Forward navigation must not auto-cross, including on non-final levels.
        for level in 1..=3 {
            assert_eq!(next(id(level, LEVEL_SIZE), LEVEL_SIZE), None);
        }
    }

    #[test]
    fn test_next_inverts_previous_within_a_level() {
        for seq in 2..=LEVEL_SIZE {
            let NavTarget::Topic { level_id, topic_id } = previous(id(5, seq), LEVEL_SIZE) else {
                panic!("expected a topic target");
            };
            assert_eq!(level_id, 5);

            let decoded = TopicId::decode(&topic_id).unwrap();
            assert_eq!(next(decoded, LEVEL_SIZE), Some(id(5, seq)));
        }
    }

    #[test]
    fn test_custom_level_size_moves_the_boundary() {
        assert_eq!(next(id(1, 4), 4), None);
        assert_eq!(
            previous(id(2, 1), 4),
            NavTarget::Topic {
                level_id: 1,
                topic_id: "level1-topic-004".to_string(),
            }
        );
    }
}
