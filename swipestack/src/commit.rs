use crate::Decision;

/// Decides whether a released drag commits a navigation or snaps back.
///
/// Commits iff `|offset| >= container_width * threshold_fraction`. The navigator only asks for
/// a decision when the offset is non-zero.
pub fn evaluate(offset: f32, container_width: f32, threshold_fraction: f32) -> Decision {
    if offset.abs() >= container_width * threshold_fraction {
        Decision::Commit
    } else {
        Decision::Cancel
    }
}
