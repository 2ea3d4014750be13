pub struct BreakAnalysis {
    pub should_break: bool,
    pub remaining_height: f32,
}

/// Centralized logic to check if a child fits in the remaining space.
///
/// * `cursor_y`: Distance already consumed from the top of the frame.
/// * `child_height`: The required height for the child.
/// * `frame_height`: Total height of the content frame.
pub fn check_child_fit(cursor_y: f32, child_height: f32, frame_height: f32) -> BreakAnalysis {
    let available = (frame_height - cursor_y).max(0.0);
    // Use a small epsilon to handle floating point inaccuracies
    const EPSILON: f32 = 0.01;
    BreakAnalysis {
        should_break: child_height > available + EPSILON,
        remaining_height: available,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tolerates_rounding_at_the_frame_edge() {
        assert!(!check_child_fit(600.0, 82.005, 682.0).should_break);
        assert!(check_child_fit(600.0, 82.5, 682.0).should_break);
    }

    #[test]
    fn overfull_cursor_reports_zero_remaining() {
        let analysis = check_child_fit(700.0, 1.0, 682.0);
        assert_eq!(analysis.remaining_height, 0.0);
        assert!(analysis.should_break);
    }
}
