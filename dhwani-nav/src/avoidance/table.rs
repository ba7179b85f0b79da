//! Ordered decision table for reactive avoidance.

/// Motion chosen for a cycle
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Maneuver {
    /// Steer clockwise, speed scaled by the front-left distance
    TurnRight,
    /// Steer counter-clockwise, speed scaled by the front-right distance
    TurnLeft,
    /// Back up while rotating counter-clockwise
    ReverseTurn,
    /// Straight ahead at cruise speed
    Cruise,
}

/// Which clusters see something inside the near threshold
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClusterState {
    /// Forward beams
    pub front: bool,
    /// Left side and front-left diagonal
    pub left: bool,
    /// Right side and front-right diagonal
    pub right: bool,
}

/// One row: `None` matches either state
#[derive(Clone, Copy, Debug)]
pub(crate) struct Rule {
    front: Option<bool>,
    left: Option<bool>,
    right: Option<bool>,
    maneuver: Maneuver,
}

impl Rule {
    const fn new(
        front: Option<bool>,
        left: Option<bool>,
        right: Option<bool>,
        maneuver: Maneuver,
    ) -> Self {
        Self {
            front,
            left,
            right,
            maneuver,
        }
    }

    fn matches(&self, state: &ClusterState) -> bool {
        fn cell(want: Option<bool>, have: bool) -> bool {
            want.is_none_or(|w| w == have)
        }
        cell(self.front, state.front) && cell(self.left, state.left) && cell(self.right, state.right)
    }
}

/// Evaluated top to bottom, first match wins.
///
/// The front cluster outranks the sides, and within each branch the left
/// side is checked before the right. A symmetric blockage therefore always
/// turns right.
pub(crate) const DECISION_TABLE: [Rule; 6] = [
    Rule::new(Some(true), Some(true), None, Maneuver::TurnRight),
    Rule::new(Some(true), None, Some(true), Maneuver::TurnLeft),
    Rule::new(Some(true), None, None, Maneuver::ReverseTurn),
    Rule::new(None, Some(true), None, Maneuver::TurnRight),
    Rule::new(None, None, Some(true), Maneuver::TurnLeft),
    Rule::new(None, None, None, Maneuver::Cruise),
];

/// Look up the maneuver for a cluster state
pub fn select_maneuver(state: &ClusterState) -> Maneuver {
    DECISION_TABLE
        .iter()
        .find(|rule| rule.matches(state))
        .map_or(Maneuver::Cruise, |rule| rule.maneuver)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(front: bool, left: bool, right: bool) -> ClusterState {
        ClusterState { front, left, right }
    }

    #[test]
    fn test_full_truth_table() {
        use Maneuver::*;
        let expected = [
            // front, left, right
            ((false, false, false), Cruise),
            ((false, false, true), TurnLeft),
            ((false, true, false), TurnRight),
            ((false, true, true), TurnRight),
            ((true, false, false), ReverseTurn),
            ((true, false, true), TurnLeft),
            ((true, true, false), TurnRight),
            ((true, true, true), TurnRight),
        ];
        for ((front, left, right), maneuver) in expected {
            assert_eq!(
                select_maneuver(&state(front, left, right)),
                maneuver,
                "front={front} left={left} right={right}"
            );
        }
    }

    #[test]
    fn test_last_row_matches_everything() {
        let last = DECISION_TABLE[DECISION_TABLE.len() - 1];
        assert_eq!(last.maneuver, Maneuver::Cruise);
        assert!(last.matches(&state(true, true, true)));
        assert!(last.matches(&state(false, false, false)));
    }
}
