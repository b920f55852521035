use core::fmt;

/// Why an endpoint handed to a search was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EndpointIssue {
    /// The grid marks the cell as blocked.
    Blocked,
    /// The node disagrees with the grid's node at the same coordinate, so it was not taken from
    /// this grid.
    NotInGrid,
}

impl fmt::Display for EndpointIssue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EndpointIssue::Blocked => write!(f, "cell is blocked"),
            EndpointIssue::NotInGrid => write!(f, "node does not belong to this grid"),
        }
    }
}

/// Input validation failures. An unreachable goal is not an error; searches report it as
/// `Ok(None)`.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("coordinate ({x}, {y}) lies outside the {width}x{height} grid")]
    InvalidCoordinate {
        x: i32,
        y: i32,
        width: usize,
        height: usize,
    },
    #[error("invalid endpoint ({x}, {y}): {reason}")]
    InvalidEndpoint { x: i32, y: i32, reason: EndpointIssue },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_coordinate() {
        let err = GridError::InvalidCoordinate {
            x: 7,
            y: -1,
            width: 7,
            height: 5,
        };
        assert_eq!(
            err.to_string(),
            "coordinate (7, -1) lies outside the 7x5 grid"
        );
        let err = GridError::InvalidEndpoint {
            x: 1,
            y: 2,
            reason: EndpointIssue::Blocked,
        };
        assert_eq!(err.to_string(), "invalid endpoint (1, 2): cell is blocked");
    }
}
