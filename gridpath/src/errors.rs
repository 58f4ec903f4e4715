/// The error type for turning board text into a [`Grid`](crate::Grid).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    Empty,
    NotRectangular {
        row: usize,
        expected: usize,
        found: usize,
    },
    UnexpectedCharacter {
        character: char,
        x: usize,
        y: usize,
    },
}

impl std::error::Error for ParseError {}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::Empty => write!(f, "The board has no cells"),
            ParseError::NotRectangular {
                row,
                expected,
                found,
            } => write!(
                f,
                "Row {} has {} cells, but the board is {} cells wide",
                row, found, expected
            ),
            ParseError::UnexpectedCharacter { character, x, y } => write!(
                f,
                "Unexpected character {:?} at ({}, {})",
                character, x, y
            ),
        }
    }
}

/// The error type for drawing frames and encoding the animation.
#[derive(Debug)]
pub enum RenderError {
    InvalidConfig(&'static str),
    EmptyPath,
    Image(image::ImageError),
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::Image(err) => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::InvalidConfig(reason) => write!(f, "Invalid render config: {}", reason),
            RenderError::EmptyPath => write!(f, "Cannot animate an empty path"),
            RenderError::Image(err) => write!(f, "Could not encode the animation: {}", err),
        }
    }
}

impl From<image::ImageError> for RenderError {
    fn from(err: image::ImageError) -> Self {
        RenderError::Image(err)
    }
}

/// The error type for [`draw_path()`](crate::draw_path).
///
/// Every variant displays as a message that can be shown to the end user as-is.
#[derive(Debug)]
pub enum PathfindingError {
    MarkerCount { starts: usize, goals: usize },
    Parse(ParseError),
    Render(RenderError),
}

impl std::error::Error for PathfindingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PathfindingError::MarkerCount { .. } => None,
            PathfindingError::Parse(err) => Some(err),
            PathfindingError::Render(err) => Some(err),
        }
    }
}

impl std::fmt::Display for PathfindingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathfindingError::MarkerCount { starts, goals } => write!(
                f,
                "Board must contain a start (S) and end (X) tile! Found {} start and {} end tiles",
                starts, goals
            ),
            PathfindingError::Parse(_) => write!(f, "Error parsing board."),
            PathfindingError::Render(_) => write!(f, "Error pathfinding or generating GIF"),
        }
    }
}

impl From<ParseError> for PathfindingError {
    fn from(err: ParseError) -> Self {
        PathfindingError::Parse(err)
    }
}

impl From<RenderError> for PathfindingError {
    fn from(err: RenderError) -> Self {
        PathfindingError::Render(err)
    }
}
