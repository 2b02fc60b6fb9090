use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: usize,
    pub y: usize,
}

impl Cell {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit vector in grid coordinates, y growing downwards.
    pub fn vector(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Two directions are opposite iff their vectors sum to zero.
    pub fn is_opposite(&self, other: &Direction) -> bool {
        let (dx, dy) = self.vector();
        let (ox, oy) = other.vector();
        dx + ox == 0 && dy + oy == 0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EndReason {
    WallCollision,
    SelfCollision,
    BoardFull,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Ready,
    Running,
    Paused,
    GameOver,
    Win,
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            GameStatus::Ready => "Ready",
            GameStatus::Running => "Running",
            GameStatus::Paused => "Paused",
            GameStatus::GameOver => "Game Over",
            GameStatus::Win => "You Win",
        };
        f.write_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_opposite_pairs() {
        assert!(Direction::Up.is_opposite(&Direction::Down));
        assert!(Direction::Down.is_opposite(&Direction::Up));
        assert!(Direction::Left.is_opposite(&Direction::Right));
        assert!(Direction::Right.is_opposite(&Direction::Left));
    }

    #[test]
    fn test_is_opposite_rejects_self_and_perpendicular() {
        assert!(!Direction::Up.is_opposite(&Direction::Up));
        assert!(!Direction::Up.is_opposite(&Direction::Left));
        assert!(!Direction::Right.is_opposite(&Direction::Down));
    }

    #[test]
    fn test_status_strings() {
        assert_eq!(GameStatus::Ready.to_string(), "Ready");
        assert_eq!(GameStatus::Running.to_string(), "Running");
        assert_eq!(GameStatus::Paused.to_string(), "Paused");
        assert_eq!(GameStatus::GameOver.to_string(), "Game Over");
        assert_eq!(GameStatus::Win.to_string(), "You Win");
    }
}
