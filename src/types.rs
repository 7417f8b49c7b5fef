/// Layer action triggered from the action bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Top,
    Up,
    Down,
    Bottom,
}

impl MoveDirection {
    pub const ALL: [MoveDirection; 4] = [
        MoveDirection::Top,
        MoveDirection::Up,
        MoveDirection::Down,
        MoveDirection::Bottom,
    ];

    pub fn to_kebab_case(&self) -> &'static str {
        match self {
            MoveDirection::Top => "top",
            MoveDirection::Up => "up",
            MoveDirection::Down => "down",
            MoveDirection::Bottom => "bottom",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            MoveDirection::Top => "Bring to front",
            MoveDirection::Up => "Bring forward",
            MoveDirection::Down => "Send backward",
            MoveDirection::Bottom => "Send to back",
        }
    }

    /// SVG path data for the 16x16 action icon
    pub fn icon_path(&self) -> &'static str {
        match self {
            MoveDirection::Top => "M3 2h10 M8 14V5 M4 9l4-4 4 4",
            MoveDirection::Up => "M8 14V2 M3 7l5-5 5 5",
            MoveDirection::Down => "M8 2v12 M3 9l5 5 5-5",
            MoveDirection::Bottom => "M3 14h10 M8 2v9 M4 7l4 4 4-4",
        }
    }
}
