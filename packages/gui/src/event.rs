//! Types which may exist transiently to convey GUI events.


/// Mouse button identity.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Back,
    Forward,
    Other(u16),
}

impl MouseButton {
    /// Map a host button index, where 0 is left, 1 is right and 2 is middle.
    pub fn from_index(index: u16) -> Self {
        match index {
            0 => MouseButton::Left,
            1 => MouseButton::Right,
            2 => MouseButton::Middle,
            3 => MouseButton::Back,
            4 => MouseButton::Forward,
            n => MouseButton::Other(n),
        }
    }
}


#[test]
fn test_button_from_index() {
    assert_eq!(MouseButton::from_index(0), MouseButton::Left);
    assert_eq!(MouseButton::from_index(2), MouseButton::Middle);
    assert_eq!(MouseButton::from_index(9), MouseButton::Other(9));
}
