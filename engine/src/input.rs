/// Keyboard keys, carrying raylib's key codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum Key {
    Space = 32,
    A = 65,
    D = 68,
    P = 80,
    Q = 81,
    R = 82,
    S = 83,
    W = 87,
    Escape = 256,
    Enter = 257,
    Right = 262,
    Left = 263,
    Down = 264,
    Up = 265,
}

impl Key {
    pub fn code(self) -> i32 {
        self as i32
    }
}
