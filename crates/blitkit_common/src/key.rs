/// Logical keyboard key shared by the frontends and the input tracker.
///
/// Frontends map their own keycodes to `Option<Key>`; anything they cannot
/// express simply never reaches the tracker. Keypad digits are folded onto
/// `Num0`..`Num9`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Key {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,

    Num0,
    Num1,
    Num2,
    Num3,
    Num4,
    Num5,
    Num6,
    Num7,
    Num8,
    Num9,

    Up,
    Down,
    Left,
    Right,

    Space,
    Enter,
    Escape,
}
