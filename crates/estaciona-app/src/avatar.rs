//! Avatar colors for the vehicle list
//!
//! A vehicle's avatar color is a pure function of its nickname, so the
//! same nickname always renders the same color.

/// Fixed palette: blue, green, orange, red, purple, pink.
pub const PALETTE: [(u8, u8, u8); 6] = [
    (0x00, 0x7A, 0xFF),
    (0x34, 0xC7, 0x59),
    (0xFF, 0x95, 0x00),
    (0xFF, 0x3B, 0x30),
    (0x58, 0x56, 0xD6),
    (0xFF, 0x2D, 0x55),
];

/// Palette index for a nickname, via the classic `31 * hash + code`
/// string hash on wrapping i32.
pub fn color_index(nickname: &str) -> usize {
    let mut hash: i32 = 0;
    for ch in nickname.chars() {
        let code = ch as u32 as i32;
        hash = code.wrapping_add(hash.wrapping_shl(5).wrapping_sub(hash));
    }
    hash.unsigned_abs() as usize % PALETTE.len()
}

/// RGB color for a nickname.
pub fn color(nickname: &str) -> (u8, u8, u8) {
    PALETTE[color_index(nickname)]
}

/// The uppercased initial shown inside the avatar.
pub fn initial(nickname: &str) -> String {
    nickname
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_default()
}
