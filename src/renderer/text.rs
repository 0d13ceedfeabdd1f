//! Number formatting for the HUD

/// Decimal digits of `value`, left-padded with zeros to at least `digits` wide
///
/// Wider values are printed in full.
pub fn zero_padded(mut value: u32, digits: usize) -> String {
    // Least significant first
    let mut extracted = Vec::with_capacity(10);
    loop {
        extracted.push((value % 10) as u8);
        value /= 10;
        if value == 0 {
            break;
        }
    }
    while extracted.len() < digits {
        extracted.push(0);
    }
    extracted.iter().rev().map(|&d| char::from(b'0' + d)).collect()
}
