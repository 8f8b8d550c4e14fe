use minado_core::GameId;
use rand::Rng;

/// Alphabet for shareable game codes: digits plus uppercase letters, no
/// lookalike filtering since codes are copied, not transcribed.
pub const GAME_CODE_ALPHABET: &[u8] = b"1234567890ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const GAME_CODE_LENGTH: usize = 6;

/// Draws a short human-shareable game code. Uniqueness is negotiated against
/// the store by the caller; collisions here are expected and retried there.
pub fn random_game_code<R: Rng + ?Sized>(rng: &mut R) -> GameId {
    let code = (0..GAME_CODE_LENGTH)
        .map(|_| GAME_CODE_ALPHABET[rng.random_range(0..GAME_CODE_ALPHABET.len())] as char)
        .collect();
    GameId(code)
}
