use crate::engine::Engine;

// ---------------------------------------------------------------------------
// Xorshift128 PRNG (deterministic, no external crate)
// ---------------------------------------------------------------------------

pub struct Rng {
    s: [u32; 4],
}

impl Rng {
    pub fn new(seed: u64) -> Self {
        // Split seed into four nonzero 32-bit words
        let mut s = [
            (seed & 0xFFFF_FFFF) as u32,
            (seed >> 32) as u32,
            seed.wrapping_mul(6364136223846793005) as u32,
            (seed.wrapping_mul(6364136223846793005) >> 32) as u32,
        ];
        for v in &mut s {
            if *v == 0 {
                *v = 0xDEAD_BEEF;
            }
        }
        Self { s }
    }

    pub fn next_u32(&mut self) -> u32 {
        let t = self.s[3];
        let mut s = self.s[0];
        self.s[3] = self.s[2];
        self.s[2] = self.s[1];
        self.s[1] = s;
        s ^= s << 11;
        s ^= s >> 8;
        self.s[0] = s ^ t ^ (t >> 19);
        self.s[0]
    }

    pub fn range(&mut self, n: usize) -> usize {
        (self.next_u32() as usize) % n
    }
}

// ---------------------------------------------------------------------------
// Random self-play
// ---------------------------------------------------------------------------

/// Play uniformly random legal actions until the board is full.
///
/// `inspect` sees the engine after every move together with the capture
/// size of that move.
pub fn random_game_with<F>(cols: u8, rows: u8, seed: u64, mut inspect: F) -> Engine
where
    F: FnMut(&Engine, usize),
{
    let mut engine = Engine::new(cols, rows);
    let mut rng = Rng::new(seed);

    loop {
        let legal = engine.legal_actions();
        if legal.is_empty() {
            break;
        }
        let action = legal[rng.range(legal.len())];
        // Only empty cells are offered, so the move cannot be rejected.
        let Ok(captured) = engine.play(action) else {
            break;
        };
        inspect(&engine, captured);
    }

    engine
}

pub fn random_game(cols: u8, rows: u8, seed: u64) -> Engine {
    random_game_with(cols, rows, seed, |_, _| {})
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rng_is_deterministic() {
        let mut a = Rng::new(42);
        let mut b = Rng::new(42);
        for _ in 0..100 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn rng_zero_seed_still_moves() {
        let mut rng = Rng::new(0);
        let first = rng.next_u32();
        assert_ne!(first, rng.next_u32());
    }

    #[test]
    fn range_stays_in_bounds() {
        let mut rng = Rng::new(7);
        for _ in 0..1000 {
            assert!(rng.range(13) < 13);
        }
    }

    #[test]
    fn random_game_runs_to_terminal() {
        let engine = random_game(4, 4, 3);
        assert!(engine.terminal());
        assert!(engine.legal_actions().is_empty());
        assert!(engine.moves().len() <= 16);
    }

    #[test]
    fn random_game_is_reproducible() {
        let a = random_game(4, 4, 11);
        let b = random_game(4, 4, 11);
        assert_eq!(a.moves(), b.moves());
        assert_eq!(a.board(), b.board());
    }
}
