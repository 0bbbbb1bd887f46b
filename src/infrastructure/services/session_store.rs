use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tokio::sync::{Mutex, MutexGuard};

use crate::domain::entities::GameSession;
use crate::domain::value_objects::Piles;

/// Session together with the random source its computer opponent draws from
pub struct SessionSlot {
    pub session: GameSession,
    pub rng: ChaCha8Rng,
}

/// Owner of the server's game session.
///
/// Use cases hold the lock for their whole read-validate-mutate sequence,
/// so two requests never interleave mutations of the piles.
pub struct SessionStore {
    slot: Mutex<SessionSlot>,
}

impl SessionStore {
    pub fn new(initial_piles: Piles, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => ChaCha8Rng::seed_from_u64(s),
            None => ChaCha8Rng::from_entropy(),
        };
        Self {
            slot: Mutex::new(SessionSlot {
                session: GameSession::new(initial_piles),
                rng,
            }),
        }
    }

    /// Exclusive access to the session and its RNG
    pub async fn lock(&self) -> MutexGuard<'_, SessionSlot> {
        self.slot.lock().await
    }

    /// Copy of the current session
    pub async fn snapshot(&self) -> GameSession {
        self.slot.lock().await.session.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{default_piles, Move, Player, Turn};

    #[tokio::test]
    async fn test_mutations_visible_to_next_lock() {
        let store = SessionStore::new(default_piles(), Some(1));

        {
            let mut slot = store.lock().await;
            slot.session.play(Player::Human, Move::new(0, 2)).unwrap();
        }

        let session = store.snapshot().await;
        assert_eq!(session.piles.as_slice(), &[1, 5, 2]);
        assert_eq!(session.turn, Turn::Ai);
    }
}
