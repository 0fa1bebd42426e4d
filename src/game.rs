use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::chess::setup::Setup;
use crate::config::GameConfig;
use crate::engine::{MoveEngine, MoveOutcome};
use crate::error::EngineError;
use crate::model::{Board, Entanglements, Pieces};
use crate::snapshot::{Move, Snapshot};

/// One room's game: the board/pieces/entanglements triple plus the engine that mutates it.
///
/// Moves go through `&mut self`, so a room applies them strictly one at a time; separate
/// rooms share nothing and can live on separate threads.
#[derive(Debug, Clone)]
pub struct Game {
    pub board: Board,
    pub pieces: Pieces,
    pub entanglements: Entanglements,
    engine: MoveEngine<StdRng>,
}

impl Game {
    pub fn new(setup: Setup, config: GameConfig) -> Self {
        let (board, pieces, entanglements) = setup.into_parts();
        Self::from_parts(board, pieces, entanglements, config)
    }

    /// Rebuild a game from a decoded snapshot.
    pub fn from_snapshot(snapshot: Snapshot, config: GameConfig) -> Result<Self, EngineError> {
        let (board, pieces, entanglements) = snapshot.restore()?;
        Ok(Self::from_parts(board, pieces, entanglements, config))
    }

    pub fn from_parts(
        board: Board,
        pieces: Pieces,
        entanglements: Entanglements,
        config: GameConfig,
    ) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            board,
            pieces,
            entanglements,
            engine: MoveEngine::new(config.engine, rng),
        }
    }

    pub fn apply_move(&mut self, mv: Move) -> Result<MoveOutcome, EngineError> {
        self.engine.apply_move(
            &mut self.board,
            &mut self.entanglements,
            &mut self.pieces,
            mv.from,
            mv.to,
        )
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.board, &self.pieces, &self.entanglements)
    }

    #[inline]
    pub fn engine(&self) -> &MoveEngine<StdRng> {
        &self.engine
    }
}
