//! The game aggregate and its turn state machine.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use super::scoring::{score_plays, ScoreSheet};
use crate::cards::{build_shuffled_deck, Card, Pile, Suit, SuitMap};
use crate::core::{
    DrawSource, GameConfig, GameRng, Move, MoveAction, MoveError, MoveRecord, PlayerId, PlayerMap,
};
use crate::rules::{GameResult, RulesEngine};

/// A single two-player game.
///
/// Owns every card. Cards only ever move between the deck, the hands, the
/// play piles and the discard piles, so the full multiset never changes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    config: GameConfig,

    // Secret state
    deck: Pile,
    hands: PlayerMap<Pile>,

    // Board state
    plays: PlayerMap<SuitMap<Pile>>,
    discards: SuitMap<Pile>,

    current_turn: PlayerId,
    done: bool,
    history: Vec<MoveRecord>,
}

impl Game {
    /// Create a game with the default configuration and a deck shuffled
    /// from `seed`. Player 1 always moves first.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let config = GameConfig::default();
        let deck = build_shuffled_deck(config.pips, &mut GameRng::new(seed));
        Self::deal(config, deck)
    }

    /// Deal opening hands alternately from the top of `deck`.
    ///
    /// The caller guarantees the deck outlasts the deal.
    pub(crate) fn deal(config: GameConfig, deck: Pile) -> Self {
        let mut game = Self {
            config,
            deck,
            hands: PlayerMap::default(),
            plays: PlayerMap::default(),
            discards: SuitMap::default(),
            current_turn: PlayerId::Player1,
            done: false,
            history: Vec::new(),
        };

        for _ in 0..game.config.opening_hand_size {
            for player in PlayerId::all() {
                game.draw(player, DrawSource::Deck);
            }
        }
        game.done = game.deck.is_empty();

        debug!(
            hand_size = game.config.opening_hand_size,
            deck = game.deck.len(),
            "dealt opening hands"
        );
        game
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Whose turn it is.
    #[must_use]
    pub fn current_turn(&self) -> PlayerId {
        self.current_turn
    }

    /// True once the deck has been emptied by a draw.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Cards left in the deck. The order stays hidden.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.deck.len()
    }

    #[must_use]
    pub fn hand(&self, player: PlayerId) -> &Pile {
        &self.hands[player]
    }

    #[must_use]
    pub fn play_piles(&self, player: PlayerId) -> &SuitMap<Pile> {
        &self.plays[player]
    }

    #[must_use]
    pub fn play_pile(&self, player: PlayerId, suit: Suit) -> &Pile {
        &self.plays[player][suit]
    }

    #[must_use]
    pub fn discards(&self) -> &SuitMap<Pile> {
        &self.discards
    }

    #[must_use]
    pub fn discard_pile(&self, suit: Suit) -> &Pile {
        &self.discards[suit]
    }

    /// Number of moves applied so far.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.history.len() as u32
    }

    /// Every applied move, oldest first.
    #[must_use]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Every card in the game regardless of location, unordered.
    #[must_use]
    pub fn all_cards(&self) -> Vec<Card> {
        std::iter::once(&self.deck)
            .chain(self.hands.iter().map(|(_, hand)| hand))
            .chain(self.plays.iter().flat_map(|(_, piles)| piles.values()))
            .chain(self.discards.values())
            .flat_map(Pile::iter)
            .copied()
            .collect()
    }

    /// A player's current total score.
    #[must_use]
    pub fn score(&self, player: PlayerId) -> i32 {
        score_plays(&self.plays[player])
    }

    #[must_use]
    pub fn score_sheet(&self, player: PlayerId) -> ScoreSheet {
        ScoreSheet::from_plays(&self.plays[player])
    }

    /// `None` while the game is running, otherwise the winner by score.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        if !self.done {
            return None;
        }
        let p1 = self.score(PlayerId::Player1);
        let p2 = self.score(PlayerId::Player2);
        Some(match p1.cmp(&p2) {
            std::cmp::Ordering::Greater => GameResult::Winner(PlayerId::Player1),
            std::cmp::Ordering::Less => GameResult::Winner(PlayerId::Player2),
            std::cmp::Ordering::Equal => GameResult::Draw,
        })
    }

    // === Commands ===

    /// Validate a move without touching any state.
    ///
    /// Checks run in a fixed order and the first failure wins.
    pub fn check_move(&self, mv: &Move) -> Result<(), MoveError> {
        if self.done {
            return Err(MoveError::GameOver);
        }

        if mv.player != self.current_turn {
            return Err(MoveError::WrongTurn {
                expected: self.current_turn,
                got: mv.player,
            });
        }

        if !self.hands[mv.player].has(&mv.card) {
            return Err(MoveError::CardNotInHand(mv.card));
        }

        // Unknown action tags are rejected when a `MoveAction` is decoded.

        if mv.action == MoveAction::Play {
            if let Some(top) = self.plays[mv.player][mv.card.suit].blocking_card(&mv.card) {
                return Err(MoveError::CardTooLow {
                    card: mv.card,
                    top: *top,
                });
            }
        }

        if self.draw_pile(mv.draw).is_empty() {
            return Err(MoveError::EmptyDrawPile(mv.draw));
        }

        Ok(())
    }

    /// Validate and apply a move.
    ///
    /// On error nothing changes. On success the card leaves the hand, lands
    /// on its pile, a card is drawn, and the turn passes to the opponent.
    pub fn play_move(&mut self, mv: &Move) -> Result<(), MoveError> {
        if let Err(err) = self.check_move(mv) {
            trace!(%mv, %err, "move rejected");
            return Err(err);
        }

        let player = mv.player;
        let suit = mv.card.suit;
        let removed = self.hands[player].remove(&mv.card);
        debug_assert!(removed, "checked card {} missing from hand", mv.card);
        match mv.action {
            MoveAction::Play => self.plays[player][suit].add(mv.card),
            MoveAction::Discard => self.discards[suit].add(mv.card),
        }

        // The draw pile was non-empty when checked and has only grown since.
        let drawn = self
            .draw(player, mv.draw)
            .ok_or(MoveError::EmptyDrawPile(mv.draw))?;

        self.current_turn = player.other();
        self.history.push(MoveRecord {
            turn: self.history.len() as u32 + 1,
            mv: *mv,
            drawn,
        });
        debug!(
            %player,
            card = %mv.card,
            action = %mv.action,
            draw = %mv.draw,
            deck = self.deck.len(),
            "move applied"
        );

        if self.deck.is_empty() {
            self.done = true;
            info!(
                player1 = self.score(PlayerId::Player1),
                player2 = self.score(PlayerId::Player2),
                turns = self.history.len(),
                "game finished"
            );
        }

        Ok(())
    }

    /// Every move `check_move` would accept right now.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.done {
            return Vec::new();
        }

        let player = self.current_turn;
        let mut seen: Vec<Card> = Vec::new();
        let mut moves = Vec::new();
        for &card in self.hands[player].iter() {
            if seen.contains(&card) {
                continue;
            }
            seen.push(card);

            for action in MoveAction::ALL {
                for draw in DrawSource::all() {
                    let mv = Move::new(player, card, action, draw);
                    if self.check_move(&mv).is_ok() {
                        moves.push(mv);
                    }
                }
            }
        }
        moves
    }

    // === Helpers ===

    fn draw_pile(&self, source: DrawSource) -> &Pile {
        match source {
            DrawSource::Deck => &self.deck,
            DrawSource::Discard(suit) => &self.discards[suit],
        }
    }

    fn draw_pile_mut(&mut self, source: DrawSource) -> &mut Pile {
        match source {
            DrawSource::Deck => &mut self.deck,
            DrawSource::Discard(suit) => &mut self.discards[suit],
        }
    }

    /// Move the top card of `source` into `player`'s hand.
    fn draw(&mut self, player: PlayerId, source: DrawSource) -> Option<Card> {
        let card = self.draw_pile_mut(source).pop()?;
        self.hands[player].add(card);
        trace!(%player, %card, %source, "drew card");
        Some(card)
    }
}

impl RulesEngine for Game {
    type Move = Move;
    type Error = MoveError;

    fn current_player(&self) -> PlayerId {
        self.current_turn
    }

    fn check_move(&self, mv: &Move) -> Result<(), MoveError> {
        Game::check_move(self, mv)
    }

    fn apply_move(&mut self, mv: &Move) -> Result<(), MoveError> {
        self.play_move(mv)
    }

    fn legal_moves(&self) -> Vec<Move> {
        Game::legal_moves(self)
    }

    fn is_terminal(&self) -> Option<GameResult> {
        self.result()
    }
}
