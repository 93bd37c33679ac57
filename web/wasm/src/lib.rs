use core::time::Duration;

use colormatch::{
    Card, Color, Command, ComputerMove, ComputerScheduler, Game, GameOptions, GameState,
    ManualClock, MemoryStore, Participant, ScoreStore, Snapshot, BEST_TIME_KEY,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Date)]
    fn now() -> f64;
}

#[wasm_bindgen]
pub struct WasmGame {
    game: Game<ManualClock>,
    clock: ManualClock,
    scheduler: ComputerScheduler,
    best: MemoryStore,
}

#[wasm_bindgen]
impl WasmGame {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Result<WasmGame, JsValue> {
        let clock = ManualClock::new();
        clock.set(js_now());
        let options = GameOptions::default();
        let scheduler = ComputerScheduler::from_options(&options);
        let game = Game::with_clock(options, seed as u64, clock.clone()).map_err(js_err)?;

        Ok(Self {
            game,
            clock,
            scheduler,
            best: MemoryStore::new(),
        })
    }

    pub fn start_round(&mut self) -> Result<JsValue, JsValue> {
        self.tick();
        self.scheduler.cancel();
        let snapshot = self.game.start_round();
        self.render(&snapshot)
    }

    /// Plays the card at `index`. Returns `false` if the move was rejected.
    pub fn play(&mut self, index: u32) -> bool {
        self.send(Command::PlayCard(index as usize))
    }

    pub fn draw(&mut self) -> bool {
        self.send(Command::Draw)
    }

    pub fn restart(&mut self) -> bool {
        self.send(Command::Restart)
    }

    /// Runs the computer's turn once its pacing delay has passed.
    ///
    /// Call this from a timer; it returns the computer's move, or `null` if
    /// nothing happened yet.
    pub fn poll_computer(&mut self) -> Result<JsValue, JsValue> {
        self.tick();
        match self.scheduler.poll(&mut self.game) {
            Some(turn) => to_js_value(&JsComputerMove::from(turn)),
            None => Ok(JsValue::NULL),
        }
    }

    pub fn computer_delay_ms(&self) -> u32 {
        self.scheduler.delay().as_millis() as u32
    }

    /// Seeds the best time from the host's persistent storage.
    pub fn load_best_time(&mut self, secs: f64) {
        if let Some(best) = stored_secs(secs) {
            self.best.set(BEST_TIME_KEY, best);
        }
    }

    pub fn best_time(&self) -> Option<f64> {
        self.best.get(BEST_TIME_KEY).map(|best| best.as_secs_f64())
    }

    /// Records the winning time. Returns the new best if it improved, so the
    /// host knows to persist it.
    pub fn record_best(&mut self) -> Option<f64> {
        self.game
            .record_best(&mut self.best)
            .filter(|result| result.improved())
            .map(|result| result.current.as_secs_f64())
    }

    pub fn snapshot(&mut self) -> Result<JsValue, JsValue> {
        self.tick();
        let snapshot = self.game.snapshot();
        self.render(&snapshot)
    }
}

impl WasmGame {
    fn tick(&self) {
        self.clock.set(js_now());
    }

    fn send(&mut self, command: Command) -> bool {
        self.tick();
        match self.game.dispatch(command) {
            Ok(snapshot) => {
                if snapshot.state == GameState::ComputerTurn {
                    self.scheduler.arm(js_now());
                } else {
                    self.scheduler.cancel();
                }
                true
            }
            Err(_) => false,
        }
    }

    fn render(&self, snapshot: &Snapshot) -> Result<JsValue, JsValue> {
        let view = JsSnapshot {
            state: state_to_str(snapshot.state),
            turn: snapshot.turn().map(participant_to_str),
            winner: snapshot.winner().map(participant_to_str),
            player_hand: snapshot
                .player_hand
                .iter()
                .copied()
                .enumerate()
                .map(|(index, card)| JsCard::from_card(card, snapshot.top, index as u32))
                .collect(),
            computer_cards: snapshot.computer_cards as u32,
            top: snapshot.top.map(|card| JsCard::from_card(card, None, 0)),
            deck_remaining: snapshot.deck_remaining as u32,
            elapsed_secs: snapshot.elapsed.as_secs_f64(),
            best_secs: self.best_time(),
        };
        to_js_value(&view)
    }
}

#[derive(Serialize)]
struct JsSnapshot {
    state: &'static str,
    turn: Option<&'static str>,
    winner: Option<&'static str>,
    player_hand: Vec<JsCard>,
    computer_cards: u32,
    top: Option<JsCard>,
    deck_remaining: u32,
    elapsed_secs: f64,
    best_secs: Option<f64>,
}

#[derive(Serialize)]
struct JsCard {
    index: u32,
    color: &'static str,
    value: u8,
    playable: bool,
}

impl JsCard {
    fn from_card(card: Card, top: Option<Card>, index: u32) -> Self {
        Self {
            index,
            color: color_to_str(card.color),
            value: card.value,
            playable: top.is_some_and(|top| card.matches(&top)),
        }
    }
}

#[derive(Serialize)]
struct JsComputerMove {
    drawn: bool,
    played: Option<JsCard>,
}

impl From<ComputerMove> for JsComputerMove {
    fn from(turn: ComputerMove) -> Self {
        Self {
            drawn: turn.drawn.is_some(),
            played: turn.played.map(|card| JsCard::from_card(card, None, 0)),
        }
    }
}

fn color_to_str(color: Color) -> &'static str {
    match color {
        Color::Red => "red",
        Color::Yellow => "yellow",
        Color::Green => "green",
        Color::Blue => "blue",
    }
}

fn participant_to_str(participant: Participant) -> &'static str {
    match participant {
        Participant::Player => "Player",
        Participant::Computer => "Computer",
    }
}

fn state_to_str(state: GameState) -> &'static str {
    match state {
        GameState::NotStarted => "NotStarted",
        GameState::PlayerTurn => "PlayerTurn",
        GameState::ComputerTurn => "ComputerTurn",
        GameState::PlayerWon => "PlayerWon",
        GameState::ComputerWon => "ComputerWon",
    }
}

/// Reads a time the host kept in storage. Negative, NaN, or out-of-range
/// values are dropped.
fn stored_secs(secs: f64) -> Option<Duration> {
    Duration::try_from_secs_f64(secs).ok()
}

fn js_now() -> Duration {
    Duration::try_from_secs_f64(now() / 1000.0).unwrap_or_default()
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
