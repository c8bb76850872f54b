use dots_engine::{Engine, GameState};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmDots {
    inner: Engine,
}

#[wasm_bindgen]
impl WasmDots {
    #[wasm_bindgen(constructor)]
    pub fn new(cols: u8, rows: u8) -> Self {
        Self {
            inner: Engine::new(cols, rows),
        }
    }

    // -- Game actions (delegate to Engine) --

    /// Play an action for the player to move.
    /// Returns the number of captured cells, or -1 if the move is illegal.
    pub fn play(&mut self, action: usize) -> i32 {
        match self.inner.play(action) {
            Ok(captured) => captured as i32,
            Err(_) => -1,
        }
    }

    pub fn is_legal(&self, x: u8, y: u8) -> bool {
        self.inner.is_legal((x, y))
    }

    pub fn legal_actions(&self) -> Vec<u32> {
        self.inner
            .legal_actions()
            .into_iter()
            .map(|a| a as u32)
            .collect()
    }

    pub fn terminal(&self) -> bool {
        self.inner.terminal()
    }

    pub fn terminal_score(&self) -> i8 {
        self.inner.terminal_score()
    }

    // -- Engine accessors (WASM-friendly types) --

    pub fn cols(&self) -> u8 {
        self.inner.cols()
    }

    pub fn rows(&self) -> u8 {
        self.inner.rows()
    }

    pub fn current_player(&self) -> i8 {
        self.inner.current_player().to_int()
    }

    pub fn last_capture(&self) -> usize {
        self.inner.last_capture()
    }

    pub fn move_count(&self) -> usize {
        self.inner.moves().len()
    }

    pub fn stage(&self) -> String {
        self.inner.stage().to_string()
    }

    /// Packed status flags per cell, in action order.
    pub fn board(&self) -> js_sys::Uint8Array {
        js_sys::Uint8Array::from(self.inner.board().flags().as_slice())
    }

    // -- Feature planes --

    pub fn feature(&self) -> js_sys::Float32Array {
        js_sys::Float32Array::from(self.inner.feature().as_slice())
    }

    pub fn observation(&self) -> js_sys::Int32Array {
        js_sys::Int32Array::from(self.inner.observation().as_slice())
    }

    // -- JSON serialization (WASM boundary) --

    pub fn state_json(&self) -> String {
        serde_json::to_string(&self.inner.game_state()).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn load_state_json(&mut self, json: &str) -> bool {
        let Ok(state) = serde_json::from_str::<GameState>(json) else {
            return false;
        };
        match Engine::from_game_state(state) {
            Ok(engine) => {
                self.inner = engine;
                true
            }
            Err(_) => false,
        }
    }

    pub fn moves_json(&self) -> String {
        serde_json::to_string(self.inner.moves()).unwrap_or_else(|_| "[]".to_string())
    }

    /// Returns JSON array of [x, y] pairs for the active stones of `player`
    /// (1 = Black, -1 = Red).
    pub fn trace_json(&self, player: i8) -> String {
        let Some(player) = dots_engine::Player::from_int(player) else {
            return "[]".into();
        };
        let mut pts: Vec<[u8; 2]> = self
            .inner
            .board()
            .trace(player)
            .iter()
            .map(|&(x, y)| [x, y])
            .collect();
        pts.sort_unstable();
        serde_json::to_string(&pts).unwrap_or_else(|_| "[]".into())
    }
}
