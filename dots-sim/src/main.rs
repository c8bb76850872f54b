use dots_engine::playout::random_game_with;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct GameSummary {
    seed: u64,
    moves: usize,
    captures: usize,
    largest_capture: usize,
    black_captured: u32,
    red_captured: u32,
    score: i8,
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    match std::env::var(key) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            tracing::warn!("Ignoring unparsable {key}={raw}");
            default
        }),
        Err(_) => default,
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dots_sim=info,dots_engine=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cols: u8 = env_or("DOTS_COLS", 5);
    let rows: u8 = env_or("DOTS_ROWS", 5);
    let games: u64 = env_or("DOTS_GAMES", 10);
    let seed: u64 = env_or("DOTS_SEED", 1);
    tracing::info!("Playing {games} random games on {cols}x{rows} from seed {seed}");

    let mut wins = [0usize; 3];
    for game in 0..games {
        let game_seed = seed.wrapping_add(game);
        let mut captures = 0;
        let mut largest_capture = 0;
        let engine = random_game_with(cols, rows, game_seed, |engine, captured| {
            if captured > 0 {
                captures += 1;
                largest_capture = largest_capture.max(captured);
                tracing::debug!(
                    "game {game}: move {} captured {captured}",
                    engine.moves().len()
                );
            }
        });

        let score = engine.terminal_score();
        wins[(score + 1) as usize] += 1;
        let summary = GameSummary {
            seed: game_seed,
            moves: engine.moves().len(),
            captures,
            largest_capture,
            black_captured: engine.captures().black,
            red_captured: engine.captures().red,
            score,
        };
        match serde_json::to_string(&summary) {
            Ok(line) => println!("{line}"),
            Err(e) => tracing::error!("Failed to serialize game {game}: {e}"),
        }
    }

    tracing::info!(
        "Black {} / Red {} / drawn {}",
        wins[2],
        wins[0],
        wins[1]
    );
}
