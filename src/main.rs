// main.rs
use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tiny_raycaster::{Framebuffer, Player, RenderConfig, TextureAtlas, TileMap, render_frame};

const TEXTURE_PATH: &str = "./walltext.png";
const OUTPUT_PATH: &str = "./out.ppm";

const PLAYER_X: f32 = 3.456;
const PLAYER_Y: f32 = 2.345;
const PLAYER_A: f32 = 1.523;
const FOV: f32 = std::f32::consts::PI / 3.0;

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cfg = RenderConfig::default();
    let maze = TileMap::default_map().context("built-in map is malformed")?;
    let atlas = TextureAtlas::load(TEXTURE_PATH).context("failed to load wall textures")?;

    let player = Player::new(PLAYER_X, PLAYER_Y, PLAYER_A).with_fov(FOV);
    let mut framebuffer = Framebuffer::new(cfg.window_width, cfg.window_height, cfg.background);

    let stats = render_frame(&mut framebuffer, &maze, &player, &atlas, &cfg)
        .context("scene failed validation")?;

    framebuffer.save_ppm(OUTPUT_PATH)?;
    info!(path = OUTPUT_PATH, hits = stats.hits, misses = stats.misses, "frame written");
    Ok(())
}
