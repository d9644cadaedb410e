use std::f32::consts::{FRAC_PI_2, PI, TAU};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use tiny_raycaster::core::maze::DEFAULT_MAP;
use tiny_raycaster::error::AtlasError;
use tiny_raycaster::render::casters::cast_ray;
use tiny_raycaster::render::render3d::column_height;
use tiny_raycaster::{
    Color, Framebuffer, Player, RenderConfig, TextureAtlas, Tile, TileMap, render_frame,
};

fn scenario_player() -> Player {
    Player::new(3.456, 2.345, 1.523).with_fov(PI / 3.0)
}

fn render(player: &Player) -> Framebuffer {
    let cfg = RenderConfig::default();
    let maze = TileMap::default_map().unwrap();
    let atlas = TextureAtlas::checker(6, 64);
    let mut fb = Framebuffer::new(cfg.window_width, cfg.window_height, cfg.background);
    render_frame(&mut fb, &maze, player, &atlas, &cfg).unwrap();
    fb
}

// ── Scenario ──────────────────────────────────────────────────────────────

#[test]
fn first_column_of_the_default_scene_hits_a_declared_wall() {
    let cfg = RenderConfig::default();
    let maze = TileMap::default_map().unwrap();
    let player = scenario_player();
    let a = player.ray_angle(0, cfg.view_width());

    let hit = cast_ray(&maze, &player, a, &cfg).expect("leftmost ray escaped the map");
    assert!(DEFAULT_MAP.contains(hit.impact.to_char()));
    assert_ne!(hit.impact.to_char(), ' ');

    let h = column_height(hit.distance, a, player.a, cfg.window_height, cfg.min_depth);
    assert!(h > 0 && h <= cfg.window_height, "column height {h}");
}

#[test]
fn default_scene_draws_both_halves() {
    let cfg = RenderConfig::default();
    let fb = render(&scenario_player());
    let atlas = TextureAtlas::checker(6, 64);

    // top-left map cell is a '0' wall
    assert_eq!(fb.get_pixel(5, 5), Some(atlas.swatch(0)));
    // the camera's own cell on the preview is crossed by rays
    assert_eq!(fb.get_pixel(110, 75), Some(Color::RAY_GRAY));
    // every view column has a wall across the horizon
    let mid = cfg.window_height / 2;
    for i in 0..cfg.view_width() {
        assert_ne!(fb.get_pixel(cfg.view_x0() + i, mid), Some(cfg.background), "column {i}");
    }
}

#[test]
fn rendering_twice_is_byte_identical() {
    let player = scenario_player();
    let a = render(&player);
    let b = render(&player);
    assert!(a == b);

    let (mut ppm_a, mut ppm_b) = (Vec::new(), Vec::new());
    a.write_ppm(&mut ppm_a).unwrap();
    b.write_ppm(&mut ppm_b).unwrap();
    assert_eq!(ppm_a, ppm_b);
}

// ── Ray marching properties ───────────────────────────────────────────────

#[test]
fn rays_never_escape_an_enclosed_map() {
    let cfg = RenderConfig::default();
    let maze = TileMap::default_map().unwrap();
    let mut rng = StdRng::seed_from_u64(7);

    let mut checked = 0;
    while checked < 300 {
        let x = rng.gen_range(1.0..15.0f32);
        let y = rng.gen_range(1.0..15.0f32);
        if maze.tile_at_point(x, y) != Some(Tile::Empty) {
            continue;
        }
        let a = rng.gen_range(0.0..TAU);
        let player = Player::new(x, y, a);
        let hit = cast_ray(&maze, &player, a, &cfg);
        assert!(hit.is_some(), "ray from ({x}, {y}) at {a} escaped");
        assert!(hit.unwrap().distance < cfg.max_depth);
        checked += 1;
    }
}

#[test]
fn flat_wall_renders_with_uniform_height() {
    let cfg = RenderConfig::default();
    let maze = TileMap::parse(
        10,
        8,
        concat!(
            "0000000000",
            "1        1",
            "1        1",
            "1        1",
            "1        1",
            "1        1",
            "1        1",
            "1111111111",
        ),
    )
    .unwrap();
    // wall face at y = 1, camera 5.5 cells away looking straight at it
    let player = Player::new(5.0, 6.5, -FRAC_PI_2).with_fov(PI / 3.0);
    let expected = (cfg.window_height as f32 / 5.5) as usize;

    for i in 0..cfg.view_width() {
        let a = player.ray_angle(i, cfg.view_width());
        let hit = cast_ray(&maze, &player, a, &cfg).unwrap();
        assert_eq!(hit.impact.0, 0, "column {i} hit the side wall");
        let h = column_height(hit.distance, a, player.a, cfg.window_height, cfg.min_depth);
        assert_eq!(h, expected, "column {i} bulges");
    }
}

#[test]
fn camera_on_a_cell_boundary_is_deterministic() {
    let cfg = RenderConfig::default();
    let maze = TileMap::default_map().unwrap();
    // x = 1.0 is the edge between the '1' wall at column 0 and open floor
    let player = Player::new(1.0, 1.5, PI).with_fov(PI / 3.0);

    let a = player.ray_angle(cfg.view_width() / 2, cfg.view_width());
    let first = cast_ray(&maze, &player, a, &cfg).unwrap();
    for _ in 0..10 {
        assert_eq!(cast_ray(&maze, &player, a, &cfg), Some(first));
    }
    assert_eq!(render(&player), render(&player));
}

#[test]
fn camera_inside_a_wall_still_renders() {
    let cfg = RenderConfig::default();
    let player = Player::new(0.5, 0.5, 0.0);
    let fb = render(&player);
    // every column is a clipped full-height slice
    for y in [0, cfg.window_height / 2, cfg.window_height - 1] {
        assert_ne!(fb.get_pixel(cfg.view_x0(), y), Some(cfg.background));
    }
}

#[test]
fn rays_leaving_an_open_map_stay_off_the_first_person_view() {
    let cfg = RenderConfig { window_width: 16, window_height: 8, ..RenderConfig::default() };
    let maze = TileMap::parse(
        8,
        4,
        concat!(
            "00000000",
            "        ",
            "        ",
            "00000000",
        ),
    )
    .unwrap();
    let atlas = TextureAtlas::checker(1, 8);
    let player = Player::new(1.5, 2.0, 0.0);
    let mut fb = Framebuffer::new(cfg.window_width, cfg.window_height, cfg.background);

    let stats = render_frame(&mut fb, &maze, &player, &atlas, &cfg).unwrap();
    assert!(stats.misses > 0, "no ray left the map");
    for x in cfg.view_x0()..cfg.window_width {
        for y in 0..cfg.window_height {
            assert_ne!(fb.get_pixel(x, y), Some(Color::RAY_GRAY), "ray sample at ({x}, {y})");
        }
    }
}

// ── Asset I/O ─────────────────────────────────────────────────────────────

#[test]
fn atlas_loads_from_an_rgba_png() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("walls.png");
    let img = image::RgbaImage::from_fn(12, 4, |x, y| image::Rgba([x as u8, y as u8, 7, 200]));
    img.save(&path).unwrap();

    let atlas = TextureAtlas::load(&path).unwrap();
    assert_eq!(atlas.texture_count(), 3);
    assert_eq!(atlas.texture_size(), 4);
    assert_eq!(atlas.get_pixel_color(2, 1, 3), Color::new(9, 3, 7, 200));
}

#[test]
fn rgb_png_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("walls.png");
    image::RgbImage::new(8, 4).save(&path).unwrap();

    assert!(matches!(TextureAtlas::load(&path), Err(AtlasError::ChannelCount(3))));
}

#[test]
fn non_square_strip_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("walls.png");
    image::RgbaImage::new(10, 4).save(&path).unwrap();

    assert!(matches!(
        TextureAtlas::load(&path),
        Err(AtlasError::NotSquareStrip { width: 10, height: 4 })
    ));
}

#[test]
fn missing_atlas_is_a_load_failure() {
    let dir = tempfile::tempdir().unwrap();
    let err = TextureAtlas::load(dir.path().join("nope.png")).unwrap_err();
    assert!(matches!(err, AtlasError::Decode { .. }));
}

#[test]
fn frame_is_saved_as_ppm() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.ppm");
    let fb = render(&scenario_player());
    fb.save_ppm(&path).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    let header = b"P6\n1024 512\n255\n";
    assert_eq!(&bytes[..header.len()], header);
    assert_eq!(bytes.len(), header.len() + 1024 * 512 * 3);
}
