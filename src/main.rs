use tilesprite::{
    pattern, AnimatedTileSheet, Assets, Color, Config, Context, DrawCommand, DrawOption, Drawable,
    StaticImage, StaticLine, TileSheet, Vec2,
};

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let config = Config::from_env();

    let mut assets = Assets::new();
    let atlas = assets.register_image(96, 96)?;
    let pixel = assets.register_image(1, 1)?;
    let explosion_strip = assets.register_image(256, 32)?;

    let mut scene: Vec<Box<dyn Drawable>> = Vec::new();

    let mut backdrop = StaticImage::full(atlas);
    backdrop.visual_mut().layer = 0.0;
    scene.push(Box::new(backdrop));

    let mut frame = TileSheet::from_grid(atlas, 3, 3)?;
    frame.set_index(4);
    scene.push(Box::new(frame));

    let mut laser = StaticLine::between(
        pixel,
        pixel.bounds(),
        Vec2::new(10.0, 10.0),
        Vec2::new(90.0, 50.0),
    );
    laser.visual_mut().color = Color::new(1.0, 0.2, 0.2, 1.0);
    laser.visual_mut().layer = 0.9;
    scene.push(Box::new(laser));

    let explosion = AnimatedTileSheet::new(
        TileSheet::from_grid(explosion_strip, 8, 1)?,
        pattern::range(8),
        0.25,
        false,
        config.tick_rate,
    )?;
    scene.push(Box::new(explosion));

    if let Ok(path) = std::env::var("TILESPRITE_FONT") {
        let font = assets.register_font_file(&path)?;
        scene.push(Box::new(tilesprite::TextLabel::new("tilesprite", font)));
    }

    let mut context = Context::with_config(&config);
    let ticks = config.tick_rate.per_second() as usize / 2;
    for tick in 0..ticks {
        context.begin_frame();
        scene.retain_mut(|drawable| {
            if drawable.update() {
                log::info!("tick {}: animation finished, removing", tick);
                return false;
            }
            true
        });
        for drawable in &scene {
            drawable.draw(
                &mut context,
                DrawOption::default().with_position(Vec2::new(100.0, 100.0)),
            )?;
        }
    }

    for command in context.sorted_by_layer() {
        match command {
            DrawCommand::Image { image, src, params } => log::info!(
                "image {} src={:?} layer={:.2} rotation={:.3}",
                image.id(),
                src,
                params.layer,
                params.rotation
            ),
            DrawCommand::Text { text, params, .. } => {
                log::info!("text {:?} layer={:.2}", text, params.layer)
            }
        }
    }
    log::info!(
        "{} sprite instances ({} bytes)",
        context.instances().len(),
        tilesprite::instances_as_bytes(&context.instances()).len()
    );
    Ok(())
}
