//=========================================================================
// DotDot Entry Point
//=========================================================================

use env_logger::Env;

use dotdot::game::dots::{DotConfig, DotField};
use dotdot::game::{
    GameConfig, LostScene, PlayScene, RoundHandoff, SceneId, TitleScene, WonScene,
    SCREEN_HEIGHT, SCREEN_WIDTH, WINDOW_TITLE,
};
use dotdot::EngineBuilder;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    EngineBuilder::<SceneId, RoundHandoff>::new()
        .with_tps(60.0)
        .with_window(WINDOW_TITLE, SCREEN_WIDTH, SCREEN_HEIGHT)
        .build()
        .init(|systems| {
            let field = DotField::new(
                SCREEN_WIDTH as f32,
                SCREEN_HEIGHT as f32,
                DotConfig::default(),
            );

            systems
                .director
                .register_scene(SceneId::Title, Box::new(TitleScene::new()));
            systems
                .director
                .register_scene(SceneId::Game, Box::new(PlayScene::new(field, GameConfig::default())));
            systems
                .director
                .register_scene(SceneId::Lost, Box::new(LostScene::new()));
            systems
                .director
                .register_scene(SceneId::Won, Box::new(WonScene::new()));

            systems.director.set_initial(SceneId::Title);
        })
        .run();
}
