use eframe::{run_native, App, CreationContext, Frame, NativeOptions};
use egui::Context;

const APP_NAME: &str = "Algorithm Visualizer";

mod app;

pub struct AlgoVizApp {
    app: app::App,
}

impl AlgoVizApp {
    fn new(_: &CreationContext<'_>) -> Self {
        Self {
            app: app::App::new(),
        }
    }
}

impl App for AlgoVizApp {
    fn update(&mut self, ctx: &Context, _: &mut Frame) {
        self.app.update(ctx);
    }
}

fn main() -> eframe::Result {
    env_logger::init();

    let native_options = NativeOptions::default();
    run_native(
        APP_NAME,
        native_options,
        Box::new(|cc| Ok(Box::new(AlgoVizApp::new(cc)))),
    )
}
