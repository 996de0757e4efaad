use env_logger::Env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let presenter_factory = mandelbrot_explorer::PixelsPresenterFactory::new();
    let config = mandelbrot_explorer::ExplorerConfig::default();
    let command = mandelbrot_explorer::RunGuiCommand::new(presenter_factory, config, "output");

    command.execute()
}
