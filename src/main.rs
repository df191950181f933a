use blogtui::ui::app::App;
use blogtui::util::{hook, log};

#[tokio::main(flavor = "multi_thread", worker_threads = 4)]
async fn main() -> color_eyre::Result<()> {
    dotenv::dotenv().ok();
    color_eyre::install()?;
    hook::set_panic_hook();
    log::initialize_logging()?;

    App::new().await?.run().await
}
