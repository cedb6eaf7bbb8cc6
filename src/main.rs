#[tokio::main]
async fn main() {
    if let Err(err) = glpick::cli::run().await {
        glpick::ui::output::error(format!("{:#}", err));
        std::process::exit(1);
    }
}
