use ecosort::config::Settings;
use ecosort::pipeline::orchestrator::ClassificationOrchestrator;
use tracing::Level;

fn init_logging() {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();
}

// One-shot harness: classify a single image file and print the verdict
// the web layer would serve.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let settings = Settings::load()?;
    let path = std::env::args()
        .nth(1)
        .ok_or("usage: ecosort <image-file>")?;
    let image = tokio::fs::read(&path).await?;

    let orchestrator = ClassificationOrchestrator::builder(settings).build()?;
    match orchestrator.classify(&image).await {
        Ok(result) => {
            println!("{}", serde_json::to_string_pretty(&result)?);
            Ok(())
        }
        Err(err) => {
            eprintln!("HTTP {}: {}", err.status_code(), err.body());
            std::process::exit(1);
        }
    }
}
