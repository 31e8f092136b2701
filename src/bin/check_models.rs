// Diagnostic: lists the generative models available to the configured API key.
use empa_backend::config::DEFAULT_MODEL;
use empa_backend::GeminiClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    dotenvy::dotenv().ok();

    let api_key = match std::env::var("GEMINI_API_KEY") {
        Ok(key) if !key.is_empty() => key,
        _ => {
            eprintln!("GEMINI_API_KEY not found in environment (or .env)");
            return Ok(());
        }
    };

    let client = GeminiClient::new(api_key, DEFAULT_MODEL.to_string());

    println!("Listing available models...");
    match client.list_models().await {
        Ok(models) => {
            for model in models.iter().filter(|m| m.supports_generate_content()) {
                match &model.display_name {
                    Some(display_name) => println!("{} ({})", model.name, display_name),
                    None => println!("{}", model.name),
                }
            }
        }
        Err(e) => eprintln!("Error: {}", e),
    }

    Ok(())
}
