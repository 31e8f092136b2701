// Fetches the face-api.js model weights used by the browser-side face
// detector into the static assets directory. Safe to re-run: existing files
// are skipped and individual failures do not abort the rest.
use std::path::Path;

const MODELS_DIR: &str = "frontend/public/models";
const BASE_URL: &str =
    "https://raw.githubusercontent.com/justadudewhohacks/face-api.js/master/weights";

const MODEL_FILES: [&str; 6] = [
    "tiny_face_detector_model-weights_manifest.json",
    "tiny_face_detector_model-shard1",
    "face_expression_model-weights_manifest.json",
    "face_expression_model-shard1",
    "face_landmark_68_model-weights_manifest.json",
    "face_landmark_68_model-shard1",
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let models_dir = Path::new(MODELS_DIR);
    if !models_dir.exists() {
        tokio::fs::create_dir_all(models_dir).await?;
        println!("Created directory: {}", MODELS_DIR);
    }

    let client = reqwest::Client::new();

    for model_name in MODEL_FILES {
        let dest_path = models_dir.join(model_name);
        if dest_path.exists() {
            println!("Skipping {} (already exists)", model_name);
            continue;
        }

        println!("Downloading {}...", model_name);
        match download_file(&client, model_name, &dest_path).await {
            Ok(bytes) => println!("Done ({} bytes).", bytes),
            Err(e) => eprintln!("Failed to download {}: {}", model_name, e),
        }
    }

    Ok(())
}

async fn download_file(
    client: &reqwest::Client,
    model_name: &str,
    dest_path: &Path,
) -> Result<usize, Box<dyn std::error::Error + Send + Sync>> {
    let url = format!("{}/{}", BASE_URL, model_name);
    let response = client.get(&url).send().await?;

    if !response.status().is_success() {
        return Err(format!("HTTP {}", response.status()).into());
    }

    let bytes = response.bytes().await?;
    tokio::fs::write(dest_path, &bytes).await?;
    Ok(bytes.len())
}
